use crate::{
    backend::Backend,
    base::GenericBase,
    builder::ChangeOk,
    config::{order, OrderValue},
    db::belief::Belief,
    misc::log::targets,
    structures::{expression::Expr, formula::Formula},
    types::err::OrderError,
};

impl<B: Backend> GenericBase<B> {
    /// Adds a belief holding `expr` at `order`, replacing any belief holding an equal formula.
    ///
    /// No re-ranking of other beliefs happens.
    /// An order of zero removes any belief holding the formula and adds nothing.
    pub fn add(&mut self, expr: &Expr, order: OrderValue) -> Result<ChangeOk, OrderError> {
        order::check(order)?;
        let formula = self.backend.normalize(expr);
        self.add_formula(formula, order);
        Ok(ChangeOk::Applied)
    }

    /// Addition of a formula already in canonical form, with the order already validated.
    pub(crate) fn add_formula(&mut self, formula: Formula, order: OrderValue) {
        if let Some(key) = self.belief_db.find(&formula) {
            if let Some(replaced) = self.belief_db.remove(key) {
                log::debug!(target: targets::BASE, "{replaced} removed");
            }
        }

        if order > order::MIN_ORDER {
            let belief = Belief::new(formula, order);
            log::debug!(target: targets::BASE, "{belief} added");
            self.belief_db.insert(belief);
        }
    }
}
