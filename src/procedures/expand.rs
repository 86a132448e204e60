/*!
Expansion accepts a formula at an order of entrenchment, without regard for consistency.

Expansion re-ranks every belief no more entrenched than the incoming order: a belief equivalent to the incoming formula rises to the incoming order, as does any belief the incoming formula implies at a degree above that order.
Any other scanned belief settles at the degree to which the base holds the implication from the incoming formula to the belief.

Contradictions are ignored rather than accepted, and a tautology is accepted at maximal order regardless of the order asked for.
*/

use crate::{
    backend::Backend,
    base::GenericBase,
    builder::ChangeOk,
    config::{
        order::{self, MAX_ORDER},
        OrderValue,
    },
    misc::log::targets,
    resolution::entails,
    structures::{expression::Expr, formula::Formula},
    types::err::OrderError,
};

impl<B: Backend> GenericBase<B> {
    /// Expands the base by `expr` at `order`, and when `add_on_finish` is set adds `expr` to the base at the settled order.
    ///
    /// Without `add_on_finish` only the re-ranking of held beliefs happens, as wanted when expansion finishes a [revision](GenericBase::revise).
    pub fn expand(
        &mut self,
        expr: &Expr,
        order: OrderValue,
        add_on_finish: bool,
    ) -> Result<ChangeOk, OrderError> {
        order::check(order)?;
        let formula = self.backend.normalize(expr);
        Ok(self.expand_formula(formula, order, add_on_finish))
    }

    /// Expansion by a formula already in canonical form, with the order already validated.
    pub(crate) fn expand_formula(
        &mut self,
        formula: Formula,
        mut order: OrderValue,
        add_on_finish: bool,
    ) -> ChangeOk {
        log::debug!(target: targets::EXPAND, "expanding by {formula} at order {order}");

        if !self.backend.satisfiable(&formula) {
            log::debug!(target: targets::EXPAND, "{formula} is contradictory, base unchanged");
            return ChangeOk::Contradiction;
        }

        if !self.backend.satisfiable(&formula.negated()) {
            order = MAX_ORDER;
        } else {
            let expr = formula.as_expr();

            for key in self.belief_db.keys_descending() {
                let (held_order, held_formula) = match self.belief_db.get(key) {
                    Some(belief) => (belief.order(), belief.formula().clone()),
                    None => continue,
                };
                if held_order > order {
                    continue;
                }

                let equivalence = self
                    .backend
                    .normalize(&expr.clone().iff(held_formula.as_expr()));
                let implication = self
                    .backend
                    .normalize(&expr.clone().implies(held_formula.as_expr()));
                let implied_degree = self.degree_formula(&implication);

                log::trace!(target: targets::EXPAND, "{held_formula} at {held_order}, implied to degree {implied_degree}");

                match entails(&[], &equivalence) || order < implied_degree {
                    true => self.q_reorder(key, order),
                    false => self.q_reorder(key, implied_degree),
                }
            }

            self.commit_reorders();
        }

        if add_on_finish {
            self.add_formula(formula, order);
        }

        log::debug!(target: targets::EXPAND, "base after expansion: {self}");
        ChangeOk::Applied
    }
}
