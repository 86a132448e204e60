/*!
Contraction withdraws a formula down to an order of entrenchment.

A belief more entrenched than the target order is lowered to the target exactly when withdrawing the formula requires it, witnessed by the degrees: the disjunction of the formula with the belief is held no more strongly than the formula itself.
Beliefs at or below the target order are untouched, so contracting to an order at or above the formula's degree changes nothing.
*/

use crate::{
    backend::Backend,
    base::GenericBase,
    builder::ChangeOk,
    config::{order, OrderValue},
    misc::log::targets,
    structures::{expression::Expr, formula::Formula},
    types::err::OrderError,
};

impl<B: Backend> GenericBase<B> {
    /// Contracts the base, withdrawing `expr` to `order`.
    pub fn contract(
        &mut self,
        expr: &Expr,
        order: OrderValue,
    ) -> Result<ChangeOk, OrderError> {
        order::check(order)?;
        let formula = self.backend.normalize(expr);
        self.contract_formula(&formula, order);
        Ok(ChangeOk::Applied)
    }

    /// Contraction by a formula already in canonical form, with the order already validated.
    pub(crate) fn contract_formula(&mut self, formula: &Formula, order: OrderValue) {
        log::debug!(target: targets::CONTRACT, "contracting {formula} to order {order}");

        let formula_degree = self.degree_formula(formula);
        let expr = formula.as_expr();

        for key in self.belief_db.keys_descending() {
            let (held_order, held_formula) = match self.belief_db.get(key) {
                Some(belief) => (belief.order(), belief.formula().clone()),
                None => continue,
            };
            if held_order <= order {
                continue;
            }

            let disjunction = self
                .backend
                .normalize(&(expr.clone() | held_formula.as_expr()));
            let disjunction_degree = self.degree_formula(&disjunction);

            log::trace!(target: targets::CONTRACT, "{held_formula} at {held_order}, disjunction held to {disjunction_degree}");

            if order::close(
                formula_degree,
                disjunction_degree,
                self.config.stratum_tolerance,
            ) {
                self.q_reorder(key, order);
            }
        }

        self.commit_reorders();

        log::debug!(target: targets::CONTRACT, "base after contraction: {self}");
    }
}
