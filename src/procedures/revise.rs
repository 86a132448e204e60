/*!
Revision accepts a formula at an order of entrenchment, keeping the base consistent.

Revision follows the Levi identity.
When the incoming order overshoots the formula's present degree, the base contracts by the negation of the formula to clear room, then expands by the formula.
An incoming order at or below the present degree instead contracts the formula itself down to that order.

As with [expansion](crate::base::GenericBase::expand), contradictions are ignored and tautologies settle at maximal order.
*/

use crate::{
    backend::Backend,
    base::GenericBase,
    builder::ChangeOk,
    config::{
        order::{self, MAX_ORDER, MIN_ORDER},
        OrderValue,
    },
    misc::log::targets,
    structures::{expression::Expr, formula::Formula},
    types::err::OrderError,
};

impl<B: Backend> GenericBase<B> {
    /// Revises the base by `expr` at `order`, and when `add_on_finish` is set adds `expr` to the base at the settled order.
    ///
    /// ```rust
    /// # use entrench::base::specific::BeliefBase;
    /// let mut base = BeliefBase::default();
    ///
    /// base.revise(&"sound".parse().unwrap(), 0.7, true)?;
    /// base.revise(&"~sound".parse().unwrap(), 0.9, true)?;
    ///
    /// assert_eq!(base.degree(&"~sound".parse().unwrap()), 0.9);
    /// assert!(base.degree(&"sound".parse().unwrap()) < 0.9);
    /// # Ok::<(), entrench::types::err::OrderError>(())
    /// ```
    pub fn revise(
        &mut self,
        expr: &Expr,
        order: OrderValue,
        add_on_finish: bool,
    ) -> Result<ChangeOk, OrderError> {
        order::check(order)?;
        let formula = self.backend.normalize(expr);
        Ok(self.revise_formula(formula, order, add_on_finish))
    }

    /// Revision by a formula already in canonical form, with the order already validated.
    pub(crate) fn revise_formula(
        &mut self,
        formula: Formula,
        mut order: OrderValue,
        add_on_finish: bool,
    ) -> ChangeOk {
        let formula_degree = self.degree_formula(&formula);
        log::debug!(target: targets::REVISE, "revising by {formula} at order {order}, held to degree {formula_degree}");

        if !self.backend.satisfiable(&formula) {
            log::debug!(target: targets::REVISE, "{formula} is contradictory, base unchanged");
            return ChangeOk::Contradiction;
        }

        if !self.backend.satisfiable(&formula.negated()) {
            order = MAX_ORDER;
        } else if order <= formula_degree {
            self.contract_formula(&formula, order);
        } else {
            self.contract_formula(&formula.negated(), MIN_ORDER);
            self.expand_formula(formula.clone(), order, false);
        }

        if add_on_finish {
            self.add_formula(formula, order);
        }

        ChangeOk::Applied
    }
}
