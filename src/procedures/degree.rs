/*!
Degree of belief, aka. the order of entrenchment at which the base commits to a formula.

The degree of a tautology is [MAX_ORDER](crate::config::order::MAX_ORDER), on any base.
Otherwise, strata accumulate from the most entrenched down, and the degree is the order of the first stratum whose accumulated beliefs entail the formula.
A formula no accumulation entails has degree [MIN_ORDER](crate::config::order::MIN_ORDER).
*/

use crate::{
    backend::Backend,
    base::GenericBase,
    config::{
        order::{MAX_ORDER, MIN_ORDER},
        OrderValue,
    },
    misc::log::targets,
    resolution::entails,
    structures::{expression::Expr, formula::Formula},
};

impl<B: Backend> GenericBase<B> {
    /// The degree of belief of `expr` against the base.
    ///
    /// ```rust
    /// # use entrench::base::specific::BeliefBase;
    /// let base = BeliefBase::default();
    ///
    /// assert_eq!(base.degree(&"p | ~p".parse().unwrap()), 1.0);
    /// assert_eq!(base.degree(&"p".parse().unwrap()), 0.0);
    /// ```
    pub fn degree(&self, expr: &Expr) -> OrderValue {
        let formula = self.backend.normalize(expr);
        let degree = self.degree_formula(&formula);
        log::debug!(target: targets::DEGREE, "{formula} held to degree {degree}");
        degree
    }

    /// The degree of belief of a formula already in canonical form.
    pub(crate) fn degree_formula(&self, formula: &Formula) -> OrderValue {
        if entails(&[], formula) {
            return MAX_ORDER;
        }

        let mut premises: Vec<&Formula> = Vec::default();
        for (order, members) in self.belief_db.strata() {
            premises.extend(members.iter().map(|member| member.formula()));
            if entails(&premises, formula) {
                return order;
            }
        }

        MIN_ORDER
    }
}
