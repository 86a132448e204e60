/*!
The formula backend: normalisation of expressions to canonical form, and satisfiability of formulas in canonical form.

A [belief base](crate::base) is generic over its backend, and everything the base knows about formula semantics passes through the [`Backend`] trait.
So, a different normal form engine or satisfiability procedure can be swapped in without touching belief logic.

[`CanonicalBackend`] is the in-process implementation: a structural transformation to conjunctive normal form, and a plain DPLL procedure over the result.
*/

mod canonical;
mod cnf;
mod dpll;

pub use canonical::CanonicalBackend;

use crate::structures::{expression::Expr, formula::Formula};

/// The semantic operations a belief base requires of formulas.
pub trait Backend {
    /// The canonical conjunctive normal form of the given expression.
    ///
    /// Canonical: normalising an expression rebuilt from a normalised formula returns the formula, so equality of normalised formulas is structural.
    fn normalize(&self, expr: &Expr) -> Formula;

    /// Whether some valuation satisfies the given formula.
    fn satisfiable(&self, formula: &Formula) -> bool;
}
