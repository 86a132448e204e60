use super::{cnf, dpll, Backend};
use crate::structures::{expression::Expr, formula::Formula};

/// The in-process backend: structural transformation to conjunctive normal form, and DPLL satisfiability.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalBackend;

impl Backend for CanonicalBackend {
    fn normalize(&self, expr: &Expr) -> Formula {
        Formula::from_clauses(cnf::clauses(expr, false))
    }

    fn satisfiable(&self, formula: &Formula) -> bool {
        dpll::satisfiable(formula.conjuncts().cloned().collect())
    }
}
