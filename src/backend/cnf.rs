/*!
Transformation of expressions to clauses.

A single recursive pass carries a negation flag in place of rewriting `Not` nodes, so implication and equivalence elimination, the push of negations to atoms, and the distribution of disjunction over conjunction happen together.
*/

use crate::structures::{clause::Clause, expression::Expr, literal::Literal};

/// The clauses of the expression, or of its negation when `negated` is set.
///
/// The conjunction of the returned clauses is equivalent to the (possibly negated) expression.
/// A true expression yields no clauses, a false expression yields the empty clause.
pub(super) fn clauses(expr: &Expr, negated: bool) -> Vec<Clause> {
    match (expr, negated) {
        (Expr::True, false) | (Expr::False, true) => vec![],

        (Expr::True, true) | (Expr::False, false) => vec![Clause::empty()],

        (Expr::Atom(name), _) => {
            vec![Clause::from_literals(vec![Literal::new(
                name.clone(),
                !negated,
            )])]
        }

        (Expr::Not(expr), _) => clauses(expr, !negated),

        // l & r, and by De Morgan the negation of l | r.
        (Expr::And(left, right), false) | (Expr::Or(left, right), true) => {
            let mut conjunction = clauses(left, negated);
            conjunction.append(&mut clauses(right, negated));
            conjunction
        }

        // l | r, and by De Morgan the negation of l & r.
        (Expr::Or(left, right), false) | (Expr::And(left, right), true) => {
            disjoin(clauses(left, negated), clauses(right, negated))
        }

        // ~l | r
        (Expr::Implies(antecedent, consequent), false) => {
            disjoin(clauses(antecedent, true), clauses(consequent, false))
        }

        // l & ~r
        (Expr::Implies(antecedent, consequent), true) => {
            let mut conjunction = clauses(antecedent, false);
            conjunction.append(&mut clauses(consequent, true));
            conjunction
        }

        // (~l | r) & (~r | l)
        (Expr::Iff(left, right), false) => {
            let mut conjunction = disjoin(clauses(left, true), clauses(right, false));
            conjunction.append(&mut disjoin(clauses(right, true), clauses(left, false)));
            conjunction
        }

        // (l | r) & (~l | ~r)
        (Expr::Iff(left, right), true) => {
            let mut conjunction = disjoin(clauses(left, false), clauses(right, false));
            conjunction.append(&mut disjoin(clauses(left, true), clauses(right, true)));
            conjunction
        }
    }
}

/// The clauses of the disjunction of two conjunctions of clauses, by distribution.
///
/// Each pair of clauses, one from either side, merges into a single clause.
fn disjoin(left: Vec<Clause>, right: Vec<Clause>) -> Vec<Clause> {
    let mut merged = Vec::with_capacity(left.len() * right.len());
    for left_clause in &left {
        for right_clause in &right {
            merged.push(Clause::from_literals(
                left_clause
                    .literals()
                    .chain(right_clause.literals())
                    .cloned()
                    .collect(),
            ));
        }
    }
    merged
}
