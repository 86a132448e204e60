/*!
Satisfiability of a conjunction of clauses, by the basic procedure of Davis, Putnam, Logemann, and Loveland.

Unit clauses propagate until none remain, then the search splits on a literal from a shortest clause.
*/

use crate::structures::{clause::Clause, literal::Literal};

/// Whether some valuation satisfies every clause of the given conjunction.
pub(super) fn satisfiable(mut clauses: Vec<Clause>) -> bool {
    loop {
        let Some(shortest) = clauses.iter().min_by_key(|clause| clause.len()) else {
            // Every clause is satisfied.
            return true;
        };

        let Some(pivot) = shortest.literals().next().cloned() else {
            // The empty clause.
            return false;
        };

        match shortest.len() {
            1 => clauses = assign(clauses, &pivot),

            _ => {
                return satisfiable(assign(clauses.clone(), &pivot))
                    || satisfiable(assign(clauses, &pivot.negated()))
            }
        }
    }
}

/// The given clauses under the assignment making `literal` true.
///
/// Clauses containing `literal` are satisfied and dropped, while the complement of `literal` is false and is removed from the clauses which contain it.
fn assign(clauses: Vec<Clause>, literal: &Literal) -> Vec<Clause> {
    let complement = literal.negated();
    clauses
        .into_iter()
        .filter(|clause| !clause.contains(literal))
        .map(|clause| match clause.contains(&complement) {
            true => Clause::from_literals(
                clause
                    .literals()
                    .filter(|l| **l != complement)
                    .cloned()
                    .collect(),
            ),
            false => clause,
        })
        .collect()
}
