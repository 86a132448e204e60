/*!
Formulas in conjunctive normal form, aka. collections of clauses, interpreted as the conjunction of those clauses.

The canonical representation of a formula is a sorted vector of distinct, non-tautological clauses, fixed at construction.
As tautological clauses are true on every valuation, dropping them preserves the formula, and in particular a tautology given in clausal form canonicalises to the formula with zero clauses.

Canonical form makes equality of formulas structural:

```rust
# use entrench::structures::expression::Expr;
# use entrench::backend::{Backend, CanonicalBackend};
let backend = CanonicalBackend::default();

let a = "p -> q".parse::<Expr>().unwrap();
let b = "~q -> ~p".parse::<Expr>().unwrap();

assert_eq!(backend.normalize(&a), backend.normalize(&b));
```
*/

use crate::structures::{clause::Clause, expression::Expr, literal::Literal};

/// A sorted vector of distinct, non-tautological clauses, interpreted as their conjunction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Formula {
    /// The clauses of the formula, sorted, without duplicates or tautologies.
    clauses: Vec<Clause>,
}

impl Formula {
    /// The formula with zero clauses, true on any valuation.
    pub fn verum() -> Self {
        Formula { clauses: vec![] }
    }

    /// A formula over the given clauses, sorted, with duplicate and tautological clauses dropped.
    pub fn from_clauses(mut clauses: Vec<Clause>) -> Self {
        clauses.retain(|clause| !clause.is_tautological());
        clauses.sort_unstable();
        clauses.dedup();
        Formula { clauses }
    }

    /// An iterator over the clauses of the formula, in sorted order.
    pub fn conjuncts(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The number of clauses in the formula.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the formula has zero clauses, and so is true on any valuation.
    pub fn is_verum(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Whether some clause of the formula is the empty clause.
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The canonical form of the negation of the formula.
    ///
    /// The negation of a conjunction of clauses holds iff every way of selecting one literal from each clause selects some false literal.
    /// So, the negation is the conjunction, over selections, of the disjunctions of the negated selected literals.
    pub fn negated(&self) -> Self {
        let mut selections: Vec<Vec<Literal>> = vec![vec![]];
        for clause in &self.clauses {
            let mut extended = Vec::with_capacity(selections.len() * clause.len());
            for selection in &selections {
                for literal in clause.literals() {
                    let mut choice = selection.clone();
                    choice.push(literal.negated());
                    extended.push(choice);
                }
            }
            selections = extended;
        }
        Formula::from_clauses(selections.into_iter().map(Clause::from_literals).collect())
    }

    /// The formula rebuilt as an expression, clause by clause.
    pub fn as_expr(&self) -> Expr {
        let mut conjuncts = self.clauses.iter().map(|clause| {
            let mut disjuncts = clause.literals().map(|literal| {
                let atom = Expr::Atom(literal.atom().to_owned());
                match literal.polarity() {
                    true => atom,
                    false => !atom,
                }
            });
            match disjuncts.next() {
                None => Expr::False,
                Some(first) => disjuncts.fold(first, |disjunction, next| disjunction | next),
            }
        });
        match conjuncts.next() {
            None => Expr::True,
            Some(first) => conjuncts.fold(first, |conjunction, next| conjunction & next),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.clauses.as_slice() {
            [] => write!(f, "true"),
            [clause] => write!(f, "{clause}"),
            clauses => {
                for (index, clause) in clauses.iter().enumerate() {
                    if index > 0 {
                        write!(f, " & ")?;
                    }
                    match clause.len() {
                        0 | 1 => write!(f, "{clause}")?,
                        _ => write!(f, "({clause})")?,
                    }
                }
                Ok(())
            }
        }
    }
}
