/*!
Clauses, aka. collections of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is a sorted vector of distinct literals, fixed at construction.

```rust
# use entrench::structures::clause::Clause;
# use entrench::structures::literal::Literal;
let clause = Clause::from_literals(vec![
    Literal::new("q", false),
    Literal::new("p", true),
    Literal::new("q", false),
]);

assert_eq!(clause.len(), 2);
assert_eq!(format!("{clause}"), "p | ~q");
```

- The clause with zero literals is the distinguished *empty clause*, which is always false (never true), and deriving it during [resolution](crate::resolution) refutes the clause set under examination.
- A clause containing a complementary pair of literals is *tautological*, always true, and so dropped when a [formula](crate::structures::formula) is put in canonical form.
*/

use crate::structures::literal::Literal;

/// A sorted vector of distinct literals, interpreted as their disjunction.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    /// The literals of the clause, sorted, without duplicates.
    literals: Vec<Literal>,
}

impl Clause {
    /// The empty clause, false on any valuation.
    pub fn empty() -> Self {
        Clause { literals: vec![] }
    }

    /// A clause over the given literals, sorted with duplicates collapsed.
    pub fn from_literals(mut literals: Vec<Literal>) -> Self {
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// An iterator over the literals of the clause, in sorted order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the given literal is a literal of the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Whether the clause contains a complementary pair of literals.
    ///
    /// As the literals are sorted by atom and then polarity, a complementary pair is always adjacent.
    pub fn is_tautological(&self) -> bool {
        self.literals
            .windows(2)
            .any(|pair| pair[0].complements(&pair[1]))
    }

    /// The disjunction of the clause and `other`, with the given literal removed from the clause and the literal's negation removed from `other`.
    ///
    /// The resolvent of the pair on the given pivot, when the pivot is a literal of the clause and its negation a literal of `other`.
    pub fn resolvent_on(&self, other: &Self, pivot: &Literal) -> Self {
        let negated_pivot = pivot.negated();
        let mut literals: Vec<Literal> = self
            .literals
            .iter()
            .filter(|l| *l != pivot)
            .cloned()
            .collect();
        literals.extend(other.literals.iter().filter(|l| **l != negated_pivot).cloned());
        Clause::from_literals(literals)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literals.as_slice() {
            [] => write!(f, "false"),
            [first, rest @ ..] => {
                write!(f, "{first}")?;
                for literal in rest {
                    write!(f, " | {literal}")?;
                }
                Ok(())
            }
        }
    }
}
