/*!
Literals, aka. atoms paired with a (boolean) polarity.

A literal with positive polarity asserts its atom, and a literal with negative polarity denies its atom.
Two literals are *complementary* when they share an atom and differ in polarity, and a complementary pair supplies the pivot of a [resolution](crate::resolution) step.

An example:

```rust
# use entrench::structures::literal::Literal;
let literal = Literal::new("p", true);

assert!(literal.polarity());
assert_eq!(literal.atom(), "p");
assert_eq!(literal.negated(), Literal::new("p", false));
assert!(literal.complements(&literal.negated()));
assert_eq!(format!("{literal}"), "p");
assert_eq!(format!("{}", literal.negated()), "~p");
```

Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
And, literals are hashable in order to allow for straightforward membership tests on derived clauses during resolution.
*/

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    pub fn new(atom: impl Into<Atom>, polarity: bool) -> Self {
        Literal {
            atom: atom.into(),
            polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negated(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Whether the literal and `other` are complementary (same atom, opposite polarity).
    pub fn complements(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}
