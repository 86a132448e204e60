/*!
Expressions of propositional logic, as given, prior to any normal form.

Expressions are built from atoms and the constants `true`/`false` by negation, conjunction, disjunction, implication, and equivalence.
The `!`, `&`, and `|` operators are overloaded for the first three, with methods for the rest.

```rust
# use entrench::structures::expression::Expr;
let rain = Expr::atom("rain");
let wet = Expr::atom("wet");

let expr = rain.clone().implies(wet) & !rain;

assert_eq!(format!("{expr}"), "(rain -> wet) & ~rain");
```

Expressions preserve the structure of their source, so equality of expressions is syntactic.
Equality up to logical equivalence requires a canonical [formula](crate::structures::formula), obtained through a [backend](crate::backend).
*/

use crate::structures::atom::Atom;

/// An expression of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// The constant true.
    True,

    /// The constant false.
    False,

    /// An atom, true or false by valuation.
    Atom(Atom),

    /// The negation of an expression.
    Not(Box<Expr>),

    /// The conjunction of two expressions.
    And(Box<Expr>, Box<Expr>),

    /// The disjunction of two expressions.
    Or(Box<Expr>, Box<Expr>),

    /// An implication, false only when the antecedent holds and the consequent fails.
    Implies(Box<Expr>, Box<Expr>),

    /// An equivalence, true when both sides agree.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// The atom with the given name.
    pub fn atom(name: impl Into<Atom>) -> Self {
        Expr::Atom(name.into())
    }

    /// The implication from the expression to `consequent`.
    pub fn implies(self, consequent: Self) -> Self {
        Expr::Implies(Box::new(self), Box::new(consequent))
    }

    /// The equivalence of the expression and `other`.
    pub fn iff(self, other: Self) -> Self {
        Expr::Iff(Box::new(self), Box::new(other))
    }

    /// The binding strength of the expression's top connective, loosest first.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Iff(_, _) => 1,
            Expr::Implies(_, _) => 2,
            Expr::Or(_, _) => 3,
            Expr::And(_, _) => 4,
            Expr::Not(_) => 5,
            Expr::True | Expr::False | Expr::Atom(_) => 6,
        }
    }
}

impl std::ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl std::ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Self::Output {
        Expr::And(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Self::Output {
        Expr::Or(Box::new(self), Box::new(rhs))
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Writes a subexpression, parenthesised unless its top connective binds at least as tightly as `bound`.
        fn write_bounded(
            f: &mut std::fmt::Formatter<'_>,
            expr: &Expr,
            bound: u8,
        ) -> std::fmt::Result {
            match expr.precedence() < bound {
                true => write!(f, "({expr})"),
                false => write!(f, "{expr}"),
            }
        }

        match self {
            Expr::True => write!(f, "true"),
            Expr::False => write!(f, "false"),
            Expr::Atom(name) => write!(f, "{name}"),
            Expr::Not(expr) => {
                write!(f, "~")?;
                write_bounded(f, expr, 5)
            }
            Expr::And(left, right) => {
                write_bounded(f, left, 4)?;
                write!(f, " & ")?;
                write_bounded(f, right, 5)
            }
            Expr::Or(left, right) => {
                write_bounded(f, left, 3)?;
                write!(f, " | ")?;
                write_bounded(f, right, 4)
            }
            Expr::Implies(antecedent, consequent) => {
                write_bounded(f, antecedent, 3)?;
                write!(f, " -> ")?;
                write_bounded(f, consequent, 2)
            }
            Expr::Iff(left, right) => {
                write_bounded(f, left, 2)?;
                write!(f, " <-> ")?;
                write_bounded(f, right, 1)
            }
        }
    }
}
