//! Key structures, such as literals, clauses, formulas, and the expression language.
//!
//! Two families of structure are defined:
//!
//! # Expressions
//!
//! An [expression](expression) is a propositional sentence as written: atoms combined with negation, conjunction, disjunction, implication, and equivalence.
//! Expressions are what a caller hands to a base, and are the only structure with no canonical form: `a -> b` and `~a | b` are distinct expressions.
//!
//! # Canonical conjunctive normal form
//!
//! A [formula](formula) is a set of [clauses](clause), interpreted as the conjunction of those clauses, with each clause a set of [literals](literal), interpreted as the disjunction of those literals.
//!
//! Formulas, clauses, and literals are canonical: the collections are sorted with duplicates collapsed, and any syntactic difference which survives normalisation is a semantic difference in the structure.
//! So equality of formulas is plain structural equality, and two expressions which normalise to the same formula *are* the same formula.
//!
//! Every expression [normalises](crate::backend::Backend::normalize) to a formula, and every formula converts back to an expression, though the round trip forgets how the original expression was written.

pub mod atom;
pub mod clause;
pub mod expression;
pub mod formula;
pub mod literal;
