/*!
(The representation of) an atom (aka. a propositional variable).

Broadly, atoms are named things to which assigning a (boolean) value is of interest.

An atom is represented by its name: a string of alphanumeric or underscore characters which does not begin with a digit.
Examples: `p`, `atom_one`, `rain`.

Names travel with the structures built over them, so a formula is a self-contained value: formulas normalised by different bases, or by no base at all, compare and resolve against each other without consulting a shared table.

# Notes
- The reserved words `true` and `false` are constants of the [expression](crate::structures::expression) language, not atoms.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a propositional variable, represented by its name.
pub type Atom = String;
