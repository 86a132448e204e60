/*!
Builders: methods which put new information into a base, and the parser which builds expressions from text.

[add](crate::base::GenericBase::add) is the raw primitive beneath every change operation.
It swaps a belief in or out without consulting the ranking, and on its own makes no promise any postulate holds afterwards.
*/

pub mod parse;
pub mod structures;

/// Fine grained information on the result of a change operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOk {
    /// The change applied.
    Applied,

    /// The input was contradictory and ignored, with the base unchanged.
    Contradiction,
}
