//! Error types used in the library.
//!
//! - An order error is external --- a caller supplied an order outside the unit interval, and the requested change was refused with the base unchanged.
//! - A parse error is external --- some formula text could not be read.
//! - Contradictory input to expansion or revision is *not* an error.
//!   The operation is ignored and an Ok variant reports this --- see [ChangeOk](crate::builder::ChangeOk).
//!
//! Names of the error enums overlap with the corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping each specific error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Order(OrderError),
    Parse(ParseError),
}

/// Noted errors when validating an order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderError {
    /// The order is outside the unit interval (or NaN).
    /// No mutation has taken place.
    OutOfRange,
}

impl From<OrderError> for ErrorKind {
    fn from(e: OrderError) -> Self {
        ErrorKind::Order(e)
    }
}

/// Noted errors when parsing formula text.
///
/// Each variant carries the byte offset at which reading failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where a formula was required.
    Empty,

    /// A character with no reading, e.g. `?`.
    UnexpectedCharacter(usize),

    /// A closing parenthesis with no matching opening parenthesis, or the reverse.
    UnbalancedParenthesis(usize),

    /// An operator with a missing operand, e.g. `a &`.
    MissingOperand(usize),

    /// Readable input followed by something other than an operator, e.g. `a b`.
    TrailingInput(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
