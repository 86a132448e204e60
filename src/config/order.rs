/*!
The representation of an entrenchment order.

An order expresses the commitment to maintain a belief when the base changes: the higher the order, the more entrenched the belief.

Orders are real values from the closed unit interval:
- [MIN_ORDER] (0) marks a formula which is not held at all.
  No belief with this order is ever stored; driving the order of a belief to [MIN_ORDER] removes it from the base.
- [MAX_ORDER] (1) marks a formula held with the greatest possible commitment, e.g. a tautology.

Two orders within a configured tolerance of each other rank as one stratum, while the stored values remain distinct (see [close] and [Config](crate::config::Config)).
*/

use crate::types::err::OrderError;

/// The order of a belief, a real value from the unit interval.
pub type OrderValue = f64;

/// The least order, marking a formula which is not held.
pub const MIN_ORDER: OrderValue = 0.0;

/// The greatest order, marking maximal commitment.
pub const MAX_ORDER: OrderValue = 1.0;

/// Ok, if the given value is a valid order.
///
/// NaN fails the range test, and so is rejected along with everything outside the unit interval.
///
/// ```rust
/// # use entrench::config::order;
/// assert!(order::check(0.55).is_ok());
/// assert!(order::check(1.0).is_ok());
/// assert!(order::check(-0.1).is_err());
/// assert!(order::check(f64::NAN).is_err());
/// ```
pub fn check(value: OrderValue) -> Result<(), OrderError> {
    match (MIN_ORDER..=MAX_ORDER).contains(&value) {
        true => Ok(()),
        false => Err(OrderError::OutOfRange),
    }
}

/// Whether two orders rank as equal under the given tolerance.
pub fn close(a: OrderValue, b: OrderValue, tolerance: OrderValue) -> bool {
    (a - b).abs() <= tolerance
}
