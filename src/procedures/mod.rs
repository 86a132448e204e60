/*!
Procedures for inspecting and changing a base, each an `impl` block on [GenericBase](crate::base::GenericBase).

- [degree](crate::base::GenericBase::degree), the order of entrenchment at which the base as a whole commits to a formula.
- [expand](crate::base::GenericBase::expand), acceptance of a formula without regard for consistency.
- [contract](crate::base::GenericBase::contract), withdrawal of a formula to a given order.
- [revise](crate::base::GenericBase::revise), consistent acceptance of a formula, by the Levi identity: contract the negation, then expand.

The change procedures follow a common shape: validate the order, normalise the expression through the backend, scan the store while queueing order updates, and commit the queue as one batch.
Scans never touch the store, so every degree taken during a scan is taken against the base as it stood when the operation began.
*/

pub mod contract;
pub mod degree;
pub mod expand;
pub mod revise;
