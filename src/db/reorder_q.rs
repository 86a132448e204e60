/*!
The reorder queue of deferred order updates, recorded during a scan of the base and applied afterwards.

Expansion and contraction examine every relevant belief against an entrenchment ranking which must hold still while it is examined.
So, mutation is split into two phases: the scan appends `(key, order)` commands to the queue and never touches the store, and a [commit](crate::db::store::BeliefDB::commit) drains the queue against the store once the scan is done.

A queued order of zero is a removal.
The queue belongs to a base and is always empty between operations.
*/

use std::collections::VecDeque;

use crate::{config::OrderValue, db::store::BeliefKey};

/// A queue of pending order updates, drained on commit.
pub type ReorderQ = VecDeque<(BeliefKey, OrderValue)>;
