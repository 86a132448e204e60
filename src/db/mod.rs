/*!
Databases for holding beliefs and pending updates to beliefs.

- The [store](crate::db::store) holds every belief, indexed by decreasing order of entrenchment.
- The [reorder queue](crate::db::reorder_q) records order updates made during a scan of the store, for application as a batch once the scan is done.
*/

pub mod belief;
pub mod reorder_q;
pub mod store;
