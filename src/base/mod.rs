/*!
The belief base, owner of everything revised.

A base owns a [configuration](crate::config), a [backend](crate::backend), the [belief store](crate::db::store), and the [reorder queue](crate::db::reorder_q), and every operation on beliefs goes through a method on the base.

The base is generic over its backend.
[BeliefBase](crate::base::specific::BeliefBase) fixes the backend to the in-process [CanonicalBackend](crate::backend::CanonicalBackend) and is the type to use unless a different formula engine is wanted.

```rust
# use entrench::base::specific::BeliefBase;
let mut base = BeliefBase::default();

base.revise(&"rain -> wet".parse().unwrap(), 0.8, true)?;
base.revise(&"rain".parse().unwrap(), 0.6, true)?;

assert!(base.degree(&"wet".parse().unwrap()) >= 0.6);
# Ok::<(), entrench::types::err::OrderError>(())
```
*/

pub mod generic;
pub mod specific;

use crate::{
    backend::Backend,
    config::Config,
    db::{reorder_q::ReorderQ, store::BeliefDB},
};

/// A base of beliefs ranked by entrenchment, generic over the formula backend.
pub struct GenericBase<B: Backend> {
    /// The configuration of the base.
    pub config: Config,

    /// The formula backend: normalisation and satisfiability.
    pub backend: B,

    /// The store of every belief held.
    pub belief_db: BeliefDB,

    /// Order updates queued during a scan, applied on commit.
    pub reorder_q: ReorderQ,
}
