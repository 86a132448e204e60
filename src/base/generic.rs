/*!
Methods of a generic base, excluding the belief change operations.

The change operations have a [module of their own](crate::procedures).
*/

use crate::{
    backend::Backend,
    base::GenericBase,
    config::{Config, OrderValue},
    db::{
        belief::Belief,
        reorder_q::ReorderQ,
        store::{BeliefDB, BeliefKey},
    },
    misc::log::targets,
};

impl<B: Backend> GenericBase<B> {
    /// A base from the given configuration and backend, holding no beliefs.
    pub fn with_backend(config: Config, backend: B) -> Self {
        GenericBase {
            belief_db: BeliefDB::new(&config),
            reorder_q: ReorderQ::default(),
            config,
            backend,
        }
    }

    /// The number of beliefs held.
    pub fn len(&self) -> usize {
        self.belief_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.belief_db.is_empty()
    }

    /// An iterator over the beliefs held, by decreasing order.
    pub fn beliefs(&self) -> impl Iterator<Item = &Belief> {
        self.belief_db.beliefs()
    }

    /// Removes every belief held.
    pub fn clear(&mut self) {
        log::debug!(target: targets::BASE, "cleared");
        self.belief_db.clear();
        self.reorder_q.clear();
    }

    /// Queues an order update for application on the next commit.
    pub(crate) fn q_reorder(&mut self, key: BeliefKey, order: OrderValue) {
        self.reorder_q.push_back((key, order));
    }

    /// Applies every queued order update.
    pub(crate) fn commit_reorders(&mut self) {
        self.belief_db.commit(&mut self.reorder_q);
    }
}

impl<B: Backend> std::fmt::Display for GenericBase<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_empty() {
            true => write!(f, "empty"),
            false => {
                for (index, belief) in self.beliefs().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{belief}")?;
                }
                Ok(())
            }
        }
    }
}
