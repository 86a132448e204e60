/*!
The belief store: every belief held, with an index sorted by decreasing order.

Beliefs live in a slotmap and are referred to by [BeliefKey].
The index carries each key exactly once, and the store maintains two invariants across every mutation:

- No two beliefs hold an equal formula.
- Index position is consistent with decreasing order of entrenchment.

Stored order values stay distinct even when close enough to rank together.
Grouping only happens on iteration, through [strata](BeliefDB::strata).
*/

use slotmap::SlotMap;

use crate::{
    config::{order, Config, OrderValue},
    db::{belief::Belief, reorder_q::ReorderQ},
    misc::log::targets,
    structures::formula::Formula,
};

slotmap::new_key_type! {
    /// A key to a belief held in some store.
    pub struct BeliefKey;
}

/// A store of beliefs, indexed by decreasing order of entrenchment.
#[derive(Clone, Debug)]
pub struct BeliefDB {
    /// Every belief held.
    beliefs: SlotMap<BeliefKey, Belief>,

    /// Keys to every belief held, sorted by decreasing order.
    index: Vec<BeliefKey>,

    /// Orders within this tolerance of each other rank in one stratum.
    stratum_tolerance: OrderValue,
}

impl BeliefDB {
    pub fn new(config: &Config) -> Self {
        BeliefDB {
            beliefs: SlotMap::with_key(),
            index: Vec::default(),
            stratum_tolerance: config.stratum_tolerance,
        }
    }

    /// The number of beliefs held.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The belief keyed by `key`, if it is held.
    pub fn get(&self, key: BeliefKey) -> Option<&Belief> {
        self.beliefs.get(key)
    }

    /// The key to the belief holding a formula equal to `formula`, if any.
    pub fn find(&self, formula: &Formula) -> Option<BeliefKey> {
        self.index
            .iter()
            .find(|key| match self.beliefs.get(**key) {
                Some(belief) => belief.formula() == formula,
                None => false,
            })
            .copied()
    }

    /// Stores `belief` and indexes it by order, after any belief of equal order.
    ///
    /// The caller ensures no held belief has an equal formula and that the order is positive.
    pub fn insert(&mut self, belief: Belief) -> BeliefKey {
        let order = belief.order();
        let key = self.beliefs.insert(belief);
        let position = self
            .index
            .partition_point(|indexed| match self.beliefs.get(*indexed) {
                Some(indexed) => indexed.order() >= order,
                None => false,
            });
        self.index.insert(position, key);
        key
    }

    /// Removes and returns the belief keyed by `key`.
    pub fn remove(&mut self, key: BeliefKey) -> Option<Belief> {
        self.index.retain(|indexed| *indexed != key);
        self.beliefs.remove(key)
    }

    /// Removes every belief held.
    pub fn clear(&mut self) {
        self.index.clear();
        self.beliefs.clear();
    }

    /// An iterator over the beliefs held, by decreasing order.
    pub fn beliefs(&self) -> impl Iterator<Item = &Belief> {
        self.index.iter().filter_map(|key| self.beliefs.get(*key))
    }

    /// The keys to every belief held, by decreasing order, detached from the store.
    ///
    /// A scan iterates the returned keys while queueing updates, with nothing borrowed from the store.
    pub fn keys_descending(&self) -> Vec<BeliefKey> {
        self.index.clone()
    }

    /// An iterator over the strata of the base, by decreasing order.
    pub fn strata(&self) -> Strata<'_> {
        Strata {
            db: self,
            position: 0,
        }
    }

    /// Applies every queued update, in queue order.
    ///
    /// A queued order of zero removes the belief, any other reorders it.
    /// The index stays consistent with decreasing order throughout.
    pub fn commit(&mut self, queue: &mut ReorderQ) {
        while let Some((key, order)) = queue.pop_front() {
            if order > order::MIN_ORDER {
                let Some(belief) = self.beliefs.get_mut(key) else {
                    continue;
                };
                log::debug!(target: targets::QUEUE, "{belief} reordered to {order}");
                belief.set_order(order);

                self.index.retain(|indexed| *indexed != key);
                let position = self
                    .index
                    .partition_point(|indexed| match self.beliefs.get(*indexed) {
                        Some(indexed) => indexed.order() >= order,
                        None => false,
                    });
                self.index.insert(position, key);
            } else {
                self.index.retain(|indexed| *indexed != key);
                if let Some(belief) = self.beliefs.remove(key) {
                    log::debug!(target: targets::QUEUE, "{belief} dropped");
                }
            }
        }
    }
}

/// An iterator over the strata of a store, by decreasing order.
///
/// A stratum is the consecutive run of beliefs whose orders lie within the stratum tolerance of the run's first, and so highest, member.
/// The first member's order represents the stratum.
pub struct Strata<'d> {
    db: &'d BeliefDB,
    position: usize,
}

impl<'d> Iterator for Strata<'d> {
    type Item = (OrderValue, Vec<&'d Belief>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut members = Vec::default();
        let mut representative = None;

        while let Some(key) = self.db.index.get(self.position) {
            let Some(belief) = self.db.beliefs.get(*key) else {
                self.position += 1;
                continue;
            };

            match representative {
                None => representative = Some(belief.order()),
                Some(order) => {
                    if !order::close(order, belief.order(), self.db.stratum_tolerance) {
                        break;
                    }
                }
            }

            members.push(belief);
            self.position += 1;
        }

        representative.map(|order| (order, members))
    }
}
