use crate::{config::OrderValue, structures::formula::Formula};

/// A held formula together with the order of entrenchment at which it is held.
///
/// Orders are strictly positive for any belief in a base.
/// An order of zero means the formula is not held, and drives removal on [commit](crate::db::store::BeliefDB::commit).
#[derive(Clone, Debug, PartialEq)]
pub struct Belief {
    formula: Formula,
    order: OrderValue,
}

impl Belief {
    pub fn new(formula: Formula, order: OrderValue) -> Self {
        Belief { formula, order }
    }

    /// The formula held.
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// The order at which the formula is held.
    pub fn order(&self) -> OrderValue {
        self.order
    }

    pub(super) fn set_order(&mut self, order: OrderValue) {
        self.order = order;
    }
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Belief({}, order={})", self.formula, self.order)
    }
}
