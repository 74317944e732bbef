//! Item types and the containers that hold them.
//!
//! Every [`Item`] is owned by exactly one container at a time: a location's
//! item set or the player's inventory. Both containers are [`ItemSet`]s and
//! implement [`ItemHolder`], so ownership always moves through the same
//! small set of operations.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::LocationId;

/// Index of an item in the world's item table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub usize);

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Methods common to anything that can hold items.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: ItemId);
    fn remove_item(&mut self, item_id: ItemId);
    fn contains_item(&self, item_id: ItemId) -> bool;
}

/// An ordered set of item ids. Insertion order is kept so item lists render stably,
/// and an id can only appear once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSet {
    ids: Vec<ItemId>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` if not already present. Returns true if it was added.
    pub fn insert(&mut self, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Insert `id` at `index` (clamped to the end) if not already present.
    pub fn insert_at(&mut self, index: usize, id: ItemId) -> bool {
        if self.contains(id) {
            return false;
        }
        let index = index.min(self.ids.len());
        self.ids.insert(index, id);
        true
    }

    /// Remove `id`, returning the index it occupied.
    pub fn remove(&mut self, id: ItemId) -> Option<usize> {
        let index = self.position(id)?;
        self.ids.remove(index);
        Some(index)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.ids.iter().position(|&held| held == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ItemId> for ItemSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        let mut set = ItemSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Lock state for an item that needs a key before it can be picked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    /// The item that must be carried to unlock this one.
    pub key: ItemId,
    /// Shown to the player while the item stays locked.
    pub hint: String,
    /// Once true, stays true.
    pub unlocked: bool,
}

/// Anything in the world the player can carry around.
///
/// `home_position` is where the item starts; `target_position` is where it
/// must be dropped to earn `target_points`. Taking it back out of its target
/// location costs the same points again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub home_position: LocationId,
    pub target_position: LocationId,
    pub target_points: i64,
    pub lock: Option<Lock>,
}

impl Item {
    /// True if the name matches, ignoring case and surrounding whitespace.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// True if the item has a lock that hasn't been opened yet.
    pub fn is_locked(&self) -> bool {
        self.lock.as_ref().is_some_and(|lock| !lock.unlocked)
    }

    /// The hint to show while locked, if any.
    pub fn hint(&self) -> Option<&str> {
        self.lock.as_ref().map(|lock| lock.hint.as_str())
    }

    /// Try to unlock using whatever `holder` is carrying.
    ///
    /// Returns true if the item may be taken: it has no lock, was already
    /// unlocked, or the key is held (in which case it is now permanently unlocked).
    pub fn try_unlock(&mut self, holder: &impl ItemHolder) -> bool {
        match &mut self.lock {
            None => true,
            Some(lock) if lock.unlocked => true,
            Some(lock) => {
                if holder.contains_item(lock.key) {
                    lock.unlocked = true;
                }
                lock.unlocked
            },
        }
    }

    /// True if dropping this item at `location` scores (and picking it up there costs) points.
    pub fn targets(&self, location: LocationId) -> bool {
        self.target_position == location
    }
}
