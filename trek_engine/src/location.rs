//! Location definitions.
//!
//! A location is a node of the world map. It keeps its descriptions, the items
//! lying there, and whether the player has been there yet.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{ItemHolder, ItemId, ItemSet};

/// The position number of a location, as written in the map file.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub usize);

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Any visitable square of the world map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub position: LocationId,
    pub brief_description: String,
    pub long_description: String,
    pub items: ItemSet,
    pub visited: bool,
    /// Awarded once, the first time the player arrives.
    pub visit_points: i64,
}

impl Location {
    pub fn new(position: LocationId, brief: impl Into<String>, long: impl Into<String>, visit_points: i64) -> Self {
        Self {
            position,
            brief_description: brief.into(),
            long_description: long.into(),
            items: ItemSet::new(),
            visited: false,
            visit_points,
        }
    }

    /// Mark the location visited. Returns true only the first time.
    pub fn visit(&mut self) -> bool {
        let first = !self.visited;
        self.visited = true;
        first
    }

    /// Description to show on arrival: long until the location has been visited, brief afterward.
    pub fn arrival_description(&self) -> &str {
        if self.visited {
            &self.brief_description
        } else {
            &self.long_description
        }
    }
}

impl ItemHolder for Location {
    fn add_item(&mut self, item_id: ItemId) {
        self.items.insert(item_id);
    }

    fn remove_item(&mut self, item_id: ItemId) {
        self.items.remove(item_id);
    }

    fn contains_item(&self, item_id: ItemId) -> bool {
        self.items.contains(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_flips_once() {
        let mut location = Location::new(LocationId(2), "Lab", "A cluttered computer lab.", 5);
        assert!(!location.visited);
        assert!(location.visit());
        assert!(!location.visit());
        assert!(location.visited);
    }

    #[test]
    fn arrival_description_switches_after_visit() {
        let mut location = Location::new(LocationId(0), "Lab", "A cluttered computer lab.", 0);
        assert_eq!(location.arrival_description(), "A cluttered computer lab.");
        location.visit();
        assert_eq!(location.arrival_description(), "Lab");
    }

    #[test]
    fn item_holder_keeps_items_unique() {
        let mut location = Location::new(LocationId(0), "Lab", "A cluttered computer lab.", 0);
        location.add_item(ItemId(3));
        location.add_item(ItemId(3));
        assert_eq!(location.items.len(), 1);
        assert!(location.contains_item(ItemId(3)));
        location.remove_item(ItemId(3));
        assert!(!location.contains_item(ItemId(3)));
    }
}
