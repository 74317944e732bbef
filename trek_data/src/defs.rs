use serde::{Deserialize, Serialize};

/// Map cell value marking an impassable square with no location.
pub const SENTINEL: i64 = -1;

/// Everything needed to build a world, as read from the data files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WorldDef {
    /// Rows of location positions, `SENTINEL` where there is no location.
    #[serde(default)]
    pub map: Vec<Vec<i64>>,
    #[serde(default)]
    pub locations: Vec<LocationDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

impl WorldDef {
    /// Width of the first map row, or zero for an empty map.
    pub fn map_width(&self) -> usize {
        self.map.first().map_or(0, Vec::len)
    }

    /// Index of the item named `name` (ignoring case) among those defined before `index`.
    /// A lock key must come earlier in the file than the item it unlocks.
    pub fn earlier_item_named(&self, index: usize, name: &str) -> Option<usize> {
        self.items
            .iter()
            .take(index)
            .position(|item| item.name.eq_ignore_ascii_case(name))
    }
}

/// A single location record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationDef {
    pub position: usize,
    #[serde(default)]
    pub visit_points: i64,
    pub brief: String,
    pub long: String,
}

/// A single item record. Items with a `lock` must be unlocked by carrying their key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDef {
    pub name: String,
    pub home: usize,
    pub target: usize,
    pub points: i64,
    #[serde(default)]
    pub lock: Option<LockDef>,
}

impl ItemDef {
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }
}

/// Lock payload of an item: the name of the key item and the hint shown while locked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockDef {
    pub key: String,
    pub hint: String,
}
