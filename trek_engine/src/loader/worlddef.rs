//! WorldDef loader and conversion helpers.
//!
//! Reads the three world data files into a `WorldDef`, then converts that
//! data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use trek_data::{ItemDef, LocationDef, WorldDef};

use crate::item::Lock;
use crate::loader::items::parse_items;
use crate::loader::locations::parse_locations;
use crate::loader::map::parse_map;
use crate::loader::{ITEMS_FILE, LOCATIONS_FILE, LoadError, MAP_FILE};
use crate::{Grid, Item, ItemId, Location, LocationId, World};

/// Load a `WorldDef` from the map, location and item files in `dir`.
///
/// # Errors
/// - if any file can't be read or parsed
pub fn load_worlddef(dir: &Path) -> Result<WorldDef> {
    let map = parse_map(&read_data_file(dir, MAP_FILE)?)?;
    let locations = parse_locations(&read_data_file(dir, LOCATIONS_FILE)?)?;
    let items = parse_items(&read_data_file(dir, ITEMS_FILE)?)?;
    Ok(WorldDef { map, locations, items })
}

fn read_data_file(dir: &Path, file: &str) -> Result<String> {
    let path = dir.join(file);
    fs::read_to_string(&path).with_context(|| format!("reading {file} from '{}'", path.display()))
}

/// Convert a validated `WorldDef` into a `World`. Items are not placed yet.
///
/// # Errors
/// - if the map is malformed
/// - if a locked item's key doesn't name an item defined before it
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    let grid = Grid::from_raw(&def.map).context("while building grid from map")?;
    let locations = def.locations.iter().map(location_from_def);
    let items = def
        .items
        .iter()
        .enumerate()
        .map(|(index, item_def)| item_from_def(def, index, item_def))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(World::new(grid, locations, items))
}

fn location_from_def(def: &LocationDef) -> Location {
    Location::new(
        LocationId(def.position),
        def.brief.clone(),
        def.long.clone(),
        def.visit_points,
    )
}

fn item_from_def(world: &WorldDef, index: usize, def: &ItemDef) -> Result<Item, LoadError> {
    let lock = match &def.lock {
        Some(lock) => {
            let key = world
                .earlier_item_named(index, &lock.key)
                .ok_or_else(|| LoadError::UnknownKey {
                    item: def.name.clone(),
                    key: lock.key.clone(),
                })?;
            Some(Lock {
                key: ItemId(key),
                hint: lock.hint.clone(),
                unlocked: false,
            })
        },
        None => None,
    };
    Ok(Item {
        id: ItemId(index),
        name: def.name.clone(),
        home_position: LocationId(def.home),
        target_position: LocationId(def.target),
        target_points: def.points,
        lock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trek_data::LockDef;

    fn def() -> WorldDef {
        WorldDef {
            map: vec![vec![0, 1]],
            locations: vec![
                LocationDef {
                    position: 0,
                    visit_points: 2,
                    brief: "West.".into(),
                    long: "The west end.".into(),
                },
                LocationDef {
                    position: 1,
                    visit_points: 0,
                    brief: "East.".into(),
                    long: "The east end.".into(),
                },
            ],
            items: vec![
                ItemDef {
                    name: "Badge".into(),
                    home: 0,
                    target: 0,
                    points: 0,
                    lock: None,
                },
                ItemDef {
                    name: "Locker Key".into(),
                    home: 1,
                    target: 0,
                    points: 7,
                    lock: Some(LockDef {
                        key: "badge".into(),
                        hint: "Staff only.".into(),
                    }),
                },
            ],
        }
    }

    #[test]
    fn builds_locations_and_items() {
        let world = build_world_from_def(&def()).unwrap();
        assert_eq!(world.locations.len(), 2);
        assert_eq!(world.location(LocationId(0)).unwrap().visit_points, 2);
        let key = world.item(ItemId(1)).unwrap();
        assert_eq!(key.name, "Locker Key");
        assert_eq!(key.lock.as_ref().unwrap().key, ItemId(0));
        assert!(key.is_locked());
        // nothing placed yet
        assert!(world.locations.values().all(|l| l.items.is_empty()));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let mut def = def();
        def.items[1].lock.as_mut().unwrap().key = "crowbar".into();
        let err = build_world_from_def(&def).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::UnknownKey {
                item: "Locker Key".into(),
                key: "crowbar".into()
            })
        );
    }

    #[test]
    fn key_defined_later_is_an_error() {
        let mut def = def();
        def.items.swap(0, 1);
        let err = build_world_from_def(&def).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::UnknownKey {
                item: "Locker Key".into(),
                key: "badge".into()
            })
        );
    }

    #[test]
    fn loads_files_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MAP_FILE), "0 1\n").unwrap();
        fs::write(
            dir.path().join(LOCATIONS_FILE),
            "0\nWest.\nThe west end.\nEND\n\n1\n4\nEast.\nThe east end.\nEND\n",
        )
        .unwrap();
        fs::write(dir.path().join(ITEMS_FILE), "0 1 3 Badge\n").unwrap();
        let def = load_worlddef(dir.path()).unwrap();
        assert_eq!(def.map, vec![vec![0, 1]]);
        assert_eq!(def.locations[1].visit_points, 4);
        assert_eq!(def.items[0].name, "Badge");
    }

    #[test]
    fn missing_file_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_worlddef(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("map.txt"));
    }
}
