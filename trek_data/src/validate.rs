use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate map shape, cross-references and basic invariants in a WorldDef.
///
/// ```
/// use trek_data::{ItemDef, LocationDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     map: vec![vec![0, 1], vec![-1, 1]],
///     locations: vec![
///         LocationDef { position: 0, visit_points: 0, brief: "Hall".into(), long: "A long hall.".into() },
///         LocationDef { position: 1, visit_points: 5, brief: "Yard".into(), long: "A muddy yard.".into() },
///     ],
///     items: vec![ItemDef { name: "pen".into(), home: 0, target: 1, points: 10, lock: None }],
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut positions = HashSet::new();
    for location in &world.locations {
        if !positions.insert(location.position) {
            errors.push(ValidationError::DuplicateId {
                kind: "location",
                id: location.position.to_string(),
            });
        }
        validate_descriptions(location, &mut errors);
    }

    let on_map = validate_map(world, &positions, &mut errors);

    let mut names = HashSet::new();
    for item in &world.items {
        if item.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "item with empty name".to_string(),
            });
            continue;
        }
        if !names.insert(item.name.to_lowercase()) {
            errors.push(ValidationError::DuplicateId {
                kind: "item",
                id: item.name.clone(),
            });
        }
    }

    for (index, item) in world.items.iter().enumerate() {
        let context = format!("item '{}'", item.name);
        check_location_ref(item.home, &positions, format!("{context} home"), &mut errors);
        check_location_ref(item.target, &positions, format!("{context} target"), &mut errors);
        if positions.contains(&item.home) && !on_map.contains(&item.home) {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} starts at location {} which is not on the map", item.home),
            });
        }
        if let Some(lock) = &item.lock
            && world.earlier_item_named(index, &lock.key).is_none()
        {
            if lock.key.eq_ignore_ascii_case(&item.name) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} is its own key"),
                });
            } else if names.contains(&lock.key.to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} key '{}' is defined after the item it unlocks", lock.key),
                });
            } else {
                errors.push(ValidationError::MissingReference {
                    kind: "item",
                    id: lock.key.clone(),
                    context: format!("{context} key"),
                });
            }
        }
    }

    errors
}

/// Check the map is non-empty and rectangular, and that every open cell names a known location.
/// Returns the set of location positions that appear on the map.
fn validate_map(world: &WorldDef, positions: &HashSet<usize>, errors: &mut Vec<ValidationError>) -> HashSet<usize> {
    let mut on_map = HashSet::new();
    if world.map.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "map has no rows".to_string(),
        });
        return on_map;
    }

    let width = world.map_width();
    if width == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "map rows are empty".to_string(),
        });
    }

    for (y, row) in world.map.iter().enumerate() {
        if row.len() != width {
            errors.push(ValidationError::InvalidValue {
                context: format!("map row {y} has {} cells, expected {width}", row.len()),
            });
        }
        for (x, &cell) in row.iter().enumerate() {
            if cell == SENTINEL {
                continue;
            }
            match usize::try_from(cell) {
                Ok(position) => {
                    on_map.insert(position);
                    check_location_ref(position, positions, format!("map cell ({x}, {y})"), errors);
                },
                Err(_) => errors.push(ValidationError::InvalidValue {
                    context: format!("map cell ({x}, {y}) holds {cell}"),
                }),
            }
        }
    }
    on_map
}

fn validate_descriptions(location: &LocationDef, errors: &mut Vec<ValidationError>) {
    let brief = location.brief.trim();
    let long = location.long.trim();
    if brief.is_empty() || long.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("location {} has an empty description", location.position),
        });
    } else if brief.len() > long.len() {
        errors.push(ValidationError::InvalidValue {
            context: format!("location {} brief description is longer than its long one", location.position),
        });
    }
}

fn check_location_ref(position: usize, set: &HashSet<usize>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(&position) {
        errors.push(ValidationError::MissingReference {
            kind: "location",
            id: position.to_string(),
            context,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(position: usize) -> LocationDef {
        LocationDef {
            position,
            visit_points: 0,
            brief: format!("Spot {position}"),
            long: format!("A test spot numbered {position}."),
        }
    }

    fn item(name: &str, home: usize, target: usize) -> ItemDef {
        ItemDef {
            name: name.into(),
            home,
            target,
            points: 5,
            lock: None,
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            map: vec![vec![0, 1], vec![2, -1]],
            locations: vec![location(0), location(1), location(2)],
            items: vec![item("pen", 0, 1), item("card", 2, 1)],
        }
    }

    #[test]
    fn base_world_is_valid() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn empty_map_is_rejected() {
        let mut world = base_world();
        world.map.clear();
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::InvalidValue {
            context: "map has no rows".into()
        }));
    }

    #[test]
    fn jagged_map_is_rejected() {
        let mut world = base_world();
        world.map[1].push(0);
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("map row 1 has 3 cells")));
    }

    #[test]
    fn map_cell_must_name_known_location() {
        let mut world = base_world();
        world.map[1][1] = 7;
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::MissingReference {
            kind: "location",
            id: "7".into(),
            context: "map cell (1, 1)".into(),
        }));
    }

    #[test]
    fn negative_cells_other_than_sentinel_are_rejected() {
        let mut world = base_world();
        world.map[0][0] = -4;
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("holds -4")));
    }

    #[test]
    fn duplicate_item_names_ignore_case() {
        let mut world = base_world();
        world.items.push(item("PEN", 0, 2));
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "item",
            id: "PEN".into()
        }));
    }

    #[test]
    fn lock_key_must_exist() {
        let mut world = base_world();
        let mut locked = item("safe", 0, 1);
        locked.lock = Some(LockDef {
            key: "combination".into(),
            hint: "Find the combination.".into(),
        });
        world.items.push(locked);
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "item", id, .. } if id == "combination"
        )));
    }

    #[test]
    fn lock_key_must_be_defined_earlier() {
        let mut world = base_world();
        world.items[0].lock = Some(LockDef {
            key: "card".into(),
            hint: "Needs the card.".into(),
        });
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("defined after"));

        world.items[0].lock = None;
        world.items[1].lock = Some(LockDef {
            key: "PEN".into(),
            hint: "Needs the pen.".into(),
        });
        assert!(validate_world(&world).is_empty());
    }

    #[test]
    fn items_keyed_by_each_other_are_rejected() {
        let mut world = base_world();
        for (index, key) in [(0, "card"), (1, "pen")] {
            world.items[index].lock = Some(LockDef {
                key: key.into(),
                hint: "Locked.".into(),
            });
        }
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("item 'pen' key 'card'")));
    }

    #[test]
    fn brief_longer_than_long_is_rejected() {
        let mut world = base_world();
        world.locations[0].brief = "A much longer brief than the long text".into();
        world.locations[0].long = "Short.".into();
        assert_eq!(validate_world(&world).len(), 1);
    }

    #[test]
    fn item_home_off_map_is_rejected() {
        let mut world = base_world();
        world.locations.push(location(9));
        world.items.push(item("ghost", 9, 1));
        let errors = validate_world(&world);
        assert!(errors.iter().any(|e| e.to_string().contains("not on the map")));
    }
}
