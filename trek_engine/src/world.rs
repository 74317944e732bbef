//! Data structures representing the game world.
//!
//! This module defines [`World`], which ties the [`Grid`] to its locations and
//! items and resolves player commands against them. Player state lives apart
//! from the world (see [`crate::Session`]) and is passed in to each operation.

use std::collections::HashMap;

use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use variantly::Variantly;

use crate::command::{Command, META_COMMANDS, parse_command};
use crate::{
    Action, Direction, Grid, Item, ItemHolder, ItemId, ItemSet, Location, LocationId, Player, available_actions,
};

/// Broken invariants in the world model. These point at a bug or bad data, never at bad player input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("no location at ({x}, {y})")]
    NoLocationAt { x: usize, y: usize },
    #[error("location {0} not found in world")]
    UnknownLocation(LocationId),
    #[error("{0} not found in world")]
    UnknownItem(ItemId),
    #[error("goal location {0} has no winning items")]
    NoWinningItems(LocationId),
}

/// Player picked a name that isn't on offer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no item named '{0}' here")]
    NotHere(String),
    #[error("not carrying an item named '{0}'")]
    NotCarried(String),
    #[error("the session is over")]
    SessionOver,
    #[error(transparent)]
    World(#[from] WorldError),
}

/// What a dispatched command did, or what the caller should do next.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum Outcome {
    /// Not recognized or not available right now. Nothing changed.
    Invalid { input: String },
    Moved { direction: Direction, cost: f64 },
    /// Ask the player which of these to pick up, then call [`World::pick_up`].
    ChoosePickUp { offered: Vec<String> },
    /// Ask the player which of these to drop, then call [`World::drop_item`].
    ChooseDrop { offered: Vec<String> },
    Look { description: String },
    /// Names of carried items; empty if the bag is empty.
    Inventory { names: Vec<String> },
    Score { score: i64 },
    Menu { options: Vec<&'static str> },
    Quit,
    /// The session already ended; nothing was dispatched.
    SessionOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickUpOutcome {
    /// Moved into the inventory. `penalty` is set if it was taken from its target location.
    Taken {
        name: String,
        penalty: Option<i64>,
        unlocked: bool,
    },
    /// Still locked; left where it was.
    Locked { name: String, hint: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub name: String,
    /// Set if dropped at its target location.
    pub reward: Option<i64>,
}

/// Complete state of the world apart from the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub grid: Grid,
    pub locations: HashMap<LocationId, Location>,
    pub items: Vec<Item>,
}

impl World {
    pub fn new(grid: Grid, locations: impl IntoIterator<Item = Location>, items: Vec<Item>) -> World {
        let locations = locations
            .into_iter()
            .map(|location| (location.position, location))
            .collect();
        World { grid, locations, items }
    }

    /// The location at grid coordinates (x, y), if any.
    pub fn resolve(&self, x: usize, y: usize) -> Option<&Location> {
        self.grid.cell(x, y).and_then(|id| self.locations.get(&id))
    }

    pub fn resolve_mut(&mut self, x: usize, y: usize) -> Option<&mut Location> {
        self.grid.cell(x, y).and_then(|id| self.locations.get_mut(&id))
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Obtain a reference to the location the player occupies.
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn player_location(&self, player: &Player) -> Result<&Location, WorldError> {
        self.resolve(player.x, player.y).ok_or_else(|| {
            error!("player stranded at ({}, {}) with no location", player.x, player.y);
            WorldError::NoLocationAt { x: player.x, y: player.y }
        })
    }

    /// Obtain a mutable reference to the location the player occupies.
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn player_location_mut(&mut self, player: &Player) -> Result<&mut Location, WorldError> {
        self.resolve_mut(player.x, player.y)
            .ok_or(WorldError::NoLocationAt { x: player.x, y: player.y })
    }

    /// Actions available to the player this turn.
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn available_actions(&self, player: &Player) -> Result<Vec<Action>, WorldError> {
        let location = self.player_location(player)?;
        Ok(available_actions(&self.grid, player, location))
    }

    /// Display names of the items in `set`, in order.
    pub fn item_names(&self, set: &ItemSet) -> Vec<String> {
        set.ids()
            .filter_map(|id| self.item(id))
            .map(|item| item.name.clone())
            .collect()
    }

    /// Find the item in `set` whose name matches `name` (ignoring case).
    pub fn find_item(&self, set: &ItemSet, name: &str) -> Option<ItemId> {
        find_in_set(&self.items, set, name)
    }

    /// Resolve one command typed by the player.
    ///
    /// Commands that need an action (moves, pick up, drop) are refused unless
    /// that action is currently available. Pick up and drop only report what is
    /// on offer; the caller asks for a name and then calls [`World::pick_up`] or
    /// [`World::drop_item`].
    ///
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn dispatch(&mut self, player: &mut Player, input: &str) -> Result<Outcome, WorldError> {
        let command = parse_command(input);
        let location = self.player_location(player)?;

        if let Some(action) = command.required_action()
            && !available_actions(&self.grid, player, location).contains(&action)
        {
            info!("refused unavailable command '{}'", input.trim());
            return Ok(Outcome::Invalid {
                input: input.trim().to_string(),
            });
        }

        let outcome = match command {
            Command::Go(direction) => {
                let cost = player.move_cost();
                player.go(direction);
                Outcome::Moved { direction, cost }
            },
            Command::PickUp => Outcome::ChoosePickUp {
                offered: self.item_names(&location.items),
            },
            Command::Drop => Outcome::ChooseDrop {
                offered: self.item_names(&player.inventory),
            },
            Command::Look => Outcome::Look {
                description: location.long_description.clone(),
            },
            Command::Inventory => Outcome::Inventory {
                names: self.item_names(&player.inventory),
            },
            Command::Score => Outcome::Score { score: player.score },
            Command::Menu => Outcome::Menu {
                options: META_COMMANDS.to_vec(),
            },
            Command::Quit => Outcome::Quit,
            Command::Unknown => Outcome::Invalid {
                input: input.trim().to_string(),
            },
        };
        Ok(outcome)
    }

    /// Move the named item from the player's location into their inventory.
    ///
    /// A locked item is only taken if its key is already carried; otherwise it
    /// goes back to the same place in the location's list. Taking an item out of
    /// its target location costs its target points.
    ///
    /// # Errors
    /// - `SelectionError::NotHere` if no item with that name is at the location
    /// - `SelectionError::World` if the player stands on a cell with no location
    pub fn pick_up(&mut self, player: &mut Player, name: &str) -> Result<PickUpOutcome, SelectionError> {
        let position = self
            .grid
            .cell(player.x, player.y)
            .ok_or(WorldError::NoLocationAt { x: player.x, y: player.y })?;
        let location = self
            .locations
            .get_mut(&position)
            .ok_or(WorldError::UnknownLocation(position))?;
        let item_id = find_in_set(&self.items, &location.items, name)
            .ok_or_else(|| SelectionError::NotHere(name.trim().to_string()))?;
        let item = self.items.get_mut(item_id.0).ok_or(WorldError::UnknownItem(item_id))?;

        let Some(index) = location.items.remove(item_id) else {
            return Err(SelectionError::NotHere(name.trim().to_string()));
        };

        let was_locked = item.is_locked();
        if !item.try_unlock(&*player) {
            location.items.insert_at(index, item_id);
            info!("'{}' is still locked at location {position}", item.name);
            return Ok(PickUpOutcome::Locked {
                name: item.name.clone(),
                hint: item.hint().unwrap_or_default().to_string(),
            });
        }

        player.add_item(item_id);
        let penalty = item.targets(position).then_some(item.target_points);
        if let Some(points) = penalty {
            player.award(-points);
        }
        info!(
            "player picked up '{}' ({item_id}) at location {position}{}",
            item.name,
            penalty.map(|p| format!(", losing {p} points")).unwrap_or_default()
        );
        Ok(PickUpOutcome::Taken {
            name: item.name.clone(),
            penalty,
            unlocked: was_locked,
        })
    }

    /// Move the named item from the player's inventory to their location.
    /// Dropping an item at its target location earns its target points.
    ///
    /// # Errors
    /// - `SelectionError::NotCarried` if the player has no item with that name
    /// - `SelectionError::World` if the player stands on a cell with no location
    pub fn drop_item(&mut self, player: &mut Player, name: &str) -> Result<DropOutcome, SelectionError> {
        let item_id = find_in_set(&self.items, &player.inventory, name)
            .ok_or_else(|| SelectionError::NotCarried(name.trim().to_string()))?;
        let item = self.items.get(item_id.0).ok_or(WorldError::UnknownItem(item_id))?;
        let position = self
            .grid
            .cell(player.x, player.y)
            .ok_or(WorldError::NoLocationAt { x: player.x, y: player.y })?;
        let location = self
            .locations
            .get_mut(&position)
            .ok_or(WorldError::UnknownLocation(position))?;

        player.remove_item(item_id);
        location.add_item(item_id);
        let reward = item.targets(position).then_some(item.target_points);
        if let Some(points) = reward {
            player.award(points);
        }
        info!(
            "player dropped '{}' ({item_id}) at location {position}{}",
            item.name,
            reward.map(|p| format!(", earning {p} points")).unwrap_or_default()
        );
        Ok(DropOutcome {
            name: item.name.clone(),
            reward,
        })
    }

    /// Items that must all rest at `goal` to win.
    pub fn winning_items(&self, goal: LocationId) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.targets(goal))
            .map(|item| item.id)
            .collect()
    }

    /// True if there are winning items for `goal` and every one of them lies there.
    pub fn goal_satisfied(&self, goal: LocationId) -> bool {
        let Some(location) = self.locations.get(&goal) else {
            return false;
        };
        let winning = self.winning_items(goal);
        !winning.is_empty() && winning.iter().all(|&id| location.contains_item(id))
    }

    /// Best possible score: every visit bonus plus every positive deposit.
    pub fn max_score(&self) -> i64 {
        let visits: i64 = self.locations.values().map(|l| l.visit_points.max(0)).sum();
        let deposits: i64 = self.items.iter().map(|i| i.target_points.max(0)).sum();
        visits + deposits
    }

    pub fn visited_count(&self) -> usize {
        self.locations.values().filter(|l| l.visited).count()
    }

    /// How many containers currently hold `item_id`. Always 1 in a consistent world.
    pub fn owner_count(&self, player: &Player, item_id: ItemId) -> usize {
        let in_locations = self
            .locations
            .values()
            .filter(|location| location.contains_item(item_id))
            .count();
        in_locations + usize::from(player.contains_item(item_id))
    }
}

fn find_in_set(items: &[Item], set: &ItemSet, name: &str) -> Option<ItemId> {
    set.ids()
        .find(|id| items.get(id.0).is_some_and(|item| item.matches_name(name)))
}
