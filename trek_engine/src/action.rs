//! Actions the player may take on a given turn.
//!
//! Which actions are offered depends only on the map around the player, the
//! items at the current location and the player's inventory. The order is
//! fixed: North, South, East, West, Pick up, Drop.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Grid, Location, Player};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Coordinates one step away. `None` only if the step would go below zero.
    pub fn step(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Direction::North => Some((x, y.checked_sub(1)?)),
            Direction::South => Some((x, y.checked_add(1)?)),
            Direction::East => Some((x.checked_add(1)?, y)),
            Direction::West => Some((x.checked_sub(1)?, y)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// A turn action that is only sometimes available.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Go(Direction),
    PickUp,
    Drop,
}

impl Action {
    /// The label shown to the player.
    pub fn label(self) -> &'static str {
        match self {
            Action::Go(direction) => direction.label(),
            Action::PickUp => "Pick up",
            Action::Drop => "Drop",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// List the actions available to `player` standing at `location`.
pub fn available_actions(grid: &Grid, player: &Player, location: &Location) -> Vec<Action> {
    let mut actions: Vec<Action> = Direction::ALL
        .into_iter()
        .filter(|&direction| grid.open_neighbor(player.x, player.y, direction).is_some())
        .map(Action::Go)
        .collect();

    if !location.items.is_empty() {
        actions.push(Action::PickUp);
    }
    if !player.inventory.is_empty() {
        actions.push(Action::Drop);
    }
    actions
}
