//! Player -- position, inventory and progress of the one player in a session
use crate::{Direction, ItemHolder, ItemId, ItemSet};

use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub inventory: ItemSet,
    /// May go negative: taking an item back out of its target location costs points.
    pub score: i64,
    /// Move-budget units spent so far. Each step costs `1 / movement_multiplier`.
    pub moves_taken: f64,
    /// Physical steps taken, regardless of cost.
    pub steps: u32,
    pub victory: bool,
    pub movement_multiplier: f64,
    /// Units spent before the current multiplier took effect.
    spent_at_earlier_speeds: f64,
    /// Steps taken at the current multiplier.
    steps_at_speed: u32,
}

/// Slack allowed when comparing spent units with the budget. Far below any real step cost.
const BUDGET_TOLERANCE: f64 = 1e-9;

impl Default for Player {
    fn default() -> Player {
        Player::new(0, 0)
    }
}

impl Player {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            inventory: ItemSet::new(),
            score: 0,
            moves_taken: 0.0,
            steps: 0,
            victory: false,
            movement_multiplier: 1.0,
            spent_at_earlier_speeds: 0.0,
            steps_at_speed: 0,
        }
    }

    /// Budget units one step currently costs.
    pub fn move_cost(&self) -> f64 {
        1.0 / self.movement_multiplier
    }

    /// Take one step in `direction` and charge the move budget.
    ///
    /// The destination must already be known to be open; this only refuses
    /// steps that would leave the coordinate space (returns false).
    pub fn go(&mut self, direction: Direction) -> bool {
        let Some((x, y)) = direction.step(self.x, self.y) else {
            return false;
        };
        self.x = x;
        self.y = y;
        // rebuilt from whole step counts, never summed one fractional cost at a time
        self.steps_at_speed = self.steps_at_speed.saturating_add(1);
        self.moves_taken = self.spent_at_earlier_speeds + f64::from(self.steps_at_speed) / self.movement_multiplier;
        self.steps = self.steps.saturating_add(1);
        info!(
            "player went {direction} to ({x}, {y}); {:.2} move units used",
            self.moves_taken
        );
        true
    }

    /// Set a new movement multiplier. Ignores values that are not positive and finite.
    pub fn set_movement_multiplier(&mut self, multiplier: f64) -> bool {
        if multiplier.is_finite() && multiplier > 0.0 {
            self.spent_at_earlier_speeds = self.moves_taken;
            self.steps_at_speed = 0;
            self.movement_multiplier = multiplier;
            true
        } else {
            warn!("ignored invalid movement multiplier {multiplier}");
            false
        }
    }

    /// True once more than `budget` units have been spent. Spending exactly the budget is allowed.
    pub fn over_budget(&self, budget: u32) -> bool {
        self.moves_taken - f64::from(budget) > BUDGET_TOLERANCE
    }

    /// Add (or with a negative amount, subtract) points.
    pub fn award(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item_id: ItemId) {
        self.inventory.insert(item_id);
    }

    fn remove_item(&mut self, item_id: ItemId) {
        self.inventory.remove(item_id);
    }

    fn contains_item(&self, item_id: ItemId) -> bool {
        self.inventory.contains(item_id)
    }
}
