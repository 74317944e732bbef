//! Game configuration and loader.
//!
//! Everything about a session that isn't world data: the move budget, where
//! the player starts, which location must collect the winning items, speed
//! boosts handed out on first visits, and the ranks used in the end summary.
//! A missing or unreadable `game.toml` falls back to defaults.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::LocationId;

/// Grid coordinates the player starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StartPoint {
    pub x: usize,
    pub y: usize,
}

/// A one-time change to the player's movement multiplier, applied on first arrival at `location`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedBoost {
    pub location: LocationId,
    pub multiplier: f64,
    pub message: String,
}

/// A single scoring rank with its threshold and flavor text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRank {
    /// Minimum percentage (0.0-100.0) required to achieve this rank
    pub threshold: f32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Session is lost once move units spent exceed this.
    pub move_budget: u32,
    pub goal_location: LocationId,
    pub start: StartPoint,
    pub speed_boosts: Vec<SpeedBoost>,
    /// Sorted list of ranks (highest threshold first)
    pub ranks: Vec<ScoringRank>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_budget: 20,
            goal_location: LocationId(0),
            start: StartPoint::default(),
            speed_boosts: Vec::new(),
            ranks: default_scoring_ranks(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text. Missing keys take default values.
    ///
    /// # Errors
    /// - if the text is not valid TOML for a `GameConfig`
    pub fn from_toml_str(text: &str) -> Result<GameConfig> {
        let mut config: GameConfig = toml::from_str(text).context("parsing game configuration")?;
        if config.ranks.is_empty() {
            config.ranks = default_scoring_ranks();
        }
        config.ranks.sort_by(|a, b| {
            b.threshold
                .partial_cmp(&a.threshold)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(config)
    }

    /// Returns the (name, description) of the rank for a completion percentage.
    pub fn rank_for(&self, percent: f32) -> (&str, &str) {
        for rank in &self.ranks {
            if percent >= rank.threshold {
                return (&rank.name, &rank.description);
            }
        }

        if let Some(last_rank) = self.ranks.last() {
            (&last_rank.name, &last_rank.description)
        } else {
            ("Unranked", "No scoring data available.")
        }
    }

    /// The speed boost waiting at `location`, if any.
    pub fn boost_at(&self, location: LocationId) -> Option<&SpeedBoost> {
        self.speed_boosts.iter().find(|boost| boost.location == location)
    }
}

/// Ranks used when `game.toml` has none. Sorted highest threshold first.
fn default_scoring_ranks() -> Vec<ScoringRank> {
    vec![
        ScoringRank {
            threshold: 99.0,
            name: "Valedictorian".to_string(),
            description: "Every corner visited, every item delivered. Flawless.".to_string(),
        },
        ScoringRank {
            threshold: 75.0,
            name: "Dean's List".to_string(),
            description: "A sharp, efficient run with very little left on the table.".to_string(),
        },
        ScoringRank {
            threshold: 50.0,
            name: "Honour Roll".to_string(),
            description: "Solid work. A few stops were skipped along the way.".to_string(),
        },
        ScoringRank {
            threshold: 25.0,
            name: "Passing Grade".to_string(),
            description: "You got around, but most of the campus stayed a mystery.".to_string(),
        },
        ScoringRank {
            threshold: 0.0,
            name: "Auditing".to_string(),
            description: "Were you even enrolled?".to_string(),
        },
    ]
}

/// Loads the game configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails; a `warn!` is logged if the file can't be read or parsed.
pub fn load_config(toml_path: &Path) -> GameConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!(
                "game configuration loaded from '{}' (budget {}, goal location {})",
                toml_path.display(),
                config.move_budget,
                config.goal_location
            );
            config
        },
        Err(e) => {
            warn!(
                "Could not load game configuration from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            GameConfig::default()
        },
    }
}

fn try_load_config(toml_path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading game configuration from '{}'", toml_path.display()))?;
    GameConfig::from_toml_str(&text)
}
