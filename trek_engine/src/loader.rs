//! Loader utilities for building a `World` and `Session` from the data directory.
//!
//! World content comes from three plain-text files (map, locations, items);
//! session settings come from `game.toml`.

pub mod config;
pub mod items;
pub mod locations;
pub mod map;
pub mod placement;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use thiserror::Error;
use trek_data::WorldDef;

use crate::data_paths::data_dir;
use crate::loader::config::load_config;
use crate::loader::placement::place_items;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::{Session, World};

pub const MAP_FILE: &str = "map.txt";
pub const LOCATIONS_FILE: &str = "locations.txt";
pub const ITEMS_FILE: &str = "items.txt";
pub const CONFIG_FILE: &str = "game.toml";

/// Malformed data file contents. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("{file}:{line}: expected an integer, found '{token}'")]
    BadInteger {
        file: &'static str,
        line: usize,
        token: String,
    },
    #[error("{file}:{line}: position {value} is negative")]
    NegativePosition { file: &'static str, line: usize, value: i64 },
    #[error("{file}:{line}: description of location {position} has no END line")]
    MissingEnd {
        file: &'static str,
        line: usize,
        position: usize,
    },
    #[error("{file}:{line}: record ends early, expected {expected}")]
    Truncated {
        file: &'static str,
        line: usize,
        expected: &'static str,
    },
    #[error("{file}:{line}: item record has no name")]
    MissingName { file: &'static str, line: usize },
    #[error("locked item '{item}' names key '{key}', which isn't an item defined before it")]
    UnknownKey { item: String, key: String },
}

/// Parse a signed integer token, reporting where it came from on failure.
pub(crate) fn parse_int(token: &str, file: &'static str, line: usize) -> Result<i64, LoadError> {
    token.trim().parse::<i64>().map_err(|_| LoadError::BadInteger {
        file,
        line,
        token: token.trim().to_string(),
    })
}

/// Parse a non-negative location position.
pub(crate) fn parse_position(token: &str, file: &'static str, line: usize) -> Result<usize, LoadError> {
    let value = parse_int(token, file, line)?;
    usize::try_from(value).map_err(|_| LoadError::NegativePosition { file, line, value })
}

/// Load the `World` from the default data directory.
///
/// # Errors
/// Errors bubble up from file IO, parsing, or failed validation.
pub fn load_world() -> Result<World> {
    load_world_from(data_dir())
}

/// Load the `World` from the data files in `dir`.
///
/// # Errors
/// Errors bubble up from file IO, parsing, or failed validation.
pub fn load_world_from(dir: &Path) -> Result<World> {
    let worlddef = load_worlddef(dir).with_context(|| format!("while loading world data from '{}'", dir.display()))?;
    validate_worlddef(&worlddef)?;
    let mut world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!(
        "{}x{} map added to World",
        world.grid.width(),
        world.grid.height()
    );
    info!("{} locations added to World", world.locations.len());
    info!("{} items added to World", world.items.len());

    place_items(&mut world)?;
    Ok(world)
}

/// Load the world and `game.toml` from the default data directory and start a session.
///
/// # Errors
/// Errors bubble up from world loading, or if the configured start or goal
/// doesn't fit the loaded world.
pub fn load_session() -> Result<Session> {
    load_session_from(data_dir())
}

/// Load the world and `game.toml` from `dir` and start a session.
///
/// # Errors
/// Errors bubble up from world loading, or if the configured start or goal
/// doesn't fit the loaded world.
pub fn load_session_from(dir: &Path) -> Result<Session> {
    let world = load_world_from(dir)?;
    let config = load_config(&dir.join(CONFIG_FILE));
    info!("Game configuration loaded with {} ranks", config.ranks.len());
    Session::new(world, config).context("while starting session from game configuration")
}

/// Validate the parsed `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = trek_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
