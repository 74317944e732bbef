#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const TREK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod action;
pub mod command;
pub mod data_paths;
pub mod grid;
pub mod item;
pub mod loader;
pub mod location;
pub mod player;
pub mod repl;
pub mod session;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use action::{Action, Direction, available_actions};
pub use grid::Grid;
pub use item::{Item, ItemHolder, ItemId, ItemSet};
pub use loader::{load_session, load_world};
pub use location::{Location, LocationId};
pub use player::Player;
pub use repl::run_repl;
pub use session::{Session, SessionState};
pub use view::{View, ViewItem};
pub use world::{Outcome, World, WorldError};
