//! This crate contains the game logic for tilecrawl, a single-player tile-grid dungeon walker.
//!
//! A level is loaded from a small text format, the player walks it and opens doors, and two
//! searches (a flood fill and an A* shortest path) can be run from the player's cell and watched
//! as they spread through the grid. The game loop only talks to the screen and keyboard through
//! the [`GameUi`] trait; [`TerminalUi`] is the ratatui implementation the binary uses.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod camera;
mod config;
mod events;
mod file_loader;
mod frontier;
mod level;
mod logging;
mod map;
mod movement;
mod pathfinding;
mod tile;
mod types;
mod ui;

pub use app::{Game, GameUi, SearchMode, Settings};
pub use config::Cli;
pub use file_loader::{load_level, parse_level, parse_lines, LoadError};
pub use level::Level;
pub use logging::init as init_logging;
pub use movement::{apply_input, Outcome};
pub use pathfinding::{find_path, flood_fill, NoopObserver, Step, StepObserver};
pub use tile::Tile;
pub use types::{Direction, Input, Position, PositionParseError};
pub use ui::TerminalUi;
