//! Command line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    app::{SearchMode, Settings},
    file_loader::{self, LoadError},
    level::Level,
    map,
    types::Position,
};

/// Walk a tile-grid dungeon, open doors, and watch flood fill and A* explore it.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Level file to play. The bundled level is used when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub map: Option<PathBuf>,
    /// Goal cell for the search key, as `x,y`. Without a goal the search key runs a flood fill.
    #[arg(short, long, value_name = "X,Y")]
    pub goal: Option<Position>,
    /// Pause after each cell the flood fill discovers, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 10)]
    pub flood_delay_ms: u64,
    /// Pause after each cell of a found path, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub path_delay_ms: u64,
    /// How long to wait for a key press before redrawing, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub poll_timeout_ms: u64,
    /// Write logs to this file. Logging is off otherwise, since the terminal belongs to the game.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the configured level, or the bundled one.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`] from reading or parsing the level.
    pub fn load_level(&self) -> Result<Level, LoadError> {
        match &self.map {
            Some(path) => file_loader::load_level(path),
            None => map::default_level(),
        }
    }

    /// Game loop settings derived from the arguments.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            search: self.goal.map_or(SearchMode::FloodFill, SearchMode::PathTo),
            flood_delay: Duration::from_millis(self.flood_delay_ms),
            path_delay: Duration::from_millis(self.path_delay_ms),
        }
    }

    /// Input poll timeout for the terminal UI.
    #[must_use]
    pub const fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }
}
