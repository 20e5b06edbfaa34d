//! Level loading from the text map format.
//!
//! A map is a sequence of lines, one per grid row. Rows shorter than the longest one are padded
//! with blank tiles. A single `P` marks where the player spawns; that cell is resolved to a
//! concrete tile by looking at its neighbourhood once the whole grid has been read.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};

use crate::{level::Level, tile::Tile, types::Position};

/// Reasons a level cannot be loaded.
///
/// All of them are fatal: the loader never hands out a partially built level.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The map source could not be read.
    #[error("failed to read map file `{}`", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A character outside the map format was found.
    #[error("invalid map character {character:?} at column {x}, row {y}")]
    InvalidMapCharacter {
        /// Offending character.
        character: char,
        /// Column of the character.
        x: usize,
        /// Row of the character.
        y: usize,
    },
    /// The spawn marker has no ground tile around it to take its place.
    #[error("spawn marker at column {x}, row {y} has no adjacent ground tile")]
    UnresolvableSpawn {
        /// Column of the marker.
        x: usize,
        /// Row of the marker.
        y: usize,
    },
    /// The map has no spawn marker.
    #[error("map has no player spawn marker `P`")]
    MissingSpawn,
    /// The map has more than one spawn marker.
    #[error("map has {count} player spawn markers, expected exactly one")]
    MultipleSpawns {
        /// Number of markers found.
        count: usize,
    },
}

/// Reads and parses the map file at `path`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, and any error [`parse_level`] returns
/// for its contents.
pub fn load_level(path: &Path) -> Result<Level, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let level = parse_level(&contents)?;
    info!(
        path = %path.display(),
        width = level.width(),
        height = level.height(),
        player = %level.player(),
        "level loaded"
    );

    Ok(level)
}

/// Parses a whole map held in memory.
///
/// # Errors
///
/// See [`parse_lines`].
pub fn parse_level(text: &str) -> Result<Level, LoadError> {
    parse_lines(text.lines())
}

/// Builds a level from its rows.
///
/// # Errors
///
/// - [`LoadError::InvalidMapCharacter`] for a character outside the map format
/// - [`LoadError::MissingSpawn`] or [`LoadError::MultipleSpawns`] unless there is exactly one `P`
/// - [`LoadError::UnresolvableSpawn`] if the `P` has no ground tile around it
pub fn parse_lines<I, S>(lines: I) -> Result<Level, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grid = Vec::new();
    let mut spawns = Vec::new();

    for (y, line) in lines.into_iter().enumerate() {
        let mut row = Vec::new();
        for (x, character) in line.as_ref().chars().enumerate() {
            let tile = Tile::from_char(character)
                .ok_or(LoadError::InvalidMapCharacter { character, x, y })?;
            if tile == Tile::Pending {
                spawns.push(Position::new(x, y));
            }
            row.push(tile);
        }
        grid.push(row);
    }

    let width = grid.iter().map(Vec::len).max().unwrap_or_default();
    for row in &mut grid {
        row.resize(width, Tile::Blank);
    }

    let player = match spawns.as_slice() {
        [] => return Err(LoadError::MissingSpawn),
        [spawn] => *spawn,
        _ => {
            return Err(LoadError::MultipleSpawns {
                count: spawns.len(),
            })
        }
    };

    let resolved = resolve_spawn(&grid, player)?;
    if let Some(cell) = grid
        .get_mut(player.y)
        .and_then(|row| row.get_mut(player.x))
    {
        *cell = resolved;
    }
    debug!(%player, tile = ?resolved, "spawn marker resolved");

    Ok(Level::new(grid, player))
}

/// Picks the concrete tile for a spawn marker.
///
/// The 3x3 neighbourhood is scanned row by row from the top, and left to right within each row,
/// skipping the marker itself and anything outside the grid. The first ground tile decides.
fn resolve_spawn(grid: &[Vec<Tile>], spawn: Position) -> Result<Tile, LoadError> {
    for y in spawn.y.saturating_sub(1)..=spawn.y.saturating_add(1) {
        let Some(row) = grid.get(y) else {
            continue;
        };
        for x in spawn.x.saturating_sub(1)..=spawn.x.saturating_add(1) {
            if (x, y) == (spawn.x, spawn.y) {
                continue;
            }
            if row.get(x) == Some(&Tile::Ground) {
                return Ok(Tile::Ground);
            }
        }
    }

    Err(LoadError::UnresolvableSpawn {
        x: spawn.x,
        y: spawn.y,
    })
}
