//! The level: tile grid, player position and debug overlay.

use std::collections::BTreeSet;

use crate::{
    tile::Tile,
    types::{Direction, Position},
};

/// A loaded level.
///
/// The grid is rectangular and stored row-major. Once a level has been produced by the loader the
/// player always stands inside the grid on a walkable tile; movement keeps it that way. The
/// overlay holds the cells the last search flagged for visualisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Tile rows, all of the same length.
    pub(crate) grid: Vec<Vec<Tile>>,
    /// Current player cell.
    pub(crate) player: Position,
    /// Cells flagged by the most recent search.
    pub(crate) overlay: BTreeSet<Position>,
}

impl Level {
    /// Wraps an already validated grid.
    pub(crate) const fn new(grid: Vec<Vec<Tile>>, player: Position) -> Self {
        Self {
            grid,
            player,
            overlay: BTreeSet::new(),
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Tile rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.grid
    }

    /// Tile at `position`, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        self.grid
            .get(position.y)
            .and_then(|row| row.get(position.x))
            .copied()
    }

    /// Whether `position` is inside the grid and walkable.
    #[must_use]
    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile_at(position).is_some_and(Tile::is_walkable)
    }

    /// Walkable orthogonal neighbours of `position`, in [`Direction::NEIGHBOR_ORDER`].
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::NEIGHBOR_ORDER
            .into_iter()
            .filter_map(move |direction| position.step(direction))
            .filter(move |neighbor| self.is_walkable(*neighbor))
    }

    /// Current player cell.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Cells flagged by the most recent search.
    #[must_use]
    pub const fn overlay(&self) -> &BTreeSet<Position> {
        &self.overlay
    }

    /// Overwrites the tile at `position`. Returns `false` when the position is off the grid.
    pub(crate) fn set_tile(&mut self, position: Position, tile: Tile) -> bool {
        self.grid
            .get_mut(position.y)
            .and_then(|row| row.get_mut(position.x))
            .map(|cell| *cell = tile)
            .is_some()
    }
}
