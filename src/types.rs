//! Core value types shared by the grid, the movement rules and the search routines.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Grid coordinates of a single cell.
///
/// `x` is the column and `y` the row, both zero-based with the origin at the top-left corner of
/// the level. Grids are always stored row-major, so a position is looked up as `grid[y][x]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Position {
    /// Builds a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the adjacent position in the given direction.
    ///
    /// Stepping off the top or left edge of the grid yields `None`. The result is not checked
    /// against the right or bottom edge; that is the job of the level the position is used with.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { x, y })
    }

    /// Manhattan distance between two positions, saturating at `usize::MAX`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{},{}", self.x, self.y)
    }
}

/// Failure to read a [`Position`] from its `x,y` text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionParseError {
    /// The text did not contain exactly one comma.
    #[error("expected a position in the form `x,y`, got `{0}`")]
    Format(String),
    /// One of the coordinates was not an unsigned integer.
    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] ParseIntError),
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = text.split_once(',') else {
            return Err(PositionParseError::Format(text.to_owned()));
        };
        if y.contains(',') {
            return Err(PositionParseError::Format(text.to_owned()));
        }

        Ok(Self {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        })
    }
}

/// One of the four orthogonal grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Neighbour enumeration order used by every search routine.
    ///
    /// The order does not change which paths are shortest, but it does decide the traversal order
    /// and therefore which of several equally short paths is returned.
    pub const NEIGHBOR_ORDER: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// Column and row offset of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Abstract commands the game loop understands.
///
/// This is the whole vocabulary any input source has to produce; the mapping from physical keys
/// lives with the UI collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Input {
    /// Nothing happened since the previous poll.
    #[default]
    None,
    /// Move the player one cell up.
    Up,
    /// Move the player one cell down.
    Down,
    /// Move the player one cell left.
    Left,
    /// Move the player one cell right.
    Right,
    /// Interact with the tiles around the player.
    Action,
    /// Run the configured search from the player's position.
    Search,
    /// Leave the game loop.
    Quit,
}

impl Input {
    /// Direction of a movement input, if it is one.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::None | Self::Action | Self::Search | Self::Quit => None,
        }
    }
}
