//! Tile classification rules.
//!
//! Every rule in here looks at a single tile value and nothing else, so they are all pure and
//! `const`.

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Impassable terrain.
    Cliff,
    /// Open floor.
    Ground,
    /// A door the player cannot pass until it is opened.
    ClosedDoor,
    /// A door the player can walk through.
    OpenDoor,
    /// A cell outside the populated part of the map.
    #[default]
    Blank,
    /// Spawn marker whose concrete tile has not been resolved yet.
    ///
    /// Only exists while a level is being loaded.
    Pending,
    /// Walkable test tile from the map format.
    Placeholder,
}

impl Tile {
    /// Maps a map-file character to its tile.
    ///
    /// Returns `None` for characters outside the map format.
    #[must_use]
    pub const fn from_char(character: char) -> Option<Self> {
        match character {
            ' ' | '\t' | '\r' => Some(Self::Blank),
            '#' => Some(Self::Cliff),
            '.' => Some(Self::Ground),
            'X' => Some(Self::ClosedDoor),
            'x' => Some(Self::OpenDoor),
            'P' => Some(Self::Pending),
            't' => Some(Self::Placeholder),
            _ => None,
        }
    }

    /// Whether the player may stand on this tile.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        match self {
            Self::Ground | Self::OpenDoor | Self::Placeholder => true,
            Self::Cliff | Self::ClosedDoor | Self::Blank | Self::Pending => false,
        }
    }

    /// Whether this tile is a door in either state.
    #[must_use]
    pub const fn is_door(self) -> bool {
        matches!(self, Self::OpenDoor | Self::ClosedDoor)
    }

    /// Flips a door between open and closed. Every other tile comes back unchanged.
    #[must_use]
    pub const fn toggle_door(self) -> Self {
        match self {
            Self::OpenDoor => Self::ClosedDoor,
            Self::ClosedDoor => Self::OpenDoor,
            other => other,
        }
    }
}
