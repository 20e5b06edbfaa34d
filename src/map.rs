//! Bundled level content.
//!
//! The default level ships inside the binary so the game can start without a map file.

use crate::{
    file_loader::{self, LoadError},
    level::Level,
};

/// Text of the default level, `maps/level1.map`.
pub(crate) const DEFAULT_LEVEL: &str = include_str!("../maps/level1.map");

/// Parses the bundled default level.
///
/// # Errors
///
/// Only fails if the bundled map itself is malformed, see [`file_loader::parse_level`].
pub(crate) fn default_level() -> Result<Level, LoadError> {
    file_loader::parse_level(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pathfinding, tile::Tile, types::Position};

    #[test]
    fn test_default_level_loads() {
        let level = default_level().expect("default level should load");

        assert_eq!(level.height(), 11);
        assert_eq!(level.width(), 42);
        assert_eq!(level.player(), Position::new(7, 3));
        assert_eq!(level.tile_at(level.player()), Some(Tile::Ground));
    }

    #[test]
    fn test_default_level_uses_every_special_tile() {
        let level = default_level().expect("default level should load");
        let tiles: Vec<Tile> = level.rows().iter().flatten().copied().collect();

        assert!(tiles.contains(&Tile::ClosedDoor));
        assert!(tiles.contains(&Tile::OpenDoor));
        assert!(tiles.contains(&Tile::Placeholder));
    }

    #[test]
    fn test_default_level_far_room_needs_a_door() {
        let mut level = default_level().expect("default level should load");
        let player = level.player();
        let far_room = Position::new(30, 2);

        let path = pathfinding::find_path(
            &mut level,
            player,
            far_room,
            &mut pathfinding::NoopObserver,
        );
        assert!(path.is_empty(), "closed doors seal off the east wing");

        for door in [Position::new(12, 4), Position::new(8, 6)] {
            assert_eq!(level.tile_at(door).map(Tile::is_door), Some(true));
        }
    }
}
