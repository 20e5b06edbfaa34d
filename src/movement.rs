//! Player movement and door interaction.

use tracing::trace;

use crate::{
    level::Level,
    types::{Direction, Input},
};

/// What an input did to the level.
///
/// None of these is a failure: bumping into a wall or pressing the action key with no door
/// nearby simply leaves the level as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player moved onto a new cell.
    Moved,
    /// The destination was off the grid or not walkable.
    Blocked,
    /// The action input toggled this many doors around the player.
    DoorsToggled(usize),
    /// The input is not a movement or action input.
    Ignored,
}

/// Applies a movement or action input to the level.
///
/// Directional inputs move the player one cell when the destination is walkable. The action
/// input toggles every door among the four orthogonal neighbours of the player. Anything else is
/// left for the caller.
pub fn apply_input(level: &mut Level, input: Input) -> Outcome {
    let outcome = match input.direction() {
        Some(direction) => move_player(level, direction),
        None if input == Input::Action => toggle_adjacent_doors(level),
        None => Outcome::Ignored,
    };
    trace!(?input, ?outcome, player = %level.player(), "input applied");

    outcome
}

/// Moves the player one cell if the destination allows it.
fn move_player(level: &mut Level, direction: Direction) -> Outcome {
    match level.player.step(direction) {
        Some(destination) if level.is_walkable(destination) => {
            level.player = destination;
            Outcome::Moved
        }
        _ => Outcome::Blocked,
    }
}

/// Toggles every door orthogonally adjacent to the player.
fn toggle_adjacent_doors(level: &mut Level) -> Outcome {
    let player = level.player;
    let mut toggled = 0;

    for neighbor in Direction::NEIGHBOR_ORDER
        .into_iter()
        .filter_map(|direction| player.step(direction))
    {
        if let Some(tile) = level.tile_at(neighbor).filter(|tile| tile.is_door()) {
            if level.set_tile(neighbor, tile.toggle_door()) {
                toggled += 1;
            }
        }
    }

    Outcome::DoorsToggled(toggled)
}
