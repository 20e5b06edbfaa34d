//! Viewport scrolling for levels larger than the terminal.

use crate::types::Position;

/// How far the player may stray from the view centre, per axis, before the view scrolls.
pub(crate) const FOLLOW_LIMIT: usize = 5;

/// Keeps the viewport centred near the player.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Camera {
    /// Level cell shown at the middle of the viewport, once the first frame has been drawn.
    center: Option<Position>,
}

impl Camera {
    /// Moves the view centre just enough to keep `player` within [`FOLLOW_LIMIT`] of it.
    ///
    /// The first call centres the view on the player. Returns the new centre.
    pub(crate) fn follow(&mut self, player: Position) -> Position {
        let center = self.center.map_or(player, |center| {
            Position::new(
                clamp_axis(center.x, player.x),
                clamp_axis(center.y, player.y),
            )
        });
        self.center = Some(center);

        center
    }

    /// Level cell drawn at the top-left corner of a `width` by `height` viewport.
    pub(crate) fn origin(center: Position, width: u16, height: u16) -> Position {
        Position::new(
            center.x.saturating_sub(half(width)),
            center.y.saturating_sub(half(height)),
        )
    }
}

/// Clamps one centre coordinate into the follow window around the player.
fn clamp_axis(center: usize, player: usize) -> usize {
    center.clamp(
        player.saturating_sub(FOLLOW_LIMIT),
        player.saturating_add(FOLLOW_LIMIT),
    )
}

/// Index of the middle cell of a viewport extent.
fn half(extent: u16) -> usize {
    usize::try_from(rounded_div::i32(i32::from(extent) - 1, 2)).unwrap_or_default()
}
