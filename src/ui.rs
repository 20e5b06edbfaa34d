//! Terminal rendering of the level.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};

use crate::{
    app::GameUi,
    camera::Camera,
    events,
    level::Level,
    tile::Tile,
    types::{Input, Position},
};

/// Key help shown under the map.
const KEY_HELP: &str = "(arrows/hjkl) move / (e) doors / (s) search / (q) quit";

/// [`GameUi`] implementation drawing into a ratatui terminal and reading keys through crossterm.
///
/// The terminal and the camera live here, so nothing about rendering is global.
pub struct TerminalUi<B: Backend> {
    /// Terminal being drawn to.
    terminal: Terminal<B>,
    /// Viewport scroll state.
    camera: Camera,
    /// How long a poll waits for a key.
    poll_timeout: Duration,
}

impl<B: Backend> TerminalUi<B> {
    /// Wraps an initialised terminal.
    #[must_use]
    pub fn new(terminal: Terminal<B>, poll_timeout: Duration) -> Self {
        Self {
            terminal,
            camera: Camera::default(),
            poll_timeout,
        }
    }
}

impl<B: Backend> GameUi for TerminalUi<B> {
    fn render(&mut self, level: &Level) -> Result<()> {
        let center = self.camera.follow(level.player());
        let _ = self.terminal.draw(|frame| draw(frame, level, center))?;

        Ok(())
    }

    fn poll_input(&mut self) -> Result<Input> {
        events::poll_input(self.poll_timeout)
    }
}

/// Draws the visible part of the level and the key help footer.
///
/// The map viewport is centred on `center`; cells outside the level are left blank.
pub(crate) fn draw(frame: &mut Frame<'_>, level: &Level, center: Position) {
    let [map_area, help_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(frame.area());

    let origin = Camera::origin(center, map_area.width, map_area.height);
    let lines: Vec<Line<'static>> = (0..map_area.height)
        .map(|row| {
            let y = origin.y + usize::from(row);
            Line::from(
                (0..map_area.width)
                    .map(|column| cell(level, Position::new(origin.x + usize::from(column), y)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), map_area);

    let help = Block::bordered()
        .title(KEY_HELP)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(help, help_area);
}

/// Styled glyph for one level cell.
fn cell(level: &Level, position: Position) -> Span<'static> {
    let Some(tile) = level.tile_at(position) else {
        return Span::raw(" ");
    };

    let mut style = Style::default();
    if level.overlay().contains(&position) {
        style = style.bg(Color::Red);
    }

    if position == level.player() {
        return Span::styled(
            "@",
            style.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
    }

    let (glyph, color) = glyph(tile);
    Span::styled(glyph, style.fg(color))
}

/// Character and colour a tile is drawn with.
const fn glyph(tile: Tile) -> (&'static str, Color) {
    match tile {
        Tile::Cliff => ("#", Color::Green),
        Tile::Ground => (".", Color::DarkGray),
        Tile::ClosedDoor => ("+", Color::Yellow),
        Tile::OpenDoor => ("'", Color::Yellow),
        Tile::Placeholder => ("t", Color::Magenta),
        Tile::Blank | Tile::Pending => (" ", Color::Reset),
    }
}
