//! Keyboard polling and its mapping to game commands.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::types::Input;

/// Waits up to `timeout` for a key press and translates it.
///
/// Returns [`Input::None`] when the timeout expires, for key releases and repeats, and for any
/// event that is not a key.
///
/// # Errors
///
/// - [`std::io::Error`]
pub(crate) fn poll_input(timeout: Duration) -> Result<Input> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(input_from_key(key.code));
            }
        }
    }

    Ok(Input::None)
}

/// Maps a key to its command. Arrows and `h`/`j`/`k`/`l` move, `e` acts, `s` searches, `q` and
/// escape quit.
pub(crate) const fn input_from_key(code: KeyCode) -> Input {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Input::Up,
        KeyCode::Down | KeyCode::Char('j') => Input::Down,
        KeyCode::Left | KeyCode::Char('h') => Input::Left,
        KeyCode::Right | KeyCode::Char('l') => Input::Right,
        KeyCode::Char('e') => Input::Action,
        KeyCode::Char('s') => Input::Search,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => Input::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_vim_keys_move() {
        assert_eq!(input_from_key(KeyCode::Up), Input::Up);
        assert_eq!(input_from_key(KeyCode::Char('k')), Input::Up);
        assert_eq!(input_from_key(KeyCode::Down), Input::Down);
        assert_eq!(input_from_key(KeyCode::Char('j')), Input::Down);
        assert_eq!(input_from_key(KeyCode::Left), Input::Left);
        assert_eq!(input_from_key(KeyCode::Char('h')), Input::Left);
        assert_eq!(input_from_key(KeyCode::Right), Input::Right);
        assert_eq!(input_from_key(KeyCode::Char('l')), Input::Right);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(input_from_key(KeyCode::Char('e')), Input::Action);
        assert_eq!(input_from_key(KeyCode::Char('s')), Input::Search);
        assert_eq!(input_from_key(KeyCode::Char('q')), Input::Quit);
        assert_eq!(input_from_key(KeyCode::Esc), Input::Quit);
    }

    #[test]
    fn test_unbound_keys_are_no_input() {
        assert_eq!(input_from_key(KeyCode::Char('x')), Input::None);
        assert_eq!(input_from_key(KeyCode::Enter), Input::None);
        assert_eq!(input_from_key(KeyCode::Char('E')), Input::None);
    }
}
