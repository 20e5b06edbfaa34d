//! The game loop and the capability interface it drives.

use std::{thread, time::Duration};

use color_eyre::eyre::{Report, Result};
use tracing::{debug, info};

use crate::{
    level::Level,
    movement,
    pathfinding::{self, Step, StepObserver},
    types::{Input, Position},
};

/// Everything the game loop needs from a user interface.
///
/// An implementation owns whatever rendering and input context it needs; the loop only ever
/// hands it the level to draw and asks it for the next command.
pub trait GameUi {
    /// Draws the level, including its search overlay.
    ///
    /// # Errors
    ///
    /// Whatever the drawing surface reports.
    fn render(&mut self, level: &Level) -> Result<()>;

    /// Returns the next command, or [`Input::None`] if nothing happened since the last poll.
    ///
    /// # Errors
    ///
    /// Whatever the input source reports.
    fn poll_input(&mut self) -> Result<Input>;
}

/// What the search command does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Flood fill everything reachable from the player.
    #[default]
    FloodFill,
    /// Find the shortest path from the player to this cell.
    PathTo(Position),
}

/// Tunables for the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Behaviour of the search command.
    pub search: SearchMode,
    /// Pause after each cell the flood fill discovers.
    pub flood_delay: Duration,
    /// Pause after each cell of a found path.
    pub path_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchMode::FloodFill,
            flood_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(100),
        }
    }
}

/// Game state container.
///
/// Owns the level for the whole run and dispatches each polled input to the movement rules or
/// the configured search.
#[derive(Debug)]
pub struct Game {
    /// Game exit flag.
    ///
    /// Starts off `false` and is set once a quit command has been polled.
    pub(crate) exit: bool,
    /// The level being played.
    pub(crate) level: Level,
    /// Loop tunables.
    pub(crate) settings: Settings,
}

impl Game {
    /// Creates a game over a loaded level.
    #[must_use]
    pub const fn new(level: Level, settings: Settings) -> Self {
        Self {
            exit: false,
            level,
            settings,
        }
    }

    /// The level in its current state.
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// Runs the render, poll and dispatch loop until a quit command is polled.
    ///
    /// A search runs to completion once started; quitting is only noticed between ticks.
    ///
    /// # Errors
    ///
    /// Any error the UI reports while rendering or polling.
    pub fn run<U>(&mut self, ui: &mut U) -> Result<()>
    where
        U: GameUi + ?Sized,
    {
        info!(player = %self.level.player(), search = ?self.settings.search, "game started");

        while !self.exit {
            ui.render(&self.level)?;
            let input = ui.poll_input()?;
            self.dispatch(ui, input)?;
        }

        info!("game finished");
        Ok(())
    }

    /// Routes a single input to the component that handles it.
    fn dispatch<U>(&mut self, ui: &mut U, input: Input) -> Result<()>
    where
        U: GameUi + ?Sized,
    {
        match input {
            Input::Quit => self.exit = true,
            Input::Search => self.search(ui)?,
            Input::Up | Input::Down | Input::Left | Input::Right | Input::Action => {
                let outcome = movement::apply_input(&mut self.level, input);
                debug!(?input, ?outcome, "input dispatched");
            }
            Input::None => {}
        }

        Ok(())
    }

    /// Runs the configured search from the player's cell, animating it through the UI.
    fn search<U>(&mut self, ui: &mut U) -> Result<()>
    where
        U: GameUi + ?Sized,
    {
        let start = self.level.player();
        match self.settings.search {
            SearchMode::FloodFill => {
                let mut animation = Animation::new(ui, self.settings.flood_delay);
                let visited = pathfinding::flood_fill(&mut self.level, start, &mut animation);
                info!(%start, reachable = visited.len(), "flood fill");
                animation.finish()
            }
            SearchMode::PathTo(goal) => {
                let mut animation = Animation::new(ui, self.settings.path_delay);
                let path = pathfinding::find_path(&mut self.level, start, goal, &mut animation);
                if path.is_empty() {
                    info!(%start, %goal, "goal unreachable");
                } else {
                    info!(%start, %goal, steps = path.len() - 1, "path found");
                }
                animation.finish()
            }
        }
    }
}

/// Step observer that redraws the level and pauses after every search step.
///
/// The first render failure stops further drawing; the search itself carries on and the error is
/// handed back by [`Animation::finish`].
struct Animation<'ui, U: ?Sized> {
    /// Surface the steps are drawn on.
    ui: &'ui mut U,
    /// Pause after each drawn step.
    delay: Duration,
    /// First render failure, if any.
    error: Option<Report>,
}

impl<'ui, U> Animation<'ui, U>
where
    U: GameUi + ?Sized,
{
    /// Creates an animation over `ui` with the given per-step pause.
    fn new(ui: &'ui mut U, delay: Duration) -> Self {
        Self {
            ui,
            delay,
            error: None,
        }
    }

    /// Ends the animation, surfacing any render failure.
    fn finish(self) -> Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<U> StepObserver for Animation<'_, U>
where
    U: GameUi + ?Sized,
{
    fn on_step(&mut self, level: &Level, _step: Step) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.ui.render(level) {
            self.error = Some(err);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use color_eyre::eyre::eyre;

    use super::*;
    use crate::{file_loader::parse_level, tile::Tile};

    /// Input source replaying a fixed script, then quitting.
    #[derive(Default)]
    struct ScriptedUi {
        /// Inputs still to be returned.
        inputs: VecDeque<Input>,
        /// Player position at every render.
        frames: Vec<Position>,
        /// Overlay size at every render.
        overlays: Vec<usize>,
        /// Render call after which rendering fails, if any.
        fail_after: Option<usize>,
    }

    impl ScriptedUi {
        fn new(inputs: &[Input]) -> Self {
            Self {
                inputs: inputs.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl GameUi for ScriptedUi {
        fn render(&mut self, level: &Level) -> Result<()> {
            if self.fail_after.is_some_and(|limit| self.frames.len() >= limit) {
                return Err(eyre!("surface lost"));
            }
            self.frames.push(level.player());
            self.overlays.push(level.overlay().len());
            Ok(())
        }

        fn poll_input(&mut self) -> Result<Input> {
            Ok(self.inputs.pop_front().unwrap_or(Input::Quit))
        }
    }

    fn headless(search: SearchMode) -> Settings {
        Settings {
            search,
            flood_delay: Duration::ZERO,
            path_delay: Duration::ZERO,
        }
    }

    fn game(text: &str, search: SearchMode) -> Game {
        let level = parse_level(text).expect("test level should load");
        Game::new(level, headless(search))
    }

    #[test]
    fn test_quit_ends_loop_after_one_render() {
        let mut game = game("P.", SearchMode::FloodFill);
        let mut ui = ScriptedUi::new(&[Input::Quit, Input::Right]);

        game.run(&mut ui).expect("loop should finish cleanly");

        assert_eq!(ui.frames.len(), 1);
        assert_eq!(ui.inputs.len(), 1, "nothing is polled after quitting");
        assert_eq!(game.level().player(), Position::new(0, 0));
    }

    #[test]
    fn test_movement_is_dispatched_and_rendered() {
        let mut game = game("####\n#.P#\n####", SearchMode::FloodFill);
        let mut ui = ScriptedUi::new(&[Input::Left, Input::Up, Input::None, Input::Right]);

        game.run(&mut ui).expect("loop should finish cleanly");

        assert_eq!(
            ui.frames,
            vec![
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(1, 1),
                Position::new(1, 1),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_action_is_dispatched() {
        let mut game = game("P.X.", SearchMode::FloodFill);
        let mut ui = ScriptedUi::new(&[Input::Right, Input::Action]);

        game.run(&mut ui).expect("loop should finish cleanly");

        assert_eq!(
            game.level().tile_at(Position::new(2, 0)),
            Some(Tile::OpenDoor)
        );
    }

    #[test]
    fn test_flood_fill_search_animates_each_discovery() {
        let mut game = game("P..\n.#.", SearchMode::FloodFill);
        let mut ui = ScriptedUi::new(&[Input::Search]);

        game.run(&mut ui).expect("loop should finish cleanly");

        // One frame per tick plus one per discovered cell.
        assert_eq!(ui.frames.len(), 2 + 4);
        assert_eq!(ui.overlays, vec![0, 2, 3, 4, 5, 5]);
        assert_eq!(game.level().overlay().len(), 5);
    }

    #[test]
    fn test_path_search_animates_each_path_cell() {
        let mut game = game("P..\n...\n...", SearchMode::PathTo(Position::new(2, 2)));
        let mut ui = ScriptedUi::new(&[Input::Search]);

        game.run(&mut ui).expect("loop should finish cleanly");

        assert_eq!(ui.overlays, vec![0, 1, 2, 3, 4, 5, 5]);
        assert_eq!(
            game.level().player(),
            Position::new(0, 0),
            "searching does not move the player"
        );
    }

    #[test]
    fn test_unreachable_goal_is_not_an_error() {
        let mut game = game("P.#.", SearchMode::PathTo(Position::new(3, 0)));
        let mut ui = ScriptedUi::new(&[Input::Search, Input::Right]);

        game.run(&mut ui).expect("an unreachable goal is a normal outcome");

        assert!(game.level().overlay().is_empty());
        assert_eq!(game.level().player(), Position::new(1, 0));
    }

    #[test]
    fn test_render_failure_during_search_is_reported() {
        let mut game = game("P....", SearchMode::FloodFill);
        let mut ui = ScriptedUi {
            fail_after: Some(2),
            ..ScriptedUi::new(&[Input::Search])
        };

        let result = game.run(&mut ui);

        assert!(result.is_err(), "the render failure must reach the caller");
        assert_eq!(ui.frames.len(), 2);
        assert_eq!(
            game.level().overlay().len(),
            5,
            "the search still runs to completion"
        );
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.search, SearchMode::FloodFill);
        assert_eq!(settings.flood_delay, Duration::from_millis(10));
        assert_eq!(settings.path_delay, Duration::from_millis(100));
    }
}
