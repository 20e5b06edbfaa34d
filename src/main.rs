//! This crate contains the source code for the binary for the game tilecrawl.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use tilecrawl::{init_logging, Cli, Game, TerminalUi};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    let _log_guard = init_logging(cli.log_file.as_deref())?;
    let level = cli.load_level()?;

    let mut game = Game::new(level, cli.settings());
    let mut ui = TerminalUi::new(ratatui::init(), cli.poll_timeout());
    let result = game.run(&mut ui);
    ratatui::restore();

    result
}
