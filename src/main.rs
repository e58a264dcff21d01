//! This crate contains the source code for the binary for the game treasuregrid.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use treasuregrid::{init_logging, App, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut app = App::new();
    if cli.tui {
        let mut terminal = ratatui::init();
        let result = app.run_tui(&mut terminal);
        ratatui::restore();
        result?;
    } else {
        app.run(io::stdin().lock(), io::stdout().lock())?;
    }

    Ok(())
}
