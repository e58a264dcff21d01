//! Diagnostic logging setup.

use std::{fs::File, io, sync::Mutex};

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing::debug;

use crate::cli::Cli;

/// Installs the global subscriber for diagnostic events.
///
/// Events go to the log file when one is given. Otherwise the line-based front-end logs to standard
/// error, which keeps standard output free for the game, while the terminal interface logs nothing
/// since standard error would draw over its screen.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber has already been installed
pub fn init(cli: &Cli) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false);

    let installed = match (&cli.log_file, cli.tui) {
        (Some(path), _) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, false) => builder.with_writer(io::stderr).try_init(),
        (None, true) => return Ok(()),
    };
    installed.map_err(|err| eyre!("failed to install the log subscriber: {err}"))?;

    debug!(level = %cli.log_level, "logging initialized");

    Ok(())
}
