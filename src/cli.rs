//! Command-line arguments of the game binary.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Command-line configuration.
///
/// This structure holds everything the binary can be configured with. The game itself has no
/// settings; the arguments only pick the front-end and how diagnostics are logged.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Play in a full-screen terminal interface instead of the line-based prompt.
    #[arg(long)]
    pub tui: bool,
    /// Most verbose level of diagnostic events that gets logged.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::WARN)]
    pub log_level: Level,
    /// Write diagnostic events to this file instead of standard error.
    ///
    /// Without it, nothing is logged while the terminal interface is running.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
