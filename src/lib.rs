//! A turn-based treasure hunt played on a small fixed grid.
//!
//! The player token moves one cell at a time, walls block its way and treasures next to it can be
//! collected for score. The [`Game`] holds the rules, while [`App`] drives it either from a
//! line-based prompt or from a full-screen terminal interface.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod game;
mod logging;
mod map;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use game::Game;
pub use logging::init as init_logging;
pub use map::{Grid, GRID_SIZE};
pub use types::{Cell, Direction, Notice, Position};
