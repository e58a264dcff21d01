//! Event handling functions for player input and game state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;

use crate::{
    types::{Command, Notice},
    App,
};

/// Handles terminal input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches character keys through the same command
/// mapping the line-based front-end uses. It uses a timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let KeyCode::Char(character) = key.code {
                    dispatch(app, Command::from_key(character));
                }
            }
        }
    }

    Ok(())
}

/// Handles one line read by the line-based front-end.
pub(crate) fn handle_line(app: &mut App, line: &str) {
    dispatch(app, Command::parse(line));
}

/// Applies a command to the game and records its outcome.
///
/// This function stores the notice produced by the command, or clears the previous one when the
/// command had nothing to report. Input that did not map to a command leaves the game untouched
/// and reports [`Notice::UnknownCommand`].
pub(crate) fn dispatch(app: &mut App, command: Option<Command>) {
    debug!(?command, "dispatching command");

    app.notice = match command {
        Some(Command::Move(direction)) => app.game.move_player(direction),
        Some(Command::Interact) => Some(app.game.interact()),
        Some(Command::Quit) => {
            app.exit = true;
            None
        }
        None => Some(Notice::UnknownCommand),
    };
}
