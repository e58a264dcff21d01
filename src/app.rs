//! Core application state and the two game loops.

use std::io::{self, BufRead, Write};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::{events, game::Game, types::Notice, ui};

/// Prompt printed before every line read by the line-based front-end.
pub(crate) const PROMPT: &str = "Enter command (w/a/s/d to move, e to interact, q to quit): ";

/// Message printed when the line-based front-end ends.
pub(crate) const FAREWELL: &str = "Goodbye!";

/// Application state container for the treasure hunt.
///
/// This structure holds the game being played together with the little state either front-end
/// needs around it: whether the player asked to leave and the outcome of the last command.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the player quits or the input runs out, and starts off
    /// `false`.
    pub(crate) exit: bool,
    /// Game being played.
    pub(crate) game: Game,
    /// Notice produced by the last command, if it had anything to report.
    pub(crate) notice: Option<Notice>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new instance of the App structure holding a fresh game.
    pub fn new() -> Self {
        Self {
            exit: false,
            game: Game::new(),
            notice: None,
        }
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the line-based game loop.
    ///
    /// Before every command the snapshot of the game and the prompt are written to `output`. Each
    /// line read from `input` is dispatched as one command and its notice, if any, is written on a
    /// line of its own. Lines that are not valid UTF-8 are decoded lossily, so they come out as
    /// unknown commands. The loop ends on the quit command or when `input` runs out, after which a
    /// farewell is written.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`] when reading `input` or writing `output` fails
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        info!("line session started");
        let mut line = Vec::new();

        while !self.exit {
            writeln!(output, "{}", self.game.render())?;
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                debug!("input closed, quitting");
                writeln!(output)?;
                self.exit = true;
            } else {
                events::handle_line(self, &String::from_utf8_lossy(&line));
            }

            if let Some(notice) = self.notice.take() {
                writeln!(output, "{notice}")?;
            }
        }

        writeln!(output, "{FAREWELL}")?;
        output.flush()?;
        info!(score = self.game.score(), "line session ended");

        Ok(())
    }

    /// Runs the terminal interface game loop.
    ///
    /// This function redraws the screen and handles key presses until the player quits, after which
    /// it returns to the call site so the terminal can be restored.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run_tui(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("terminal session started");

        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        info!(score = self.game.score(), "terminal session ended");

        Ok(())
    }
}
