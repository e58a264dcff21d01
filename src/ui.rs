//! User interface rendering functions for the terminal front-end.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use crate::{map::GRID_SIZE, types::Cell, App};

/// Width of the bordered board, wide enough for the longest notice and the key help.
pub(crate) const BOARD_WIDTH: u16 = 44;

/// Height of the bordered board: the grid rows, a spacer, the score, the notice and two borders.
pub(crate) const BOARD_HEIGHT: u16 = 15;

/// Updates the terminal UI based on the state of the game.
///
/// This function renders the grid centered on screen inside a bordered block, followed by the
/// score and the notice left by the last command.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let board = centered_area(frame.area(), BOARD_WIDTH, BOARD_HEIGHT)?;
    let block = Block::bordered()
        .title("Treasure Hunt")
        .title_bottom("(w/a/s/d) move / (e) interact / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(board);

    frame.render_widget(block, board);

    let mut lines: Vec<Line> = app.game.grid().rows().map(grid_line).collect();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("Score: {}", app.game.score())));
    if let Some(notice) = app.notice {
        lines.push(Line::styled(notice.message(), Style::default().fg(Color::White)));
    }

    let content = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(content, inner_space);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Computes a `width` by `height` area centered inside `area`.
///
/// The requested size is clamped to the available space, so a small terminal still gets a board,
/// just a clipped one.
///
/// # Errors
///
/// This function may return errors if an offset cannot be converted back into terminal cells.
pub(crate) fn centered_area(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let left = rounded_div::i32(i32::from(area.width - width), 2);
    let top = rounded_div::i32(i32::from(area.height - height), 2);

    Ok(Rect::new(
        area.x.saturating_add(u16::try_from(left)?),
        area.y.saturating_add(u16::try_from(top)?),
        width,
        height,
    ))
}

/// Builds the styled line for one row of the grid.
fn grid_line(row: &[Cell; GRID_SIZE]) -> Line<'static> {
    let mut spans = Vec::with_capacity(GRID_SIZE * 2);
    for (idx, cell) in row.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(cell.to_string(), cell_style(*cell)));
    }

    Line::from(spans)
}

/// Returns the style a cell is drawn with.
fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Player => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Cell::Wall => Style::default().fg(Color::Green),
        Cell::Treasure => Style::default().fg(Color::Yellow),
    }
}
