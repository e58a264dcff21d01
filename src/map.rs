//! Grid data and fixed layout module.
//!
//! This module contains the `Grid` struct holding the cells of the playing field, together with the
//! hardcoded placements of the player, the walls and the treasures.

use crate::types::{Cell, Position};

/// Side length of the square grid.
pub const GRID_SIZE: usize = 10;

/// Starting position of the player.
pub(crate) const PLAYER_START: Position = Position::fixed(0, 0);

/// Wall placements, a horizontal run on row 3.
pub(crate) const WALLS: [Position; 3] = [
    Position::fixed(3, 3),
    Position::fixed(4, 3),
    Position::fixed(5, 3),
];

/// Treasure placements.
pub(crate) const TREASURES: [Position; 2] = [Position::fixed(2, 2), Position::fixed(5, 5)];

/// Playing field container.
///
/// This structure holds the square matrix of cells the game is played on. Rows are stored in order
/// of their vertical coordinate, so iterating the rows and then each row's cells walks the grid in
/// reading order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cells of the grid, indexed by row and then by column.
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Builds the fixed layout with its walls and treasures.
    ///
    /// The player marker is not written here; the caller places it along with the position it
    /// tracks.
    pub(crate) fn new() -> Self {
        let mut grid = Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        };

        for wall in WALLS {
            grid.set(wall, Cell::Wall);
        }
        for treasure in TREASURES {
            grid.set(treasure, Cell::Treasure);
        }

        grid
    }

    /// Returns the content of the cell at `position`.
    #[expect(
        clippy::indexing_slicing,
        reason = "Positions can only be built inside the grid; there is no risk of bad indexing."
    )]
    pub const fn cell(&self, position: Position) -> Cell {
        self.cells[position.y][position.x]
    }

    /// Overwrites the cell at `position`.
    #[expect(
        clippy::indexing_slicing,
        reason = "Positions can only be built inside the grid; there is no risk of bad indexing."
    )]
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.y][position.x] = cell;
    }

    /// Returns an iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Returns the positions of every cell holding `cell`, in reading order.
    #[cfg(test)]
    pub(crate) fn positions_of(&self, cell: Cell) -> Vec<Position> {
        let mut positions = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, content) in row.iter().enumerate() {
                if *content == cell {
                    positions.push(Position { x, y });
                }
            }
        }

        positions
    }

    /// Returns how many cells hold `cell`.
    #[cfg(test)]
    pub(crate) fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|content| **content == cell)
            .count()
    }
}
