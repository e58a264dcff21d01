//! Type definitions and enums for the game state and command dispatch.

use std::fmt;

use crate::map::GRID_SIZE;

/// Content of a single grid cell.
///
/// This enumeration holds the category of whatever occupies a cell of the grid. A cell holds no
/// other state than its variant, and the printable symbol of each variant is only ever produced by
/// [`Cell::symbol`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Free cell the player can walk onto.
    #[default]
    Empty,
    /// Cell currently holding the player token.
    Player,
    /// Impassable cell.
    Wall,
    /// Collectible cell, worth one point when collected through an interaction.
    Treasure,
}

impl Cell {
    /// Returns the printable symbol of the cell.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Player => 'P',
            Self::Wall => '#',
            Self::Treasure => 'T',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Coordinates of a cell inside the grid.
///
/// The horizontal coordinate grows to the right and the vertical one grows downwards. A value of
/// this type always lies within the grid, since the only public constructors check the bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column of the cell.
    pub(crate) x: usize,
    /// Row of the cell.
    pub(crate) y: usize,
}

impl Position {
    /// Builds a position, returning [`None`] when either coordinate falls outside the grid.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Self { x, y })
    }

    /// Builds a position known in advance to be inside the grid.
    ///
    /// This is meant for the fixed layout constants, where the bounds check runs at compile time.
    pub(crate) const fn fixed(x: usize, y: usize) -> Self {
        assert!(x < GRID_SIZE && y < GRID_SIZE, "fixed position outside the grid");
        Self { x, y }
    }

    /// Returns the neighboring position one step towards `direction`.
    ///
    /// The result is [`None`] when the step would leave the grid on either axis.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Self::new(self.x.checked_add_signed(dx)?, self.y.checked_add_signed(dy)?)
    }
}

/// One of the four orthogonal directions the player can move towards or look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction, in the order neighbors are inspected when interacting.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` offset of a single step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Informational outcome of a command.
///
/// This enumeration holds the messages shown to the player after a command that was rejected, had
/// nothing to act on or collected a treasure. None of them is an error: the game state is always
/// left consistent and play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The move would have left the grid.
    OutOfBounds,
    /// The move targeted a wall.
    BlockedByWall,
    /// An adjacent treasure was collected.
    TreasureFound,
    /// No adjacent cell holds a treasure.
    NothingToInteract,
    /// The input did not map to any command.
    UnknownCommand,
}

impl Notice {
    /// Returns the text shown to the player for this notice.
    pub const fn message(self) -> &'static str {
        match self {
            Self::OutOfBounds => "You can't move outside the map!",
            Self::BlockedByWall => "There's a wall! You can't move there.",
            Self::TreasureFound => "You found a treasure!",
            Self::NothingToInteract => "There's nothing to interact with.",
            Self::UnknownCommand => "Unknown command.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Player command recognized by both front-ends.
///
/// This enumeration holds the actions a single key or a single input line can request. Input that
/// does not map to any variant is reported through [`Notice::UnknownCommand`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Move the player one cell towards the given direction.
    Move(Direction),
    /// Collect a treasure from an adjacent cell.
    Interact,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Maps a single key to its command.
    pub(crate) const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Move(Direction::Up)),
            's' => Some(Self::Move(Direction::Down)),
            'a' => Some(Self::Move(Direction::Left)),
            'd' => Some(Self::Move(Direction::Right)),
            'e' => Some(Self::Interact),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }

    /// Maps a line of input to its command.
    ///
    /// Surrounding whitespace is ignored, but the remaining text must be exactly one command key.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let mut chars = line.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::from_key(key),
            _ => None,
        }
    }
}
