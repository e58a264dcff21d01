//! Game engine module.
//!
//! This module contains the `Game` struct, which owns the grid, the player position and the score,
//! and implements the movement and interaction rules played on top of them.

use std::fmt;

use tracing::debug;

use crate::{
    map::{Grid, PLAYER_START},
    types::{Cell, Direction, Notice, Position},
};

/// Complete state of a running game.
///
/// This structure aggregates the grid, the tracked player position and the score. The player
/// marker in the grid always sits at the tracked position, and it is the only player marker in the
/// grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    /// Playing field, including the player marker.
    grid: Grid,
    /// Current position of the player.
    player: Position,
    /// Number of treasures collected so far.
    score: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the fixed starting layout.
    ///
    /// The player starts in the top-left corner with a score of zero, a run of three walls sits on
    /// row 3 and two treasures are waiting to be collected.
    pub fn new() -> Self {
        let mut grid = Grid::new();
        grid.set(PLAYER_START, Cell::Player);

        Self {
            grid,
            player: PLAYER_START,
            score: 0,
        }
    }

    /// Returns the playing field.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current position of the player.
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Returns the number of treasures collected so far.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the textual snapshot of the game.
    ///
    /// The snapshot starts with a `Map:` header, lists the grid one row per line with every symbol
    /// followed by a space, and ends with the score line. Rendering never changes the game.
    pub(crate) fn render(&self) -> String {
        self.to_string()
    }

    /// Moves the player one cell towards `direction`.
    ///
    /// Moves that would leave the grid or run into a wall are rejected with a [`Notice`] and leave
    /// the game untouched. An accepted move returns [`None`]. The player marker overwrites whatever
    /// the target cell held, so walking onto a treasure destroys it without scoring.
    pub fn move_player(&mut self, direction: Direction) -> Option<Notice> {
        let Some(target) = self.player.step(direction) else {
            debug!(?direction, from = ?self.player, "move rejected, outside the grid");
            return Some(Notice::OutOfBounds);
        };

        match self.grid.cell(target) {
            Cell::Wall => {
                debug!(?direction, from = ?self.player, "move rejected, wall");
                Some(Notice::BlockedByWall)
            }
            previous => {
                if previous == Cell::Treasure {
                    debug!(at = ?target, "treasure trampled");
                }
                self.grid.set(self.player, Cell::Empty);
                self.player = target;
                self.grid.set(self.player, Cell::Player);
                debug!(?direction, to = ?self.player, "player moved");
                None
            }
        }
    }

    /// Collects a treasure from a cell next to the player.
    ///
    /// Neighbors are inspected in the order given by [`Direction::ALL`] and only the first one
    /// holding a treasure is collected, so a single call scores at most one point.
    pub fn interact(&mut self) -> Notice {
        let found = Direction::ALL
            .into_iter()
            .filter_map(|direction| self.player.step(direction))
            .find(|neighbor| self.grid.cell(*neighbor) == Cell::Treasure);

        let Some(treasure) = found else {
            debug!(at = ?self.player, "nothing to interact with");
            return Notice::NothingToInteract;
        };

        self.grid.set(treasure, Cell::Empty);
        self.score += 1;
        debug!(at = ?treasure, score = self.score, "treasure collected");

        Notice::TreasureFound
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map:")?;
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }

        write!(f, "Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{GRID_SIZE, TREASURES, WALLS};

    /// Builds a position for the tests.
    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y).expect("test position should be inside the grid")
    }

    /// Creates a fresh game with the player relocated to `position`.
    fn game_at(position: Position) -> Game {
        let mut game = Game::new();
        game.grid.set(game.player, Cell::Empty);
        game.grid.set(position, Cell::Player);
        game.player = position;
        game
    }

    /// Applies a sequence of moves, asserting each one is accepted.
    fn walk(game: &mut Game, directions: &[Direction]) {
        for direction in directions {
            assert_eq!(
                game.move_player(*direction),
                None,
                "move {direction:?} should be accepted"
            );
        }
    }

    /// Checks that the grid holds exactly one player marker, at the tracked position.
    fn assert_player_consistent(game: &Game) {
        assert_eq!(game.grid.positions_of(Cell::Player), vec![game.player]);
    }

    #[test]
    fn test_game_new_layout() {
        let game = Game::new();

        assert_eq!(game.player(), pos(0, 0));
        assert_eq!(game.score(), 0);
        assert_player_consistent(&game);
        assert_eq!(game.grid().positions_of(Cell::Wall), WALLS.to_vec());
        assert_eq!(game.grid().positions_of(Cell::Treasure), TREASURES.to_vec());
        assert_eq!(game.grid().count(Cell::Wall), 3);
        assert_eq!(game.grid().count(Cell::Treasure), 2);
        assert_eq!(game, Game::default());
    }

    #[test]
    fn test_render_initial_snapshot() {
        let game = Game::new();

        let rows = [
            "P . . . . . . . . .",
            ". . . . . . . . . .",
            ". . T . . . . . . .",
            ". . . # # # . . . .",
            ". . . . . . . . . .",
            ". . . . . T . . . .",
            ". . . . . . . . . .",
            ". . . . . . . . . .",
            ". . . . . . . . . .",
            ". . . . . . . . . .",
        ];
        let mut expected = String::from("Map:\n");
        for row in rows {
            expected.push_str(row);
            expected.push_str(" \n");
        }
        expected.push_str("Score: 0");

        assert_eq!(game.render(), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut game = Game::new();
        walk(&mut game, &[Direction::Right, Direction::Down]);

        let first = game.render();
        let second = game.render();

        assert_eq!(first, second);
        assert!(first.contains("\n. P . . . . . . . . \n"));
    }

    #[test]
    fn test_move_up_from_origin_is_rejected() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(game.move_player(Direction::Up), Some(Notice::OutOfBounds));
        assert_eq!(game.move_player(Direction::Left), Some(Notice::OutOfBounds));
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let mut game = Game::new();
        walk(
            &mut game,
            &[
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
            ],
        );
        assert_eq!(game.player(), pos(3, 2));
        let before = game.clone();

        assert_eq!(
            game.move_player(Direction::Down),
            Some(Notice::BlockedByWall)
        );
        assert_eq!(game, before);
        assert_eq!(game.player(), pos(3, 2));
    }

    #[test]
    fn test_move_clears_previous_cell() {
        let mut game = Game::new();

        assert_eq!(game.move_player(Direction::Right), None);
        assert_eq!(game.player(), pos(1, 0));
        assert_eq!(game.grid().cell(pos(0, 0)), Cell::Empty);
        assert_eq!(game.grid().cell(pos(1, 0)), Cell::Player);
        assert_player_consistent(&game);
    }

    #[test]
    fn test_move_every_position_and_direction() {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let start = pos(x, y);
                if WALLS.contains(&start) {
                    continue;
                }

                for direction in Direction::ALL {
                    let mut game = game_at(start);
                    let before = game.clone();
                    let (dx, dy) = direction.delta();
                    let target = x
                        .checked_add_signed(dx)
                        .zip(y.checked_add_signed(dy))
                        .and_then(|(column, row)| Position::new(column, row));

                    let notice = game.move_player(direction);

                    match target {
                        None => {
                            assert_eq!(notice, Some(Notice::OutOfBounds));
                            assert_eq!(game, before);
                        }
                        Some(target) if WALLS.contains(&target) => {
                            assert_eq!(notice, Some(Notice::BlockedByWall));
                            assert_eq!(game, before);
                        }
                        Some(target) => {
                            assert_eq!(notice, None);
                            assert_eq!(game.player(), target);
                            assert_eq!(game.score(), before.score());
                        }
                    }
                    assert_player_consistent(&game);
                }
            }
        }
    }

    #[test]
    fn test_move_onto_treasure_destroys_it() {
        let mut game = game_at(pos(2, 1));

        assert_eq!(game.move_player(Direction::Down), None);

        assert_eq!(game.player(), pos(2, 2));
        assert_eq!(game.score(), 0);
        assert_eq!(game.grid().count(Cell::Treasure), 1);

        assert_eq!(game.move_player(Direction::Up), None);
        assert_eq!(game.grid().cell(pos(2, 2)), Cell::Empty);
        assert_eq!(game.interact(), Notice::NothingToInteract);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_interact_collects_treasure_scenario() {
        let mut game = Game::new();
        walk(
            &mut game,
            &[
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
            ],
        );
        assert_eq!(game.player(), pos(4, 2));

        walk(&mut game, &[Direction::Left]);
        assert_eq!(game.player(), pos(3, 2));

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.score(), 1);
        assert_eq!(game.grid().cell(pos(2, 2)), Cell::Empty);
        assert_eq!(game.grid().count(Cell::Treasure), 1);
        assert_player_consistent(&game);

        assert_eq!(game.interact(), Notice::NothingToInteract);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_interact_without_treasure_changes_nothing() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(game.interact(), Notice::NothingToInteract);
        assert_eq!(game, before);
    }

    #[test]
    fn test_interact_ignores_diagonal_treasure() {
        let mut game = game_at(pos(1, 1));
        let before = game.clone();

        assert_eq!(game.interact(), Notice::NothingToInteract);
        assert_eq!(game, before);
    }

    #[test]
    fn test_interact_collects_one_treasure_in_order() {
        let mut game = game_at(pos(4, 4));
        game.grid.set(pos(4, 5), Cell::Treasure);
        game.grid.set(pos(3, 4), Cell::Treasure);
        game.grid.set(pos(5, 4), Cell::Treasure);
        let treasures = game.grid().count(Cell::Treasure);

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.score(), 1);
        assert_eq!(game.grid().count(Cell::Treasure), treasures - 1);
        assert_eq!(game.grid().cell(pos(4, 5)), Cell::Empty);
        assert_eq!(game.grid().cell(pos(3, 4)), Cell::Treasure);

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.grid().cell(pos(3, 4)), Cell::Empty);
        assert_eq!(game.grid().cell(pos(5, 4)), Cell::Treasure);

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.grid().cell(pos(5, 4)), Cell::Empty);
        assert_eq!(game.score(), 3);
    }

    #[test]
    fn test_interact_prefers_up_neighbor() {
        let mut game = game_at(pos(5, 6));
        game.grid.set(pos(5, 7), Cell::Treasure);

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.grid().cell(pos(5, 5)), Cell::Empty);
        assert_eq!(game.grid().cell(pos(5, 7)), Cell::Treasure);
    }

    #[test]
    fn test_interact_at_grid_edge() {
        let mut game = game_at(pos(0, 9));
        game.grid.set(pos(1, 9), Cell::Treasure);

        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.score(), 1);
        assert_eq!(game.interact(), Notice::NothingToInteract);
    }

    #[test]
    fn test_collect_both_treasures() {
        let mut game = Game::new();
        walk(&mut game, &[Direction::Right, Direction::Right, Direction::Down]);
        assert_eq!(game.interact(), Notice::TreasureFound);

        walk(
            &mut game,
            &[
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
                Direction::Down,
                Direction::Left,
            ],
        );
        assert_eq!(game.player(), pos(6, 4));
        assert_eq!(game.interact(), Notice::NothingToInteract);

        walk(&mut game, &[Direction::Down]);
        assert_eq!(game.interact(), Notice::TreasureFound);
        assert_eq!(game.score(), 2);
        assert_eq!(game.grid().count(Cell::Treasure), 0);
        assert!(game.render().ends_with("Score: 2"));
    }
}
