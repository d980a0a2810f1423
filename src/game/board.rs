use crate::error::InvalidState;

use super::player::Player;

pub const SIZE: usize = 8;

/// The 8 capture directions. Walked in a fixed order so move enumeration
/// and flip traces are reproducible.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// Outcome of a finished game from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Lose,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a board with the standard opening layout: (3,3) and (4,4)
    /// belong to player one, (3,4) and (4,3) to player two.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::One;
        cells[3][4] = Cell::Two;
        cells[4][3] = Cell::Two;
        cells[4][4] = Cell::One;
        Board { cells }
    }

    /// Build a board from the server's integer grid (0 empty, 1/2 players).
    /// The grid comes off the wire, so dimensions and values are validated.
    pub fn from_snapshot(grid: &[Vec<u8>]) -> Result<Self, InvalidState> {
        if grid.len() != SIZE {
            return Err(InvalidState::WrongRowCount { rows: grid.len() });
        }
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (row, values) in grid.iter().enumerate() {
            if values.len() != SIZE {
                return Err(InvalidState::WrongColCount {
                    row,
                    cols: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::One,
                    2 => Cell::Two,
                    _ => return Err(InvalidState::BadCellValue { row, col, value }),
                };
            }
        }
        Ok(Board { cells })
    }

    /// Get the cell at a position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of discs owned by a player
    pub fn score(&self, player: Player) -> u32 {
        let own = player.to_cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == own)
            .count() as u32
    }

    /// Whether a signed position lies on the board
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
    }

    /// Check whether placing at (row, col) captures along one direction:
    /// the adjacent cell must hold an opponent disc, and the run of opponent
    /// discs must end at an own disc before any empty cell or the edge.
    pub fn captures_in_direction(
        &self,
        row: usize,
        col: usize,
        dir: (i32, i32),
        player: Player,
    ) -> bool {
        let (dr, dc) = dir;
        let own = player.to_cell();
        let opponent = player.other().to_cell();

        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        if !self.is_in_bounds(r, c) || self.cells[r as usize][c as usize] != opponent {
            return false;
        }
        while self.is_in_bounds(r, c) {
            match self.cells[r as usize][c as usize] {
                Cell::Empty => return false,
                cell if cell == own => return true,
                _ => {
                    r += dr;
                    c += dc;
                }
            }
        }
        false
    }

    /// A move is legal on an empty cell that captures in at least one direction
    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        if self.cells[row][col] != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.captures_in_direction(row, col, dir, player))
    }

    /// All legal moves in row-major order. The ordering is contractual:
    /// downstream tie-breaking must be reproducible under a fixed seed.
    pub fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_legal_move(row, col, player) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Place a disc and flip every captured run.
    ///
    /// Panics if the move is not legal. Callers must check first; an illegal
    /// move reaching this point is a bug in the orchestration layer.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) {
        assert!(
            self.is_legal_move(row, col, player),
            "illegal move ({row}, {col}) for player {}",
            player.number()
        );
        self.cells[row][col] = player.to_cell();
        for dir in DIRECTIONS {
            self.flip_in_direction(row, col, dir, player);
        }
    }

    /// Recolor the captured run between (row, col) and the terminating own
    /// disc, exclusive of the terminator.
    fn flip_in_direction(&mut self, row: usize, col: usize, dir: (i32, i32), player: Player) {
        if !self.captures_in_direction(row, col, dir, player) {
            return;
        }
        let own = player.to_cell();
        let (dr, dc) = dir;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while self.cells[r as usize][c as usize] != own {
            self.cells[r as usize][c as usize] = own;
            r += dr;
            c += dc;
        }
    }

    /// The game ends when neither player has a legal move
    pub fn is_terminal(&self) -> bool {
        self.legal_moves(Player::One).is_empty() && self.legal_moves(Player::Two).is_empty()
    }

    /// Rank the score from one player's perspective
    pub fn result_for(&self, player: Player) -> GameResult {
        let own = self.score(player);
        let opponent = self.score(player.other());
        if own > opponent {
            GameResult::Win
        } else if own < opponent {
            GameResult::Lose
        } else {
            GameResult::Tie
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
