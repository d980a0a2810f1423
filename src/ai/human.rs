use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::display::{self, COLUMN_LETTERS};
use crate::game::{Board, Player};

use super::strategy::Strategy;

/// Sentinel move that forfeits the game: a center cell is occupied from the
/// opening layout onward, so the server always rejects it and ends the game.
pub const FORFEIT: (usize, usize) = (3, 3);

/// Presents the legal moves on a rendered board and reads a selection from
/// the terminal.
pub struct HumanStrategy;

impl HumanStrategy {
    pub fn new() -> Self {
        HumanStrategy
    }

    fn prompt(&self, moves: &[(usize, usize)]) -> (usize, usize) {
        let stdin = io::stdin();
        loop {
            print!("Select a move from the list: ");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                // closed stdin leaves no way to answer; forfeit
                Ok(0) | Err(_) => return FORFEIT,
                Ok(_) => {}
            }
            match line.trim().parse::<i32>() {
                Ok(-1) => return FORFEIT,
                Ok(index) if (0..moves.len() as i32).contains(&index) => {
                    return moves[index as usize]
                }
                _ => println!(
                    "{}: enter a number between -1 and {}",
                    "Invalid selection".red(),
                    moves.len() - 1
                ),
            }
        }
    }
}

impl Default for HumanStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HumanStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> (usize, usize) {
        let moves = board.legal_moves(player);
        print!("{}", display::render_board(board, &moves));
        println!("Possible moves:");
        println!("\t-1 : End this game");
        for (index, &(row, col)) in moves.iter().enumerate() {
            let letter = COLUMN_LETTERS.as_bytes()[col] as char;
            println!("\t {index} : [{row}, {letter}]");
        }
        self.prompt(&moves)
    }

    fn name(&self) -> &'static str {
        "Human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_sentinel_is_never_a_legal_move() {
        // the sentinel targets an occupied center cell
        let board = Board::new();
        let (row, col) = FORFEIT;
        assert!(!board.is_legal_move(row, col, Player::One));
        assert!(!board.is_legal_move(row, col, Player::Two));
    }

    #[test]
    fn test_human_name() {
        assert_eq!(HumanStrategy::new().name(), "Human");
    }
}
