//! Console board rendering for interactive play.

use crossterm::style::Stylize;

use crate::game::{Board, Cell, SIZE};

pub const COLUMN_LETTERS: &str = "abcdefgh";

/// Render the board with row and column legends. Cells listed in
/// `highlights` are drawn with the move marker instead of their contents.
pub fn render_board(board: &Board, highlights: &[(usize, usize)]) -> String {
    let mut out = String::new();
    out.push_str(&column_legend());
    for row in 0..SIZE {
        out.push_str(&format!("{row} "));
        for col in 0..SIZE {
            if highlights.contains(&(row, col)) {
                out.push_str(" ◉ ");
            } else {
                match board.get(row, col) {
                    Cell::Empty => out.push_str(" ▢ "),
                    Cell::One => out.push_str(&format!(" {} ", "1".red())),
                    Cell::Two => out.push_str(&format!(" {} ", "2".blue())),
                }
            }
        }
        out.push_str(&format!(" {row}\n"));
    }
    out.push_str(&column_legend());
    out
}

fn column_legend() -> String {
    let mut line = String::from("   ");
    for letter in COLUMN_LETTERS.chars() {
        line.push(letter);
        line.push_str("  ");
    }
    line.push('\n');
    line
}
