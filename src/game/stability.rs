use super::board::{Board, SIZE};
use super::player::Player;

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// The four flip axes. A disc is safe on an axis when at least one side of
/// the pair is off the board or already stable.
const AXES: [[(i32, i32); 2]; 4] = [
    [(1, 0), (-1, 0)],
    [(0, 1), (0, -1)],
    [(1, 1), (-1, -1)],
    [(1, -1), (-1, 1)],
];

/// Count the discs a player can never lose for the rest of the game.
///
/// Heuristic, not an exact proof: without a corner anchor the count is 0,
/// even when an edge formation is genuinely safe. Move selection was tuned
/// against this undercount, so it is kept as-is.
pub fn stable_count(board: &Board, player: Player) -> u32 {
    let own = player.to_cell();
    if !CORNERS.iter().any(|&(row, col)| board.get(row, col) == own) {
        return 0;
    }

    // Fixpoint over a boolean grid, reading the previous pass. Each
    // productive pass marks at least one new cell, bounding the passes by
    // the cell count.
    let mut stable = [[false; SIZE]; SIZE];
    for _pass in 0..SIZE * SIZE {
        let prev = stable;
        let mut changed = false;
        for row in 0..SIZE {
            for col in 0..SIZE {
                if board.get(row, col) != own || stable[row][col] {
                    continue;
                }
                let anchored = is_corner(row, col)
                    || AXES.iter().all(|pair| {
                        pair.iter().any(|&(dr, dc)| {
                            let (r, c) = (row as i32 + dr, col as i32 + dc);
                            !board.is_in_bounds(r, c) || prev[r as usize][c as usize]
                        })
                    });
                if anchored {
                    stable[row][col] = true;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    stable.iter().flatten().filter(|&&s| s).count() as u32
}

fn is_corner(row: usize, col: usize) -> bool {
    (row == 0 || row == SIZE - 1) && (col == 0 || col == SIZE - 1)
}
