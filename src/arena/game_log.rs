use crate::error::ArenaError;
use crate::game::{Board, Player, SIZE};

/// Final (player one, player two) scores of a logged game.
pub type FinalScores = (u32, u32);

const PLAYER_ONE_MOVED: &str = "Player one played";
const PLAYER_TWO_MOVED: &str = "Player two played";
const GAME_OVER: &str = "Game over...";

/// Feed one server log line into the shadow board. Move lines replay the
/// move; the game-over line yields the final scores. Anything else is
/// ignored.
pub fn apply_line(line: &str, board: &mut Board) -> Result<Option<FinalScores>, ArenaError> {
    if line.contains(PLAYER_ONE_MOVED) {
        let (row, col) = parse_move(line)?;
        board.apply_move(row, col, Player::One);
    } else if line.contains(PLAYER_TWO_MOVED) {
        let (row, col) = parse_move(line)?;
        board.apply_move(row, col, Player::Two);
    } else if line.contains(GAME_OVER) {
        if !board.is_terminal() {
            return Err(ArenaError::PrematureGameOver);
        }
        return Ok(Some((board.score(Player::One), board.score(Player::Two))));
    }
    Ok(None)
}

/// Extract the coordinate pair the server prints at the end of a move line,
/// e.g. `... Player one played [2, 4]`.
fn parse_move(line: &str) -> Result<(usize, usize), ArenaError> {
    let malformed = || ArenaError::MalformedMoveLine {
        line: line.to_string(),
    };

    let tail = line.split("played").nth(1).ok_or_else(malformed)?;
    let mut digits = tail
        .chars()
        .filter_map(|ch| ch.to_digit(10).map(|d| d as usize));
    let row = digits.next().ok_or_else(malformed)?;
    let col = digits.next().ok_or_else(malformed)?;
    // board coordinates are single digits; anything further is not a move
    if digits.next().is_some() || row >= SIZE || col >= SIZE {
        return Err(malformed());
    }
    Ok((row, col))
}
