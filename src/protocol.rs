//! Wire types for the game server's turn protocol.

use serde::Deserialize;

/// One turn request from the game server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnMessage {
    /// 8x8 grid of 0 (empty), 1, and 2 (player discs).
    pub board: Vec<Vec<u8>>,
    /// Advisory per-turn budget in milliseconds; never enforced here.
    pub max_turn_time: u64,
    /// Player whose move is requested (1 or 2).
    pub player: u8,
}

/// Encode a move exactly as the server expects it: `"[r, c]\n"`.
pub fn encode_move(mv: (usize, usize)) -> String {
    format!("[{}, {}]\n", mv.0, mv.1)
}
