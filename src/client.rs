//! Blocking TCP game loop: decode each turn request, ask the strategy for a
//! move, send it back.

use std::io::Write;
use std::net::TcpStream;

use tracing::{debug, info};

use crate::ai::Strategy;
use crate::error::ProtocolError;
use crate::game::{Board, Player};
use crate::protocol::{encode_move, TurnMessage};

/// Plays games against the external server on behalf of one strategy.
pub struct GameClient {
    strategy: Box<dyn Strategy>,
}

impl GameClient {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        GameClient { strategy }
    }

    /// Answer a single decoded turn request.
    pub fn respond_to(&mut self, message: &TurnMessage) -> Result<String, ProtocolError> {
        let player = Player::from_number(message.player)
            .ok_or(ProtocolError::UnknownPlayer(message.player))?;
        let board = Board::from_snapshot(&message.board)?;
        let mv = self.strategy.select_move(&board, player);
        Ok(encode_move(mv))
    }

    /// Connect and play until the server closes the connection.
    pub fn play(&mut self, host: &str, port: u16) -> Result<(), ProtocolError> {
        info!(host, port, strategy = self.strategy.name(), "connecting");
        let stream = TcpStream::connect((host, port))?;
        let mut writer = stream.try_clone()?;

        let turns = serde_json::Deserializer::from_reader(&stream).into_iter::<TurnMessage>();
        for turn in turns {
            let message = turn?;
            debug!(
                player = message.player,
                max_turn_time_ms = message.max_turn_time,
                "turn received"
            );
            let response = self.respond_to(&message)?;
            writer.write_all(response.as_bytes())?;
            debug!(response = response.trim(), "move sent");
        }
        info!("connection closed by server");
        Ok(())
    }
}
