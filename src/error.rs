use std::io;
use std::path::PathBuf;

/// Errors raised when an external board snapshot cannot be trusted.
#[derive(Debug, thiserror::Error)]
pub enum InvalidState {
    #[error("board must have 8 rows, got {rows}")]
    WrongRowCount { rows: usize },

    #[error("row {row} must have 8 cells, got {cols}")]
    WrongColCount { row: usize, cols: usize },

    #[error("invalid cell value {value} at ({row}, {col}), expected 0, 1, or 2")]
    BadCellValue { row: usize, col: usize, value: u8 },
}

/// Errors that can occur while talking to the game server.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("connection error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to decode turn message: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server sent unknown player number {0}")]
    UnknownPlayer(u8),

    #[error("server sent an invalid board: {0}")]
    InvalidBoard(#[from] InvalidState),
}

/// Errors that can occur while driving the reference server in the arena.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("failed to spawn game server from {jar}: {source}")]
    Spawn { jar: PathBuf, source: io::Error },

    #[error("could not parse a move from log line: {line:?}")]
    MalformedMoveLine { line: String },

    #[error("server reported game over but the board still has legal moves")]
    PrematureGameOver,

    #[error("server exited without reporting a result")]
    MissingResult,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead { path: PathBuf, source: io::Error },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
