//! # Othello Agent
//!
//! An automated Othello (Reversi) player that talks to an external game
//! server over a turn-based TCP protocol, with a choice of move-selection
//! strategies and a batch benchmark harness.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, players, stable-disc analysis
//! - [`ai`] — Strategy trait and the selectable strategies
//! - [`protocol`] — Turn-message decoding and the move wire format
//! - [`client`] — TCP game loop against the server
//! - [`arena`] — Batch benchmark against the reference server
//! - [`display`] — Console board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod protocol;
