//! Play chess against a remote move-generating service.
//!
//! The crate is the turn-taking layer between a human player and an engine
//! reached over HTTP: it applies the human's move, ships the resulting
//! position to the engine, translates the engine's compact reply token back
//! into a move, and publishes each consistent game-state snapshot to the
//! display layer. Rules, legality and board state come from `shakmaty`.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::EngineConfig;
pub use error::{TokenError, TurnError};
pub use models::engine::EngineClient;
pub use models::game::{GameSession, Phase, TurnState};
