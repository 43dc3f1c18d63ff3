//! Stateful application models: the turn orchestrator and the engine client.

pub mod engine;
pub mod game;

pub use engine::EngineClient;
pub use game::{GameSession, Phase, TurnState};
