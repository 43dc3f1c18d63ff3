//! The turn orchestrator.
//!
//! `GameSession` owns the authoritative game state and drives the cycle
//! human move -> engine request -> engine move. Each successful transition
//! replaces the whole [`TurnState`] snapshot and publishes it to subscribers;
//! a snapshot is either the prior valid state or a new fully-valid one,
//! never a half-applied intermediate.
//!
//! The `Phase::AwaitingEngine` phase doubles as the mutual-exclusion
//! mechanism: while it is set, human input is rejected, so there is never
//! more than one engine request in flight.

use shakmaty::{Chess, Position, Role, Square};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::chess::{position_fen, resolve_move};
use crate::domain::token;
use crate::error::TurnError;
use crate::models::engine::EngineClient;

/// Whose input the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The human may submit a move.
    AwaitingHuman,
    /// An engine request is in flight; human input is rejected.
    AwaitingEngine,
}

/// One consistent snapshot of the game, as seen by the display layer.
#[derive(Clone, Debug)]
pub struct TurnState {
    pub position: Chess,
    pub phase: Phase,
    /// Coordinate notation of the last applied ply (`"e2e4"`), if any.
    pub last_move: Option<String>,
}

impl TurnState {
    fn initial(position: Chess) -> Self {
        Self {
            position,
            phase: Phase::AwaitingHuman,
            last_move: None,
        }
    }
}

/// The stateful half of the crate: applies moves against the rules layer,
/// talks to the engine, and publishes snapshots.
pub struct GameSession {
    state: TurnState,
    client: EngineClient,
    updates: watch::Sender<TurnState>,
}

impl GameSession {
    /// Start a session from the standard starting position.
    pub fn new(client: EngineClient) -> Self {
        Self::from_position(Chess::default(), client)
    }

    /// Start a session from an arbitrary legal position.
    pub fn from_position(position: Chess, client: EngineClient) -> Self {
        let state = TurnState::initial(position);
        let (updates, _) = watch::channel(state.clone());
        Self {
            state,
            client,
            updates,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Observe every published snapshot. The receiver always holds the
    /// latest consistent state; readers decide from `phase` whether to show
    /// a "thinking" indicator.
    pub fn subscribe(&self) -> watch::Receiver<TurnState> {
        self.updates.subscribe()
    }

    /// Play one full turn: apply the human move, ask the engine, apply its
    /// reply. On an engine-side failure the human move stays on the board
    /// and the phase resolves back to [`Phase::AwaitingHuman`] so the
    /// failure can be reported and play resumed by outside means.
    pub async fn play_turn(&mut self, from: Square, to: Square) -> Result<&TurnState, TurnError> {
        self.submit_human_move(from, to)?;

        let fen = position_fen(&self.state.position);
        let token = match self.client.request_move(&fen).await {
            Ok(token) => token,
            Err(err) => {
                warn!(%fen, error = %err, "engine request failed");
                self.revert_to_human();
                return Err(err);
            }
        };

        self.apply_engine_move(&token)?;
        Ok(&self.state)
    }

    /// Apply the human's move. Promotion always defaults to a queen; the
    /// input layer offers no choice.
    ///
    /// On success the post-move snapshot is published with
    /// `phase = AwaitingEngine` before any network activity starts.
    pub fn submit_human_move(&mut self, from: Square, to: Square) -> Result<(), TurnError> {
        if self.state.phase != Phase::AwaitingHuman {
            warn!(%from, %to, "move ignored, engine is thinking");
            return Err(TurnError::EngineThinking);
        }

        let position = self.state.position.clone();
        let m = resolve_move(&position, from, to, Some(Role::Queen)).ok_or_else(|| {
            let err = TurnError::IllegalMove {
                from,
                to,
                fen: position_fen(&position),
            };
            warn!(%from, %to, "illegal human move");
            err
        })?;

        let next = position
            .play(m)
            .map_err(|_| TurnError::IllegalMove {
                from,
                to,
                fen: position_fen(&self.state.position),
            })?;

        debug!(%from, %to, "human move applied");
        self.publish(TurnState {
            position: next,
            phase: Phase::AwaitingEngine,
            last_move: Some(format!("{from}{to}")),
        });
        Ok(())
    }

    /// Decode and apply the engine's reply token.
    ///
    /// The token is first checked for shape, then resolved against the
    /// legal-move list; a pawn landing on the back rank is materialized with
    /// a promotion piece (queen unless the token names one), and no
    /// promotion role is attached otherwise. Any failure leaves the
    /// position untouched and resets the phase to [`Phase::AwaitingHuman`].
    pub fn apply_engine_move(&mut self, raw: &str) -> Result<(), TurnError> {
        let decoded = match token::decode(raw) {
            Ok(decoded) => decoded,
            Err(source) => {
                warn!(token = %raw, error = %source, "engine reply is not a move token");
                self.revert_to_human();
                return Err(TurnError::EngineProtocol {
                    reply: raw.to_string(),
                    source,
                });
            }
        };

        let position = self.state.position.clone();
        let resolved = resolve_move(&position, decoded.from, decoded.to, decoded.promotion);
        let next = match resolved.and_then(|m| position.play(m).ok()) {
            Some(next) => next,
            None => {
                let fen = position_fen(&self.state.position);
                warn!(token = %raw, %fen, "engine played an illegal move");
                self.revert_to_human();
                return Err(TurnError::EngineIllegalMove {
                    token: raw.to_string(),
                    fen,
                });
            }
        };

        debug!(token = %raw, "engine move applied");
        self.publish(TurnState {
            position: next,
            phase: Phase::AwaitingHuman,
            last_move: Some(raw.to_string()),
        });
        Ok(())
    }

    /// Resolve a failed engine turn: keep the position, accept input again.
    fn revert_to_human(&mut self) {
        if self.state.phase != Phase::AwaitingHuman {
            let mut state = self.state.clone();
            state.phase = Phase::AwaitingHuman;
            self.publish(state);
        }
    }

    fn publish(&mut self, next: TurnState) {
        self.state = next;
        self.updates.send_replace(self.state.clone());
    }
}
