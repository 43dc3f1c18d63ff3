//! Typed errors for the turn cycle.
//!
//! Two levels mirror the two components:
//! - `TokenError` — shape failures in the engine's move-token notation
//! - `TurnError` — everything that can end a turn early
//!
//! All of them are recoverable: the session resolves its phase back to
//! awaiting-human and keeps the last valid snapshot.

use shakmaty::Square;
use thiserror::Error;

/// Codec-level failures: the reply is not a well-formed move token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("move token must be 4 or 5 characters, got {0}")]
    BadLength(usize),

    #[error("{0:?} is not a board square")]
    BadSquare(String),

    #[error("{0:?} is not a promotion piece")]
    BadPromotion(char),
}

/// Failures while driving a single human/engine turn.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The human's move was rejected by the rules.
    #[error("illegal move {from}{to} in position {fen}")]
    IllegalMove { from: Square, to: Square, fen: String },

    /// Input arrived while the engine request was still in flight.
    #[error("engine is thinking, move ignored")]
    EngineThinking,

    /// The engine service could not be reached or answered with an error
    /// status.
    #[error("engine request failed")]
    EngineUnavailable(#[source] reqwest::Error),

    /// The engine answered, but the reply is not a parsable move token.
    #[error("engine reply {reply:?} is not a move token")]
    EngineProtocol {
        reply: String,
        #[source]
        source: TokenError,
    },

    /// A well-formed token naming a move that is not legal here.
    #[error("engine move {token} is illegal in position {fen}")]
    EngineIllegalMove { token: String, fen: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_errors_carry_the_offending_input() {
        let err = TokenError::BadLength(2);
        assert!(err.to_string().contains('2'));

        let err = TokenError::BadSquare("z9".to_string());
        assert!(err.to_string().contains("z9"));

        let err = TokenError::BadPromotion('k');
        assert!(err.to_string().contains('k'));
    }

    #[test]
    fn turn_errors_carry_diagnostic_context() {
        let err = TurnError::IllegalMove {
            from: Square::E2,
            to: Square::E5,
            fen: "8/8/8/8/8/8/8/8 w - - 0 1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("e2e5"));
        assert!(msg.contains("w - -"));

        let err = TurnError::EngineProtocol {
            reply: "zz".to_string(),
            source: TokenError::BadLength(2),
        };
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn protocol_error_exposes_token_error_as_source() {
        use std::error::Error as _;
        let err = TurnError::EngineProtocol {
            reply: "e9e9".to_string(),
            source: TokenError::BadSquare("e9".to_string()),
        };
        assert!(err.source().is_some());
    }
}
