//! HTTP client for the remote move-generating service.
//!
//! The service exposes a single endpoint: `POST /info` with a JSON body of
//! `{depth, fen}`, answered by a bare move-token string. There is no
//! authentication and no request correlation; the caller guarantees at most
//! one request in flight per game session.

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::TurnError;

#[derive(Serialize)]
struct MoveRequest<'a> {
    depth: u32,
    fen: &'a str,
}

/// Client for one engine service. Cheap to clone; holds no per-game state.
#[derive(Clone, Debug)]
pub struct EngineClient {
    http: reqwest::Client,
    base_url: String,
    depth: u32,
}

impl EngineClient {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            depth: config.depth,
        }
    }

    /// Ask the engine for its move in the given position.
    ///
    /// Returns the raw reply token, trimmed but not yet validated. Transport
    /// failures and non-success statuses come back as
    /// [`TurnError::EngineUnavailable`]; no retry is attempted.
    pub async fn request_move(&self, fen: &str) -> Result<String, TurnError> {
        let url = format!("{}/info", self.base_url);
        debug!(%url, depth = self.depth, %fen, "requesting engine move");

        let response = self
            .http
            .post(&url)
            .json(&MoveRequest {
                depth: self.depth,
                fen,
            })
            .send()
            .await
            .map_err(TurnError::EngineUnavailable)?
            .error_for_status()
            .map_err(TurnError::EngineUnavailable)?;

        let token = response
            .text()
            .await
            .map_err(TurnError::EngineUnavailable)?
            .trim()
            .to_string();

        debug!(%token, "engine replied");
        Ok(token)
    }
}
