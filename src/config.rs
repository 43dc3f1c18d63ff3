//! Engine connection settings.

use serde::Deserialize;

/// Where to reach the move-generating service and how deep to ask it to
/// search. Passed into [`crate::EngineClient::new`]; there is no process-wide
/// endpoint constant.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base URL of the engine service, without the `/info` path.
    pub base_url: String,
    /// Search depth sent with every request.
    pub depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2828".to_string(),
            depth: 3,
        }
    }
}
