use serde::Deserialize;

/// Deployment configuration for the submission boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    submit_url: String,
}

impl Config {
    /// The endpoint that accepts finished event payloads.
    pub fn submit_url(&self) -> &str {
        &self.submit_url
    }
}
