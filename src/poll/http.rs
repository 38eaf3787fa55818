use super::SnapshotSource;
use crate::error::PollError;
use crate::model::Snapshot;

/// Fetches snapshots from a monitor's HTTP endpoint.
///
/// No timeout is configured beyond the client's default.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self, PollError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| PollError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Uses a preconfigured client, e.g. one with custom timeouts or proxies.
    pub fn with_client(client: reqwest::blocking::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SnapshotSource for HttpSource {
    fn fetch(&mut self) -> Result<Snapshot, PollError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| PollError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PollError::Status(status.as_u16()));
        }
        let body = resp
            .text()
            .map_err(|e| PollError::Transport(e.to_string()))?;
        Ok(Snapshot::from_json(&body)?)
    }
}
