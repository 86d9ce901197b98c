//! HTTP client for the conference feed.

use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches snapshot files from the conference feed.
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: &str) -> Self {
        FeedClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET one feed file. The `t` query parameter busts intermediary caches
    /// so a freshly published snapshot is picked up immediately.
    pub async fn fetch(&self, file: &str) -> Result<String> {
        let url = format!(
            "{}/{}?t={}",
            self.base_url,
            file,
            chrono::Utc::now().timestamp()
        );
        log::debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .context("Failed to reach the feed")?;

        if !resp.status().is_success() {
            anyhow::bail!("HTTP {}", resp.status());
        }

        Ok(resp.text().await?)
    }
}
