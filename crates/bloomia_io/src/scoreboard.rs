//! Leaderboard client for a Supabase-style REST backend.

use crate::error::{IoError, Result};
use crate::settings::{Settings, ANONYMOUS};
use async_trait::async_trait;
use bloomia_data::RunSummary;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

/// Row posted to `scores` when a run ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u64,
    pub seed: u32,
    pub duration_ms: u64,
    pub moves: u32,
    pub accuracy: f64,
    pub run_hash: String,
}

impl ScoreRecord {
    /// `None` when the summary carries no run hash.
    pub fn from_summary(summary: &RunSummary, player_name: &str) -> Option<Self> {
        if summary.run_hash.is_empty() {
            return None;
        }
        let name = player_name.trim();
        Some(Self {
            name: if name.is_empty() { ANONYMOUS } else { name }.to_string(),
            score: summary.score,
            seed: summary.seed,
            duration_ms: summary.duration_ms,
            moves: summary.moves,
            accuracy: summary.accuracy,
            run_hash: summary.run_hash.clone(),
        })
    }
}

/// Row read from the `leaderboard` view. Unknown columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardRow {
    pub name: Option<String>,
    pub score: i64,
    pub duration_ms: Option<f64>,
    pub accuracy: Option<f64>,
}

#[async_trait]
pub trait ScoreboardBackend: Send + Sync {
    async fn fetch_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardRow>>;

    async fn submit_score(&self, record: &ScoreRecord) -> Result<()>;
}

/// Talks to `{base}/rest/v1/...` with the anon key.
#[derive(Debug, Clone)]
pub struct SupabaseRest {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
}

impl SupabaseRest {
    const REQUEST_TIMEOUT_SECS: u64 = 10;
    const MAX_RETRIES: u32 = 2;
    const INITIAL_BACKOFF_MS: u64 = 250;

    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let trimmed = base_url.trim();
        Self {
            base_url: trimmed.strip_suffix('/').unwrap_or(trimmed).to_string(),
            anon_key: anon_key.trim().to_string(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(Self::REQUEST_TIMEOUT_SECS),
            max_retries: Self::MAX_RETRIES,
            initial_backoff: Duration::from_millis(Self::INITIAL_BACKOFF_MS),
        }
    }

    /// `None` unless the settings carry both a URL and a key.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        settings
            .is_configured()
            .then(|| Self::new(&settings.supabase_url, &settings.supabase_anon_key))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries apply to leaderboard reads only; submissions are sent once.
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, initial_backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.initial_backoff = initial_backoff;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn leaderboard_url(&self, limit: usize) -> String {
        format!("{}/rest/v1/leaderboard?select=*&limit={limit}", self.base_url)
    }

    pub fn scores_url(&self) -> String {
        format!("{}/rest/v1/scores", self.base_url)
    }

    /// Sends one request and returns the response body text.
    async fn request(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&ScoreRecord>,
    ) -> Result<String> {
        let mut builder = self
            .client
            .request(method.clone(), url)
            .timeout(self.timeout)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("Prefer", "return=minimal");
        if let Some(record) = body {
            builder = builder.json(record);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| IoError::network(format!("{method} {url}: {e}")))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(IoError::http(method.as_str(), url, status.to_string(), text));
        }
        Ok(text)
    }
}

fn rows_from_body(text: &str) -> Result<Vec<LeaderboardRow>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ScoreboardBackend for SupabaseRest {
    async fn fetch_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardRow>> {
        let url = self.leaderboard_url(limit);
        let mut attempt = 0;
        loop {
            match self.request(reqwest::Method::GET, &url, None).await {
                Ok(text) => return rows_from_body(&text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    let backoff = self.initial_backoff * 2_u32.pow(attempt);
                    tracing::warn!(attempt = attempt + 1, error = %e, "Leaderboard fetch failed, retrying");
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn submit_score(&self, record: &ScoreRecord) -> Result<()> {
        let url = self.scores_url();
        self.request(reqwest::Method::POST, &url, Some(record))
            .await
            .map(|_| ())
    }
}
