//! Background leaderboard traffic.
//!
//! Requests run as tokio tasks and report back over a channel that the frame
//! loop drains, so a slow backend never stalls input or drawing.

use bloomia_io::{LeaderboardRow, ScoreRecord, ScoreboardBackend, SupabaseRest};
use bloomia_io::settings::Settings;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreboardUpdate {
    Leaderboard(Result<Vec<LeaderboardRow>, String>),
    Submitted(Result<(), String>),
}

pub struct ScoreboardTasks {
    backend: Option<Arc<dyn ScoreboardBackend>>,
    limit: usize,
    tx: Sender<ScoreboardUpdate>,
    rx: Receiver<ScoreboardUpdate>,
}

impl ScoreboardTasks {
    pub fn new(backend: Option<Arc<dyn ScoreboardBackend>>, limit: usize) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            backend,
            limit,
            tx,
            rx,
        }
    }

    pub fn from_settings(settings: &Settings, limit: usize) -> Self {
        let backend = SupabaseRest::from_settings(settings)
            .map(|rest| Arc::new(rest) as Arc<dyn ScoreboardBackend>);
        Self::new(backend, limit)
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Must be called from inside a tokio runtime.
    pub fn refresh(&self) -> bool {
        let Some(backend) = self.backend.clone() else {
            return false;
        };
        let tx = self.tx.clone();
        let limit = self.limit;
        tokio::spawn(async move {
            let result = backend
                .fetch_leaderboard(limit)
                .await
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                tracing::warn!(error = %e, "Leaderboard fetch failed");
            }
            let _ = tx.send(ScoreboardUpdate::Leaderboard(result));
        });
        true
    }

    /// Posts the record, then refreshes the leaderboard on success.
    pub fn submit(&self, record: ScoreRecord) -> bool {
        let Some(backend) = self.backend.clone() else {
            return false;
        };
        let tx = self.tx.clone();
        let limit = self.limit;
        tokio::spawn(async move {
            match backend.submit_score(&record).await {
                Ok(()) => {
                    tracing::info!(score = record.score, seed = record.seed, "Score submitted");
                    let _ = tx.send(ScoreboardUpdate::Submitted(Ok(())));
                    let rows = backend
                        .fetch_leaderboard(limit)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(ScoreboardUpdate::Leaderboard(rows));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Score submission failed");
                    let _ = tx.send(ScoreboardUpdate::Submitted(Err(e.to_string())));
                }
            }
        });
        true
    }

    pub fn poll(&self) -> Vec<ScoreboardUpdate> {
        self.rx.try_iter().collect()
    }
}
