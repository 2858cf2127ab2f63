//! Session metrics and logging setup.
//!
//! Tallies runs and move outcomes across a session and installs the
//! `tracing` subscriber used by every front end.

use bloomia_data::{RuleId, RunSummary};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters for one play session.
pub struct SessionMetrics {
    runs_started: AtomicU64,
    runs_ended: AtomicU64,
    attempts: AtomicU64,
    rejections: AtomicU64,
    best_score: AtomicU64,
    pub rejections_by_rule: Mutex<HashMap<RuleId, u64>>,
    start_time: Instant,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            runs_started: AtomicU64::new(0),
            runs_ended: AtomicU64::new(0),
            attempts: AtomicU64::new(0),
            rejections: AtomicU64::new(0),
            best_score: AtomicU64::new(0),
            rejections_by_rule: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    pub fn record_run_start(&self) {
        self.runs_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one move request. `rejected_by` is the failing rule, if any.
    pub fn record_attempt(&self, rejected_by: Option<RuleId>) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        if let Some(rule) = rejected_by {
            self.rejections.fetch_add(1, Ordering::Relaxed);
            let mut by_rule = self
                .rejections_by_rule
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            *by_rule.entry(rule).or_insert(0) += 1;
        }
    }

    pub fn record_run_end(&self, summary: &RunSummary) {
        self.runs_ended.fetch_add(1, Ordering::Relaxed);
        self.best_score.fetch_max(summary.score, Ordering::Relaxed);
    }

    #[must_use]
    pub fn runs_started(&self) -> u64 {
        self.runs_started.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rejections(&self) -> u64 {
        self.rejections.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn rejections_for(&self, rule: RuleId) -> u64 {
        self.rejections_by_rule
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&rule)
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Writes the session totals to the log.
    pub fn log_summary(&self) {
        let by_rule = self
            .rejections_by_rule
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let mut breakdown: Vec<(RuleId, u64)> = by_rule.iter().map(|(k, v)| (*k, *v)).collect();
        breakdown.sort();
        tracing::info!(
            runs_started = self.runs_started(),
            runs_ended = self.runs_ended.load(Ordering::Relaxed),
            attempts = self.attempts(),
            rejections = self.rejections(),
            best_score = self.best_score(),
            elapsed_s = self.elapsed().as_secs(),
            by_rule = ?breakdown,
            "Session summary"
        );
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber.
///
/// With `log_file` set, output goes to that file (parent directories are
/// created) so an alternate-screen UI stays clean. Otherwise it goes to
/// stderr. A subscriber that is already installed is left in place.
pub fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .ok();
        }
    }
    Ok(())
}
