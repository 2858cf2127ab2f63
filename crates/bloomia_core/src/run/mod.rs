//! The run controller.
//!
//! A [`RunController`] owns the [`RunState`] of the current run and is the
//! only thing that mutates it. Front ends drive it with synchronous commands
//! (`restart`, `tick`, `attempt_move`, `request_hint`, `stop`) and read it
//! back through [`RunController::snapshot`] and [`RunController::drain_events`].

pub mod finalize;
pub mod hint;
pub mod init;
pub mod moves;
pub mod state;
pub mod update;

pub use finalize::run_hash;
pub use hint::{Hint, HintDirection};
pub use moves::MovePreview;
pub use state::{LastAttempt, RunState};

use crate::config::{AppConfig, FieldConfig, RunConfig};
use bloomia_data::{RuleId, RunPhase, RunSummary};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Notable things that happened since the last drain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    RunStarted { run_id: Uuid, seed: u32 },
    StageChanged { from: usize, to: usize },
    MoveRejected { rule: RuleId, label: String },
    HintUsed { legal: usize },
    RunEnded(RunSummary),
}

#[derive(Debug, Clone)]
pub struct RunController {
    pub(crate) config: RunConfig,
    pub(crate) field_config: FieldConfig,
    pub(crate) state: RunState,
    pub(crate) events: VecDeque<RunEvent>,
}

impl RunController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.run.clone(),
            field_config: config.field.clone(),
            state: RunState::idle(config.run.trail_capacity),
            events: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase.is_running()
    }

    pub fn seed(&self) -> u32 {
        self.state.seed
    }

    /// Summary of the last finished run, if any.
    pub fn summary(&self) -> Option<&RunSummary> {
        self.state.summary.as_ref()
    }

    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: RunEvent) {
        self.events.push_back(event);
    }
}
