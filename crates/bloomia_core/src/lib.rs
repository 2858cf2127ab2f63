//! # Bloomia Core
//!
//! The deterministic game engine behind Bloomia, a small arcade game where
//! every move is checked against a growing stack of rules.
//!
//! This crate contains:
//! - A seeded xorshift generator for reproducible layouts and rule plans
//! - The orb field with its neighbourhood queries
//! - The rule catalog and the ordered rule engine
//! - The per-run rule plan and stage escalation
//! - The run controller (moves, hints, tension, termination, summaries)
//! - Configuration, session metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use bloomia_core::config::AppConfig;
//! use bloomia_core::run::RunController;
//! use bloomia_data::Direction;
//!
//! let mut run = RunController::new(&AppConfig::default());
//! run.restart(1, 800.0, 600.0);
//! run.tick(16.0);
//! let verdict = run.attempt_move(Direction::Up);
//! assert!(verdict.is_some());
//! ```

/// Configuration for runs, the field and the terminal front end
pub mod config;
/// Drifting orb particles and spatial queries
pub mod field;
/// Session metrics and tracing setup
pub mod metrics;
/// Per-run rule plan and stage engines
pub mod plan;
/// Seeded xorshift32 generator
pub mod rng;
/// Move-validation rules and the rule engine
pub mod rules;
/// Run controller and run state
pub mod run;
/// Read-only run views for rendering
pub mod snapshot;
/// Bounded trail of accepted positions
pub mod trail;

pub use field::{Field, NeighborhoodStats, ParitySample};
pub use metrics::{init_logging, SessionMetrics};
pub use plan::RulePlan;
pub use rng::XorShiftRng;
pub use rules::{Rejection, Rule, RuleContext, RuleEngine, Verdict};
pub use run::{RunController, RunEvent};
pub use snapshot::RunSnapshot;
