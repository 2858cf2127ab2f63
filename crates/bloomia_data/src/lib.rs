//! Plain data types shared by every Bloomia crate.

pub mod data;

pub use data::movement::{round_half_up, Axis, Direction, Move, MoveAttempt, Point};
pub use data::particle::Particle;
pub use data::run::{EndReason, RuleId, RuleInfo, RunPhase, RunSummary};
