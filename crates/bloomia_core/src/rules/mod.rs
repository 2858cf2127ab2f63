//! Move-validation rules.
//!
//! Every rule is an immutable value behind the [`Rule`] trait. A rule reads
//! nothing but its construction parameters and the [`RuleContext`] it is
//! handed, so the same `Arc<dyn Rule>` can sit in the run plan and in any
//! number of stage engines at once.

pub mod anti_loop;
pub mod engine;
pub mod movement;
pub mod orbs;
pub mod registry;
pub mod spatial;

pub use anti_loop::NoShortCycleRule;
pub use engine::RuleEngine;
pub use movement::{AlternateAxisRule, AxisBalanceRule, MomentumRule, NoReversalRule};
pub use orbs::{LocalDensityAxisRule, OrbParityRule};
pub use registry::{doc_for, RuleDoc, RULE_DOCS};
pub use spatial::{AvoidEdgesRule, BoundaryRule};

use crate::field::Field;
use crate::trail::Trail;
use bloomia_data::{Direction, Move, Point, RuleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a rule may read while judging one candidate move.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub direction: Direction,
    pub from: Point,
    pub to: Point,
    pub now_ms: f64,
    pub started_at_ms: f64,
    /// Accepted moves of the run, oldest first.
    pub accepted: &'a [Move],
    pub trail: &'a Trail,
    pub stage: usize,
    pub width: f64,
    pub height: f64,
    pub field: &'a Field,
    /// 1-based index the move would get if accepted.
    pub move_index: usize,
}

impl RuleContext<'_> {
    pub fn last_accepted(&self) -> Option<&Move> {
        self.accepted.last()
    }
}

/// Why a move was refused. `label` is the text shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub id: RuleId,
    pub label: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    pub fn reject(id: RuleId, label: impl Into<String>) -> Self {
        Verdict::Reject(Rejection {
            id,
            label: label.into(),
        })
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(rejection) => Some(rejection),
        }
    }
}

/// A single predicate over a candidate move.
pub trait Rule: fmt::Debug + Send + Sync {
    fn id(&self) -> RuleId;

    /// Text listed in the active-rules panel.
    fn label(&self) -> &str;

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Owns the borrowed pieces of a [`RuleContext`] so unit tests can build one.
    pub struct ContextFixture {
        pub direction: Direction,
        pub from: Point,
        pub to: Point,
        pub accepted: Vec<Move>,
        pub trail: Trail,
        pub field: Field,
        pub stage: usize,
        pub width: f64,
        pub height: f64,
    }

    impl ContextFixture {
        pub fn new(direction: Direction) -> Self {
            let from = Point::new(200.0, 200.0);
            Self {
                direction,
                from,
                to: from.offset(direction, 40.0),
                accepted: Vec::new(),
                trail: Trail::starting_at(from, 96),
                field: Field::from_particles(400.0, 400.0, Vec::new()),
                stage: 0,
                width: 400.0,
                height: 400.0,
            }
        }

        pub fn with_history(mut self, dirs: &[Direction]) -> Self {
            self.accepted = dirs
                .iter()
                .enumerate()
                .map(|(i, &dir)| Move {
                    t: i as u64 * 100,
                    dir,
                })
                .collect();
            self
        }

        pub fn to(mut self, to: Point) -> Self {
            self.to = to;
            self
        }

        pub fn ctx(&self) -> RuleContext<'_> {
            RuleContext {
                direction: self.direction,
                from: self.from,
                to: self.to,
                now_ms: 1000.0,
                started_at_ms: 0.0,
                accepted: &self.accepted,
                trail: &self.trail,
                stage: self.stage,
                width: self.width,
                height: self.height,
                field: &self.field,
                move_index: self.accepted.len() + 1,
            }
        }
    }
}
