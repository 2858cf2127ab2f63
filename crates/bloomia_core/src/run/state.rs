use crate::field::Field;
use crate::plan::RulePlan;
use crate::rng::XorShiftRng;
use crate::rules::{Rejection, RuleEngine};
use crate::trail::Trail;
use bloomia_data::{Direction, EndReason, Move, MoveAttempt, Point, RuleId, RunPhase, RunSummary};
use uuid::Uuid;

/// Outcome of the most recent move request, for the HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastAttempt {
    pub direction: Direction,
    pub rejection: Option<Rejection>,
}

impl LastAttempt {
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Mutable state of one run. Replaced wholesale on restart.
#[derive(Debug, Clone)]
pub struct RunState {
    pub run_id: Uuid,
    pub seed: u32,
    pub phase: RunPhase,
    /// Field stream. After field creation it only feeds shake jitter.
    pub rng: XorShiftRng,
    pub rules_rng: XorShiftRng,
    pub width: f64,
    pub height: f64,
    /// Milliseconds of simulated time since restart.
    pub clock_ms: f64,
    pub ended_at_ms: Option<f64>,
    pub end_reason: Option<EndReason>,

    pub player: Point,
    pub target: Point,

    pub stage: usize,
    pub tension: f64,
    pub max_tension: f64,
    pub last_tension_delta: f64,
    pub hint_penalty_remaining: u32,
    pub stability: u32,
    pub score: u64,
    pub bloom: f64,
    pub shake_ms: f64,
    pub shake_offset: (f64, f64),

    pub attempts: Vec<MoveAttempt>,
    pub accepted: Vec<Move>,
    pub valid_moves: u32,
    pub invalid_moves: u32,
    pub trail: Trail,
    pub last_move: Option<Direction>,
    pub last_attempt: Option<LastAttempt>,
    pub last_fail: Option<RuleId>,

    pub field: Field,
    pub plan: RulePlan,
    pub engine: RuleEngine,
    pub summary: Option<RunSummary>,
}

impl RunState {
    /// Placeholder before the first restart. Accepts no input.
    pub fn idle(trail_capacity: usize) -> Self {
        Self {
            run_id: Uuid::nil(),
            seed: 0,
            phase: RunPhase::Idle,
            rng: XorShiftRng::new(0),
            rules_rng: XorShiftRng::rules_stream(0),
            width: 0.0,
            height: 0.0,
            clock_ms: 0.0,
            ended_at_ms: None,
            end_reason: None,
            player: Point::default(),
            target: Point::default(),
            stage: 0,
            tension: 0.0,
            max_tension: 0.0,
            last_tension_delta: 0.0,
            hint_penalty_remaining: 0,
            stability: 0,
            score: 0,
            bloom: 0.0,
            shake_ms: 0.0,
            shake_offset: (0.0, 0.0),
            attempts: Vec::new(),
            accepted: Vec::new(),
            valid_moves: 0,
            invalid_moves: 0,
            trail: Trail::new(trail_capacity),
            last_move: None,
            last_attempt: None,
            last_fail: None,
            field: Field::from_particles(0.0, 0.0, Vec::new()),
            plan: RulePlan::default(),
            engine: RuleEngine::default(),
            summary: None,
        }
    }

    pub fn total_moves(&self) -> u32 {
        self.valid_moves + self.invalid_moves
    }

    /// Run time in ms, frozen once the run has ended.
    pub fn elapsed_ms(&self) -> f64 {
        self.ended_at_ms.unwrap_or(self.clock_ms).max(0.0)
    }
}
