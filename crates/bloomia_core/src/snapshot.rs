//! Read-only view of a run for rendering and the HUD.

use crate::field::{NeighborhoodStats, ParitySample};
use crate::rules::orbs::ORB_PARITY_NEAREST;
use crate::run::{LastAttempt, RunController};
use bloomia_data::{Direction, Particle, Point, RuleId, RuleInfo, RunPhase};

/// Radius of the density readout in the HUD.
pub const HUD_DENSITY_RADIUS: f64 = 130.0;

#[derive(Debug, Clone)]
pub struct RunSnapshot {
    pub seed: u32,
    pub phase: RunPhase,
    pub width: f64,
    pub height: f64,
    pub elapsed_ms: f64,
    pub stage: usize,
    pub score: u64,
    pub tension: f64,
    pub max_tension: f64,
    pub last_tension_delta: f64,
    pub step: f64,
    pub stability: u32,
    pub stability_budget: u32,
    pub valid_moves: u32,
    pub invalid_moves: u32,
    pub hint_penalty_remaining: u32,
    pub bloom: f64,
    pub shake_offset: (f64, f64),
    pub player: Point,
    pub target: Point,
    pub trail: Vec<Point>,
    pub last_move: Option<Direction>,
    pub last_attempt: Option<LastAttempt>,
    pub last_fail: Option<RuleId>,
    pub local: NeighborhoodStats,
    pub orb_parity_radius: u32,
    pub parity: ParitySample,
    pub active_rules: Vec<RuleInfo>,
    pub particles: Vec<Particle>,
}

impl RunController {
    pub fn snapshot(&self) -> RunSnapshot {
        let s = &self.state;
        let radius = s.plan.orb_parity_radius();
        RunSnapshot {
            seed: s.seed,
            phase: s.phase,
            width: s.width,
            height: s.height,
            elapsed_ms: s.elapsed_ms(),
            stage: s.stage,
            score: s.score,
            tension: s.tension,
            max_tension: s.max_tension,
            last_tension_delta: s.last_tension_delta,
            step: self.step_size(),
            stability: s.stability,
            stability_budget: self.config.stability_budget,
            valid_moves: s.valid_moves,
            invalid_moves: s.invalid_moves,
            hint_penalty_remaining: s.hint_penalty_remaining,
            bloom: s.bloom,
            shake_offset: s.shake_offset,
            player: s.player,
            target: s.target,
            trail: s.trail.iter().copied().collect(),
            last_move: s.last_move,
            last_attempt: s.last_attempt.clone(),
            last_fail: s.last_fail,
            local: s
                .field
                .stats_near(s.target.x, s.target.y, HUD_DENSITY_RADIUS),
            orb_parity_radius: radius,
            parity: s.field.parity_at(
                s.target.x,
                s.target.y,
                f64::from(radius),
                ORB_PARITY_NEAREST,
            ),
            active_rules: s.engine.list(),
            particles: s.field.particles().to_vec(),
        }
    }
}

impl RunSnapshot {
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }
}
