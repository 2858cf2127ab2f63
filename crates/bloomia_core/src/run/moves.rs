use super::{LastAttempt, RunController, RunEvent};
use crate::rules::{RuleContext, Verdict};
use bloomia_data::{round_half_up, Direction, EndReason, Move, MoveAttempt, Point};

const MIN_STEP: f64 = 26.0;
const MAX_STEP: f64 = 60.0;

/// Where a move would land and whether the active rules allow it.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePreview {
    pub direction: Direction,
    pub to: Point,
    pub verdict: Verdict,
}

/// Step length in pixels: shrinks two pixels per stage (capped at 18
/// stages) and up to 26 more with tension.
pub fn step_size(stage: usize, tension: f64) -> f64 {
    let stage_component = 54.0 - (stage.min(18) as f64) * 2.0;
    let tension_component = 26.0 * tension.clamp(0.0, 1.0);
    round_half_up((stage_component - tension_component).clamp(MIN_STEP, MAX_STEP))
}

impl RunController {
    pub fn step_size(&self) -> f64 {
        step_size(self.state.stage, self.state.tension)
    }

    /// Destination of `direction` from the current target position.
    pub fn project(&self, direction: Direction) -> Point {
        self.state.target.offset(direction, self.step_size())
    }

    /// Validates a move against the active engine without touching state.
    pub fn preview(&self, direction: Direction) -> MovePreview {
        let s = &self.state;
        let to = self.project(direction);
        let ctx = RuleContext {
            direction,
            from: s.target,
            to,
            now_ms: s.clock_ms,
            started_at_ms: 0.0,
            accepted: &s.accepted,
            trail: &s.trail,
            stage: s.stage,
            width: s.width,
            height: s.height,
            field: &s.field,
            move_index: s.accepted.len() + 1,
        };
        MovePreview {
            direction,
            to,
            verdict: s.engine.evaluate(&ctx),
        }
    }

    pub fn legal_directions(&self) -> Vec<MovePreview> {
        Direction::ALL
            .into_iter()
            .map(|dir| self.preview(dir))
            .filter(|p| p.verdict.is_accept())
            .collect()
    }

    pub fn has_any_valid_move(&self) -> bool {
        Direction::ALL
            .into_iter()
            .any(|dir| self.preview(dir).verdict.is_accept())
    }

    /// Applies a player move. Returns `None` unless the run is in progress.
    pub fn attempt_move(&mut self, direction: Direction) -> Option<Verdict> {
        if !self.is_running() {
            return None;
        }

        let preview = self.preview(direction);
        let t = round_half_up(self.state.clock_ms).max(0.0) as u64;
        let accepted = preview.verdict.is_accept();
        self.state
            .attempts
            .push(MoveAttempt::new(t, direction, accepted));
        self.state.last_attempt = Some(LastAttempt {
            direction,
            rejection: preview.verdict.rejection().cloned(),
        });

        match &preview.verdict {
            Verdict::Reject(rejection) => {
                let rejection = rejection.clone();
                self.on_rejected(rejection.id, &rejection.label);
            }
            Verdict::Accept => self.on_accepted(direction, preview.to, t),
        }

        Some(preview.verdict)
    }

    fn on_rejected(&mut self, rule: bloomia_data::RuleId, label: &str) {
        let s = &mut self.state;
        s.invalid_moves += 1;
        s.stability = s.stability.saturating_sub(1);
        s.shake_ms = 140.0;
        s.last_fail = Some(rule);
        let delta = self.config.failure_tension_base + s.tension * self.config.failure_tension_scale;
        s.tension = (s.tension + delta).clamp(0.0, 1.0);
        s.max_tension = s.max_tension.max(s.tension);
        s.last_tension_delta = delta;

        tracing::debug!(
            rule = %rule,
            label = label,
            stability = s.stability,
            tension = s.tension,
            "Move rejected"
        );
        self.emit(RunEvent::MoveRejected {
            rule,
            label: label.to_string(),
        });

        if self.state.stability == 0 {
            self.stop(EndReason::Stability);
        }
    }

    fn on_accepted(&mut self, direction: Direction, to: Point, t: u64) {
        let relief = self.config.tension_relief;
        let s = &mut self.state;
        s.valid_moves += 1;
        s.last_fail = None;
        if s.hint_penalty_remaining > 0 {
            s.hint_penalty_remaining -= 1;
            s.last_tension_delta = 0.0;
            s.tension = 1.0;
        } else {
            s.last_tension_delta = -relief;
            s.tension = (s.tension - relief).clamp(0.0, 1.0);
        }
        s.score += 10 + (s.bloom * 30.0).floor() as u64;
        s.target = to;
        s.accepted.push(Move { t, dir: direction });
        s.last_move = Some(direction);
        s.trail.push(to);

        let next_stage = (s.valid_moves / self.config.moves_per_stage.max(1)) as usize;
        let next_stage = next_stage.min(s.plan.len());
        if next_stage != s.stage {
            let from = s.stage;
            s.stage = next_stage;
            s.engine = s.plan.engine_for_stage(next_stage, &self.config);
            tracing::info!(
                run_id = %s.run_id,
                from = from,
                to = next_stage,
                rules = s.engine.len(),
                "Stage changed"
            );
            self.emit(RunEvent::StageChanged {
                from,
                to: next_stage,
            });
        }

        if !self.has_any_valid_move() {
            self.stop(EndReason::DeadEnd);
        }
    }
}
