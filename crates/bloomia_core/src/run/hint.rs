use super::{RunController, RunEvent};
use crate::rules::orbs::ORB_PARITY_NEAREST;
use bloomia_data::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintDirection {
    pub direction: Direction,
    /// Dots among the nearest orbs at the destination.
    pub dots: u32,
    pub nearest: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub directions: Vec<HintDirection>,
    pub penalty_moves: u32,
}

impl RunController {
    /// Reveals the legal directions at a price: tension jumps to 1 and stays
    /// there for the next few accepted moves.
    pub fn request_hint(&mut self) -> Option<Hint> {
        if !self.is_running() {
            return None;
        }

        let penalty_moves = self.config.hint_penalty_moves;
        let s = &mut self.state;
        let previous = s.tension;
        s.hint_penalty_remaining = penalty_moves;
        s.tension = 1.0;
        s.max_tension = s.max_tension.max(s.tension);
        s.last_tension_delta = 1.0 - previous;

        let radius = f64::from(self.state.plan.orb_parity_radius());
        let directions: Vec<HintDirection> = self
            .legal_directions()
            .into_iter()
            .map(|preview| {
                let sample =
                    self.state
                        .field
                        .parity_at(preview.to.x, preview.to.y, radius, ORB_PARITY_NEAREST);
                HintDirection {
                    direction: preview.direction,
                    dots: sample.parity_sum_nearest,
                    nearest: sample.nearest_used,
                }
            })
            .collect();

        tracing::info!(
            run_id = %self.state.run_id,
            legal = directions.len(),
            "Hint requested"
        );
        self.emit(RunEvent::HintUsed {
            legal: directions.len(),
        });

        Some(Hint {
            directions,
            penalty_moves,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;
    use crate::run::RunController;

    #[test]
    fn test_hint_sets_penalty_and_tension() {
        let mut ctl = RunController::new(&AppConfig::default());
        ctl.restart(21, 800.0, 600.0);
        let hint = ctl.request_hint().unwrap();
        assert_eq!(hint.penalty_moves, 3);
        let s = ctl.state();
        assert_eq!(s.tension, 1.0);
        assert_eq!(s.max_tension, 1.0);
        assert_eq!(s.hint_penalty_remaining, 3);
        for d in &hint.directions {
            assert!(ctl.preview(d.direction).verdict.is_accept());
            assert!(d.nearest <= 5);
        }
    }

    #[test]
    fn test_tension_held_during_penalty() {
        let mut ctl = RunController::new(&AppConfig::default());
        ctl.restart(21, 800.0, 600.0);
        ctl.request_hint();
        ctl.tick(16.0);
        assert_eq!(ctl.state().tension, 1.0);

        let legal = ctl.legal_directions();
        if let Some(first) = legal.first() {
            ctl.attempt_move(first.direction);
            assert_eq!(ctl.state().hint_penalty_remaining, 2);
            assert_eq!(ctl.state().tension, 1.0);
        }
    }
}
