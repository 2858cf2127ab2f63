use super::{RunController, RunEvent};
use bloomia_data::{round_half_up, EndReason, MoveAttempt, RuleId, RunPhase, RunSummary};
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct HashSource<'a> {
    seed: u32,
    rules: &'a [RuleId],
    moves: &'a [MoveAttempt],
}

/// Lowercase hex SHA-256 over `{"seed":..,"rules":[..],"moves":[..]}`.
///
/// `rules` is the full plan order and `moves` every attempt, rejected ones
/// included. Key order is fixed by the struct above.
pub fn run_hash(seed: u32, rules: &[RuleId], moves: &[MoveAttempt]) -> serde_json::Result<String> {
    let source = HashSource {
        seed,
        rules,
        moves,
    };
    let bytes = serde_json::to_vec(&source)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

impl RunController {
    /// Ends the run in progress. Does nothing if no run is in progress.
    pub fn stop(&mut self, reason: EndReason) -> Option<&bloomia_data::RunSummary> {
        if !self.is_running() {
            return None;
        }

        self.state.phase = RunPhase::Ended(reason);
        self.state.end_reason = Some(reason);
        self.state.ended_at_ms = Some(self.state.clock_ms);

        let summary = self.build_summary(reason);
        tracing::info!(
            run_id = %summary.run_id,
            seed = summary.seed,
            reason = %reason,
            score = summary.score,
            moves = summary.moves,
            stage = summary.stage,
            "Run ended"
        );
        self.emit(RunEvent::RunEnded(summary.clone()));
        self.state.summary = Some(summary);
        self.state.summary.as_ref()
    }

    fn build_summary(&self, reason: EndReason) -> RunSummary {
        let s = &self.state;
        let moves = s.total_moves();
        let accuracy = if moves > 0 {
            f64::from(s.valid_moves) / f64::from(moves)
        } else {
            0.0
        };

        // An empty hash marks the summary as unverifiable; it is never submitted.
        let run_hash = match run_hash(s.seed, &s.plan.ids(), &s.attempts) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!(run_id = %s.run_id, error = %e, "Failed to hash run");
                String::new()
            }
        };

        RunSummary {
            run_id: s.run_id,
            seed: s.seed,
            score: s.score,
            duration_ms: round_half_up(s.elapsed_ms()) as u64,
            moves,
            valid_moves: s.valid_moves,
            invalid_moves: s.invalid_moves,
            accuracy,
            stage: s.stage,
            max_tension: s.max_tension,
            end_reason: reason,
            active_rules: s.engine.list(),
            run_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use bloomia_data::Direction;

    #[test]
    fn test_run_hash_golden() {
        let moves = [
            MoveAttempt::new(0, Direction::Up, true),
            MoveAttempt::new(16, Direction::Left, false),
        ];
        assert_eq!(
            run_hash(1, &[RuleId::AlternateAxis, RuleId::NoReversal], &moves).unwrap(),
            "d793a90d486ab140391f8e6f745b7a09894ca6d40ec941f5cfe6e11008b7a99c"
        );
        assert_eq!(
            run_hash(0, &[], &[]).unwrap(),
            "119f93379d70b88a521c3460b57425e86e654927b18179ac73c3d1ff96deaef0"
        );
    }

    #[test]
    fn test_stop_only_once() {
        let mut ctl = RunController::new(&AppConfig::default());
        ctl.restart(4, 800.0, 600.0);
        ctl.tick(250.0);
        let summary = ctl.stop(EndReason::Abandoned).cloned().unwrap();
        assert_eq!(summary.end_reason, EndReason::Abandoned);
        assert_eq!(summary.duration_ms, 250);
        assert_eq!(summary.moves, 0);
        assert_eq!(summary.accuracy, 0.0);
        assert_eq!(summary.run_hash.len(), 64);

        ctl.tick(100.0);
        assert!(ctl.stop(EndReason::Stability).is_none());
        assert_eq!(ctl.summary().map(|s| s.duration_ms), Some(250));
        assert_eq!(ctl.phase(), RunPhase::Ended(EndReason::Abandoned));
    }

    #[test]
    fn test_run_id_not_hashed() {
        let mut a = RunController::new(&AppConfig::default());
        let mut b = RunController::new(&AppConfig::default());
        a.restart(8, 800.0, 600.0);
        b.restart(8, 800.0, 600.0);
        let ha = a.stop(EndReason::Abandoned).map(|s| s.run_hash.clone());
        let hb = b.stop(EndReason::Abandoned).map(|s| s.run_hash.clone());
        assert_eq!(ha, hb);
    }
}
