//! Terminal-free autoplay used for smoke runs and determinism checks.

use crate::model::config::AppConfig;
use crate::model::{RunController, SessionMetrics};
use bloomia_core::XorShiftRng;
use bloomia_data::{Direction, EndReason, RunSummary};

const PICKER_SALT: u32 = 0x5bd1_e995;

#[derive(Debug, Clone)]
pub struct HeadlessOptions {
    pub seed: Option<u32>,
    pub runs: u32,
    pub width: f64,
    pub height: f64,
    pub tick_ms: f64,
    /// One move every this many ticks.
    pub move_every: u64,
    /// Runs still going after this many ticks are abandoned.
    pub max_ticks: u64,
    /// Chance of a deliberately random (possibly illegal) move.
    pub blunder_rate: f64,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            seed: None,
            runs: 1,
            width: 640.0,
            height: 480.0,
            tick_ms: 16.0,
            move_every: 6,
            max_ticks: 60_000,
            blunder_rate: 0.15,
        }
    }
}

/// Plays one run from `seed` to completion.
pub fn play_run(
    controller: &mut RunController,
    seed: u32,
    opts: &HeadlessOptions,
    metrics: &SessionMetrics,
) -> Option<RunSummary> {
    controller.restart(seed, opts.width, opts.height);
    controller.drain_events();
    metrics.record_run_start();
    let mut picker = XorShiftRng::new(seed ^ PICKER_SALT);

    for tick in 1..=opts.max_ticks {
        controller.tick(opts.tick_ms);
        if tick % opts.move_every.max(1) != 0 {
            continue;
        }

        let legal: Vec<Direction> = controller
            .legal_directions()
            .into_iter()
            .map(|p| p.direction)
            .collect();
        let blunder = picker.next_float() < opts.blunder_rate;
        let direction = if blunder || legal.is_empty() {
            picker.pick_or(&Direction::ALL, Direction::Up)
        } else {
            picker.pick_or(&legal, Direction::Up)
        };

        if let Some(verdict) = controller.attempt_move(direction) {
            metrics.record_attempt(verdict.rejection().map(|r| r.id));
        }
        if !controller.is_running() {
            break;
        }
    }

    if controller.is_running() {
        tracing::warn!(seed, max_ticks = opts.max_ticks, "Run hit the tick cap, abandoning");
        controller.stop(EndReason::Abandoned);
    }
    controller.drain_events();
    let summary = controller.summary().cloned();
    if let Some(summary) = &summary {
        metrics.record_run_end(summary);
    }
    summary
}

/// Consecutive seeds from `opts.seed`, or random ones.
pub fn run_headless(
    config: &AppConfig,
    opts: &HeadlessOptions,
    metrics: &SessionMetrics,
) -> Vec<RunSummary> {
    let mut controller = RunController::new(config);
    (0..opts.runs)
        .filter_map(|i| {
            let seed = match opts.seed {
                Some(seed) => seed.wrapping_add(i),
                None => rand::random::<u32>(),
            };
            play_run(&mut controller, seed, opts, metrics)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_runs_are_reproducible() {
        let config = AppConfig::default();
        let opts = HeadlessOptions {
            seed: Some(42),
            runs: 2,
            ..Default::default()
        };
        let a = run_headless(&config, &opts, &SessionMetrics::new());
        let b = run_headless(&config, &opts, &SessionMetrics::new());
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].seed, 42);
        assert_eq!(a[1].seed, 43);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.run_hash, y.run_hash);
            assert_eq!(x.score, y.score);
            assert_eq!(x.end_reason, y.end_reason);
        }
    }

    #[test]
    fn test_tick_cap_abandons_run() {
        let opts = HeadlessOptions {
            seed: Some(3),
            max_ticks: 5,
            move_every: 1000,
            ..Default::default()
        };
        let metrics = SessionMetrics::new();
        let runs = run_headless(&AppConfig::default(), &opts, &metrics);
        assert_eq!(runs[0].end_reason, EndReason::Abandoned);
        assert_eq!(runs[0].moves, 0);
        assert_eq!(metrics.runs_started(), 1);
    }
}
