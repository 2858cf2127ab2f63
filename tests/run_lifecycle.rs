mod common;

use bloomia_data::{Direction, EndReason, RuleId, RunPhase};
use bloomia_lib::model::{RunController, RunEvent};
use common::{first_seed_with_plan, RunBuilder};

/// Clockwise-free square that never revisits the spot four moves back.
const SQUARE: [Direction; 12] = [
    Direction::Right,
    Direction::Right,
    Direction::Right,
    Direction::Up,
    Direction::Up,
    Direction::Up,
    Direction::Left,
    Direction::Left,
    Direction::Left,
    Direction::Down,
    Direction::Down,
    Direction::Down,
];

fn baseline_only() -> RunController {
    RunBuilder::new()
        .with_config(|c| c.run.moves_per_stage = 10_000)
        .build()
}

#[test]
fn test_invalid_move_with_last_stability_ends_run() {
    let mut ctl = RunBuilder::new()
        .with_size(100.0, 100.0)
        .with_config(|c| c.run.stability_budget = 1)
        .build();

    assert_rejected_by!(ctl.attempt_move(Direction::Up), RuleId::Boundary);
    assert_phase!(ctl, RunPhase::Ended(EndReason::Stability));
    assert_eq!(ctl.state().stability, 0);

    let summary = ctl.summary().expect("summary after end");
    assert_eq!(summary.end_reason, EndReason::Stability);
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.invalid_moves, 1);
    assert_eq!(summary.accuracy, 0.0);

    let events = ctl.drain_events();
    assert!(matches!(
        events.as_slice(),
        [RunEvent::MoveRejected { rule: RuleId::Boundary, .. }, RunEvent::RunEnded(_)]
    ));

    assert!(ctl.attempt_move(Direction::Down).is_none());
    assert!(ctl.request_hint().is_none());
}

#[test]
fn test_boxed_in_after_accept_is_dead_end() {
    let seed = first_seed_with_plan(|ids| {
        matches!(ids[0], RuleId::AlternateAxis | RuleId::NoReversal)
    });
    let mut ctl = RunBuilder::new()
        .with_seed(seed)
        .with_size(108.0, 200.0)
        .with_config(|c| c.run.moves_per_stage = 1)
        .build();

    assert_accepted!(ctl.attempt_move(Direction::Up));
    assert_phase!(ctl, RunPhase::Ended(EndReason::DeadEnd));
    assert_eq!(ctl.state().stage, 1);
    assert_eq!(ctl.state().stability, 8);
    assert_eq!(ctl.summary().map(|s| s.valid_moves), Some(1));
}

#[test]
fn test_stop_only_from_running() {
    let mut idle = RunController::new(&Default::default());
    assert!(idle.stop(EndReason::Abandoned).is_none());
    assert_phase!(idle, RunPhase::Idle);

    let mut ctl = baseline_only();
    ctl.attempt_move(Direction::Right);
    ctl.attempt_move(Direction::Right);
    ctl.tick(500.0);
    let summary = ctl.stop(EndReason::Abandoned).cloned().expect("running run stops");
    assert_eq!(summary.duration_ms, 500);
    assert_eq!(summary.valid_moves, 2);
    assert_eq!(summary.accuracy, 1.0);
    assert_eq!(summary.active_rules.len(), 2);

    assert!(ctl.stop(EndReason::Stability).is_none());
    assert_eq!(ctl.summary().map(|s| s.end_reason), Some(EndReason::Abandoned));
}

#[test]
fn test_accuracy_counts_rejections() {
    let mut ctl = RunBuilder::new()
        .with_size(100.0, 400.0)
        .with_config(|c| c.run.moves_per_stage = 10_000)
        .build();
    assert_accepted!(ctl.attempt_move(Direction::Up));
    assert_rejected_by!(ctl.attempt_move(Direction::Left), RuleId::Boundary);
    assert_accepted!(ctl.attempt_move(Direction::Down));
    let summary = ctl.stop(EndReason::Abandoned).cloned().expect("summary");
    assert_eq!(summary.moves, 3);
    assert!((summary.accuracy - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(ctl.state().attempts.len(), 3);
    assert_eq!(ctl.state().accepted.len(), 2);
}

#[test]
fn test_trail_keeps_last_96_points() {
    let mut ctl = baseline_only();
    for dir in SQUARE.iter().cycle().take(120) {
        assert_accepted!(ctl.attempt_move(*dir));
    }
    let state = ctl.state();
    assert_eq!(state.trail.len(), 96);
    assert_eq!(state.trail.last(), Some(state.target.rounded()));
    assert_eq!(state.score, 1200);
    assert_eq!(state.valid_moves, 120);
}

#[test]
fn test_stage_advances_every_n_valid_moves() {
    let seed = first_seed_with_plan(|ids| ids[0] != RuleId::OrbParity);
    let mut ctl = RunBuilder::new()
        .with_seed(seed)
        .with_config(|c| c.run.moves_per_stage = 3)
        .build();
    for _ in 0..3 {
        assert_accepted!(ctl.attempt_move(Direction::Right));
    }
    assert_eq!(ctl.state().stage, 1);
    assert_eq!(ctl.state().engine.len(), 3);
    let events = ctl.drain_events();
    assert!(events.contains(&RunEvent::StageChanged { from: 0, to: 1 }));
}

#[test]
fn test_hint_pins_tension_for_three_moves() {
    let mut ctl = baseline_only();
    let hint = ctl.request_hint().expect("hint while running");
    assert_eq!(hint.penalty_moves, 3);
    assert_eq!(hint.directions.len(), 4);
    assert!(hint.directions.iter().all(|d| d.nearest <= 5));
    assert_eq!(ctl.state().tension, 1.0);
    assert_eq!(ctl.step_size(), 28.0);

    for remaining in [2, 1, 0] {
        assert_accepted!(ctl.attempt_move(Direction::Right));
        assert_eq!(ctl.state().hint_penalty_remaining, remaining);
        assert_eq!(ctl.state().tension, 1.0);
    }
    assert_accepted!(ctl.attempt_move(Direction::Up));
    assert!((ctl.state().tension - 0.988).abs() < 1e-12);
    assert_eq!(ctl.state().max_tension, 1.0);
}

#[test]
fn test_restart_after_end_resets_counters() {
    let mut ctl = RunBuilder::new()
        .with_size(100.0, 100.0)
        .with_config(|c| c.run.stability_budget = 1)
        .build();
    ctl.attempt_move(Direction::Up);
    assert_phase!(ctl, RunPhase::Ended(EndReason::Stability));

    ctl.restart(9, 640.0, 480.0);
    assert_phase!(ctl, RunPhase::Running);
    let state = ctl.state();
    assert_eq!(state.stability, 1);
    assert_eq!(state.valid_moves + state.invalid_moves, 0);
    assert!(state.summary.is_none());
    assert!(ctl.summary().is_none());
}

#[test]
fn test_ticks_drift_tension_while_running() {
    let mut ctl = baseline_only();
    ctl.tick(1_000.0);
    assert!((ctl.state().tension - 0.0012).abs() < 1e-12);
    assert_eq!(ctl.state().clock_ms, 1_000.0);
}
