mod common;

use bloomia_core::field::{Field, NeighborhoodStats, ParitySample};
use bloomia_core::plan::RulePlan;
use bloomia_core::run::run_hash;
use bloomia_core::{Rule, XorShiftRng};
use bloomia_data::{Direction, MoveAttempt, RuleId};
use bloomia_lib::model::config::{AppConfig, FieldConfig};
use bloomia_lib::model::RunController;
use common::RunBuilder;

const SCRIPT: [Direction; 10] = [
    Direction::Up,
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Left,
];

fn play_script(ctl: &mut RunController) {
    for dir in SCRIPT {
        for _ in 0..5 {
            ctl.tick(16.0);
        }
        ctl.attempt_move(dir);
    }
    ctl.stop(bloomia_data::EndReason::Abandoned);
}

#[test]
fn test_prng_streams_repeat_per_seed() {
    let mut a = XorShiftRng::new(99);
    let mut b = XorShiftRng::new(99);
    for _ in 0..1_000 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
    for _ in 0..100 {
        assert_eq!(a.next_float(), b.next_float());
        assert_eq!(a.pick(&[1, 2, 3]), b.pick(&[1, 2, 3]));
    }
}

#[test]
fn test_field_determinism_for_seed_and_size() {
    let config = FieldConfig::default();
    let a = Field::create(&mut XorShiftRng::new(2024), 800.0, 600.0, &config);
    let b = Field::create(&mut XorShiftRng::new(2024), 800.0, 600.0, &config);
    assert_eq!(a.particles(), b.particles());

    let c = Field::create(&mut XorShiftRng::new(2025), 800.0, 600.0, &config);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn test_plan_determinism_for_seed() {
    for seed in [0, 1, 7, 123_456, u32::MAX] {
        let a = RulePlan::generate(&mut XorShiftRng::rules_stream(seed));
        let b = RulePlan::generate(&mut XorShiftRng::rules_stream(seed));
        assert_eq!(a.ids(), b.ids(), "seed {seed}");
        assert_eq!(a.orb_parity_radius(), b.orb_parity_radius());
    }
}

fn plan_labels(seed: u32) -> Vec<String> {
    RulePlan::generate(&mut XorShiftRng::rules_stream(seed))
        .entries()
        .iter()
        .map(|e| e.rule.label().to_string())
        .collect()
}

fn field_640x480(seed: u32) -> Field {
    Field::create(
        &mut XorShiftRng::new(seed),
        640.0,
        480.0,
        &FieldConfig::default(),
    )
}

#[test]
fn test_seed_1_plan_matches_reference_order() {
    assert_eq!(
        plan_labels(1),
        vec![
            "no immediate reversal",
            "axis balance (last 8: diff ≤ 2)",
            "momentum (max 2 repeats)",
            "avoid edges (50px)",
            "orb parity (within 140px): match move #",
            "dense area (≥7 within 110px): no horizontal",
            "alternate axis",
        ]
    );
}

#[test]
fn test_seed_42_plan_matches_reference_order() {
    let labels = plan_labels(42);
    assert_eq!(labels.len(), 7);
    assert_eq!(labels[0], "orb parity (within 140px): match move #");
    assert_eq!(labels[1], "avoid edges (50px)");
}

#[test]
fn test_seed_1_field_matches_reference_layout() {
    let field = field_640x480(1);
    assert_eq!(
        field.stats_near(320.0, 240.0, 130.0),
        NeighborhoodStats {
            count: 4,
            parity_sum: 2,
            phase_counts: [1, 0, 3],
            dominant_phase: 2,
        }
    );
    assert_eq!(
        field.parity_at(320.0, 240.0, 140.0, 5),
        ParitySample {
            in_radius: 6,
            nearest_used: 5,
            parity_sum_nearest: 2,
        }
    );
}

#[test]
fn test_seed_42_field_matches_reference_layout() {
    let field = field_640x480(42);
    assert_eq!(
        field.stats_near(320.0, 240.0, 130.0),
        NeighborhoodStats {
            count: 5,
            parity_sum: 2,
            phase_counts: [3, 2, 0],
            dominant_phase: 0,
        }
    );
    assert_eq!(
        field.parity_at(320.0, 240.0, 140.0, 5),
        ParitySample {
            in_radius: 8,
            nearest_used: 5,
            parity_sum_nearest: 2,
        }
    );
}

#[test]
fn test_scripted_runs_share_a_hash() {
    let mut a = RunBuilder::new().with_seed(31337).build();
    let mut b = RunBuilder::new().with_seed(31337).build();
    play_script(&mut a);
    play_script(&mut b);

    let sa = a.summary().expect("run a ended");
    let sb = b.summary().expect("run b ended");
    assert_ne!(sa.run_id, sb.run_id);
    assert_eq!(sa.run_hash, sb.run_hash);
    assert_eq!(sa.score, sb.score);
    assert_eq!(sa.valid_moves, sb.valid_moves);
    assert_eq!(sa.duration_ms, sb.duration_ms);
    assert_eq!(a.state().trail.len(), b.state().trail.len());
}

#[test]
fn test_hash_covers_seed_rules_and_moves() {
    let moves = vec![
        MoveAttempt::new(0, Direction::Up, true),
        MoveAttempt::new(16, Direction::Left, false),
    ];
    let rules = [RuleId::AlternateAxis, RuleId::NoReversal];
    let base = run_hash(1, &rules, &moves).expect("hash");
    assert_eq!(
        base,
        "d793a90d486ab140391f8e6f745b7a09894ca6d40ec941f5cfe6e11008b7a99c"
    );
    assert_ne!(run_hash(2, &rules, &moves).expect("hash"), base);
    assert_ne!(run_hash(1, &rules[..1], &moves).expect("hash"), base);
    assert_ne!(run_hash(1, &rules, &moves[..1]).expect("hash"), base);
}

#[test]
fn test_config_fingerprint_tracks_gameplay_only() {
    let a = AppConfig::default();
    let mut b = AppConfig::default();
    b.display.target_fps = 30;
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.run.stability_budget = 3;
    assert_ne!(a.fingerprint(), b.fingerprint());
}
