use bloomia_core::field::Field;
use bloomia_core::rules::{
    AlternateAxisRule, BoundaryRule, MomentumRule, NoReversalRule, OrbParityRule, Rule,
    RuleContext, RuleEngine,
};
use bloomia_core::trail::Trail;
use bloomia_data::{Direction, Move, Particle, Point, RuleId};
use std::sync::Arc;

struct Scene {
    field: Field,
    trail: Trail,
    accepted: Vec<Move>,
    from: Point,
}

impl Scene {
    fn new() -> Self {
        let from = Point::new(320.0, 240.0);
        Self {
            field: Field::from_particles(640.0, 480.0, Vec::new()),
            trail: Trail::starting_at(from, 96),
            accepted: Vec::new(),
            from,
        }
    }

    fn with_history(mut self, dirs: &[Direction]) -> Self {
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

    fn ctx(&self, direction: Direction) -> RuleContext<'_> {
        RuleContext {
            direction,
            from: self.from,
            to: self.from.offset(direction, 54.0),
            now_ms: 0.0,
            started_at_ms: 0.0,
            accepted: &self.accepted,
            trail: &self.trail,
            stage: 0,
            width: 640.0,
            height: 480.0,
            field: &self.field,
            move_index: self.accepted.len() + 1,
        }
    }
}

#[test]
fn test_first_move_passes_history_rules() {
    let scene = Scene::new();
    let ctx = scene.ctx(Direction::Up);
    assert!(AlternateAxisRule::new().check(&ctx).is_accept());
    assert!(NoReversalRule::new().check(&ctx).is_accept());
    assert!(MomentumRule::new(2).check(&ctx).is_accept());
}

#[test]
fn test_momentum_blocks_third_repeat() {
    let scene = Scene::new().with_history(&[Direction::Right, Direction::Right]);
    let verdict = MomentumRule::new(2).check(&scene.ctx(Direction::Right));
    assert_eq!(verdict.rejection().map(|r| r.id), Some(RuleId::Momentum));
    assert!(MomentumRule::new(2)
        .check(&scene.ctx(Direction::Up))
        .is_accept());
}

#[test]
fn test_orb_parity_even_sum_on_odd_move() {
    let mut scene = Scene::new();
    let dest = scene.from.offset(Direction::Up, 54.0);
    scene.field = Field::from_particles(
        640.0,
        480.0,
        vec![
            Particle::at(dest.x + 5.0, dest.y, 0, 1),
            Particle::at(dest.x - 5.0, dest.y, 1, 1),
            Particle::at(dest.x, dest.y + 8.0, 2, 0),
        ],
    );
    let verdict = OrbParityRule::new(140).check(&scene.ctx(Direction::Up));
    let rejection = verdict.rejection().expect("even sum on move #1 must fail");
    assert_eq!(rejection.id, RuleId::OrbParity);
    assert!(rejection.label.contains("need odd"), "{}", rejection.label);
}

#[test]
fn test_engine_reports_first_failure_only() {
    let mut scene = Scene::new().with_history(&[Direction::Up, Direction::Up]);
    scene.from = Point::new(320.0, 40.0);

    let engine = RuleEngine::new(vec![
        Arc::new(BoundaryRule::new(26.0)) as Arc<dyn Rule>,
        Arc::new(MomentumRule::new(2)),
        Arc::new(AlternateAxisRule::new()),
    ]);
    let verdict = engine.evaluate(&scene.ctx(Direction::Up));
    assert_eq!(verdict.rejection().map(|r| r.id), Some(RuleId::Boundary));

    let reordered = RuleEngine::new(vec![
        Arc::new(AlternateAxisRule::new()) as Arc<dyn Rule>,
        Arc::new(BoundaryRule::new(26.0)),
    ]);
    let verdict = reordered.evaluate(&scene.ctx(Direction::Up));
    assert_eq!(verdict.rejection().map(|r| r.id), Some(RuleId::AlternateAxis));
}

