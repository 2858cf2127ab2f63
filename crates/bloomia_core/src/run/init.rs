use super::{RunController, RunEvent, RunState};
use crate::field::Field;
use crate::plan::RulePlan;
use crate::rng::XorShiftRng;
use crate::trail::Trail;
use bloomia_data::{Point, RunPhase};
use uuid::Uuid;

impl RunController {
    /// Starts a new run with a random seed and returns that seed.
    pub fn restart_random(&mut self, width: f64, height: f64) -> u32 {
        let seed = rand::random::<u32>();
        self.restart(seed, width, height);
        seed
    }

    /// Starts a new run from `seed`, discarding whatever state came before.
    ///
    /// The field is drawn from `seed` and the plan from the salted rule
    /// stream, so a seed and a field size fully determine the layout.
    pub fn restart(&mut self, seed: u32, width: f64, height: f64) {
        let mut rng = XorShiftRng::new(seed);
        let mut rules_rng = XorShiftRng::rules_stream(seed);
        let field = Field::create(&mut rng, width, height, &self.field_config);
        let plan = RulePlan::generate(&mut rules_rng);
        let engine = plan.engine_for_stage(0, &self.config);

        let start = Point::new(width * 0.5, height * 0.5);
        let run_id = Uuid::new_v4();

        let mut state = RunState::idle(self.config.trail_capacity);
        state.run_id = run_id;
        state.seed = seed;
        state.phase = RunPhase::Running;
        state.rng = rng;
        state.rules_rng = rules_rng;
        state.width = width;
        state.height = height;
        state.player = start;
        state.target = start;
        state.stability = self.config.stability_budget;
        state.trail = Trail::starting_at(start, self.config.trail_capacity);
        state.field = field;
        state.plan = plan;
        state.engine = engine;
        self.state = state;

        tracing::info!(
            run_id = %run_id,
            seed = seed,
            width = width,
            height = height,
            plan = ?self.state.plan.ids(),
            "Run started"
        );
        self.emit(RunEvent::RunStarted { run_id, seed });
    }
}
