pub mod macros;

use bloomia_core::plan::RulePlan;
use bloomia_core::XorShiftRng;
use bloomia_data::RuleId;
use bloomia_lib::model::config::AppConfig;
use bloomia_lib::model::RunController;

#[allow(dead_code)]
pub struct RunBuilder {
    config: AppConfig,
    seed: u32,
    width: f64,
    height: f64,
}

#[allow(dead_code)]
impl RunBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            seed: 1,
            width: 640.0,
            height: 480.0,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// A running controller with the start events already drained.
    pub fn build(self) -> RunController {
        let mut ctl = RunController::new(&self.config);
        ctl.restart(self.seed, self.width, self.height);
        ctl.drain_events();
        ctl
    }
}

/// First seed in `1..10_000` whose rule plan satisfies `pred`.
#[allow(dead_code)]
pub fn first_seed_with_plan<F>(pred: F) -> u32
where
    F: Fn(&[RuleId]) -> bool,
{
    (1..10_000)
        .find(|&seed| {
            let plan = RulePlan::generate(&mut XorShiftRng::rules_stream(seed));
            pred(&plan.ids())
        })
        .expect("no seed in range has the requested plan")
}
