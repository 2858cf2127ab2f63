//! Per-run rule plan: which advanced rules unlock, in which order, with
//! which parameters.

use crate::config::RunConfig;
use crate::rng::XorShiftRng;
use crate::rules::{
    AlternateAxisRule, AvoidEdgesRule, AxisBalanceRule, BoundaryRule, LocalDensityAxisRule,
    MomentumRule, NoReversalRule, NoShortCycleRule, OrbParityRule, Rule, RuleEngine,
};
use bloomia_data::{Axis, RuleId};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub id: RuleId,
    pub rule: Arc<dyn Rule>,
}

impl PlanEntry {
    fn new<R: Rule + 'static>(rule: R) -> Self {
        Self {
            id: rule.id(),
            rule: Arc::new(rule),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RulePlan {
    entries: Vec<PlanEntry>,
    orb_parity_radius: u32,
}

impl RulePlan {
    /// Builds the plan from the rule stream.
    ///
    /// Parameters are drawn before the shuffle, in a fixed order, so a seed
    /// always yields the same plan.
    pub fn generate(rng: &mut XorShiftRng) -> Self {
        let orb_parity_radius = rng.pick_or(&[140, 170], 140);
        let max_repeat = rng.pick_or(&[2, 2, 3], 2);
        let window = rng.pick_or(&[6, 7, 8], 7);
        let max_delta = rng.pick_or(&[1, 2], 2);
        let min_edge = rng.pick_or(&[50, 60, 70], 60);
        let density_radius = rng.pick_or(&[110, 130, 150], 130);
        let density_threshold = rng.pick_or(&[6, 7, 8], 7);
        let forbid_axis = rng.pick_or(&[Axis::Horizontal, Axis::Vertical], Axis::Horizontal);

        let mut entries = vec![
            PlanEntry::new(AlternateAxisRule::new()),
            PlanEntry::new(NoReversalRule::new()),
            PlanEntry::new(MomentumRule::new(max_repeat)),
            PlanEntry::new(AxisBalanceRule::new(window, max_delta)),
            PlanEntry::new(AvoidEdgesRule::new(min_edge)),
            PlanEntry::new(LocalDensityAxisRule::new(
                density_radius,
                density_threshold,
                forbid_axis,
            )),
            PlanEntry::new(OrbParityRule::new(orb_parity_radius)),
        ];

        for i in (1..entries.len()).rev() {
            let j = (rng.next_float() * (i + 1) as f64).floor() as usize;
            entries.swap(i, j.min(i));
        }

        Self {
            entries,
            orb_parity_radius,
        }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn ids(&self) -> Vec<RuleId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Radius shared by the orb-parity rule, hints and the HUD readout.
    pub fn orb_parity_radius(&self) -> u32 {
        self.orb_parity_radius
    }

    /// Baseline rules, then the first `stage` plan entries, then the late
    /// edge rule when the stage calls for it and no edge rule is active yet.
    pub fn engine_for_stage(&self, stage: usize, config: &RunConfig) -> RuleEngine {
        let mut engine = RuleEngine::new(vec![
            Arc::new(BoundaryRule::new(config.boundary_margin)),
            Arc::new(NoShortCycleRule::new(config.cycle_period)),
        ]);
        for entry in self.entries.iter().take(stage.min(self.entries.len())) {
            engine.push(entry.rule.clone());
        }
        if stage >= config.late_edge_stage && !engine.contains(RuleId::AvoidEdges) {
            engine.push(Arc::new(AvoidEdgesRule::new(config.late_edge_margin)));
        }
        engine
    }
}
