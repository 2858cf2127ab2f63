use super::{Rule, RuleContext, Verdict};
use bloomia_data::RuleId;

/// Refuses landing on the pixel visited `period` accepted moves ago.
#[derive(Debug, Clone)]
pub struct NoShortCycleRule {
    period: usize,
    label: String,
}

impl NoShortCycleRule {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            label: format!("no {period}-step cycle"),
        }
    }
}

impl Rule for NoShortCycleRule {
    fn id(&self) -> RuleId {
        RuleId::NoShortCycle
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        if self.period <= 1 || ctx.accepted.len() < self.period {
            return Verdict::Accept;
        }
        let Some(idx) = ctx.trail.len().checked_sub(self.period) else {
            return Verdict::Accept;
        };
        match ctx.trail.get(idx) {
            Some(earlier) if ctx.to.same_pixel(earlier) => {
                Verdict::reject(RuleId::NoShortCycle, "no short cycle")
            }
            _ => Verdict::Accept,
        }
    }
}
