use super::{Rule, RuleContext, Verdict};
use bloomia_data::RuleId;

/// Destination must stay within `[m, dim - m]` on both axes.
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    margin: f64,
}

impl BoundaryRule {
    pub fn new(margin: f64) -> Self {
        Self {
            margin: margin.trunc().max(0.0),
        }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }
}

impl Rule for BoundaryRule {
    fn id(&self) -> RuleId {
        RuleId::Boundary
    }

    fn label(&self) -> &str {
        "stay inside bounds"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        let m = self.margin;
        let inside = ctx.to.x >= m
            && ctx.to.y >= m
            && ctx.to.x <= ctx.width - m
            && ctx.to.y <= ctx.height - m;
        if inside {
            Verdict::Accept
        } else {
            Verdict::reject(RuleId::Boundary, "boundary")
        }
    }
}

/// Destination must keep at least `min_edge` pixels from every border.
#[derive(Debug, Clone)]
pub struct AvoidEdgesRule {
    min_edge: u32,
    label: String,
}

impl AvoidEdgesRule {
    pub fn new(min_edge: u32) -> Self {
        Self {
            min_edge,
            label: format!("avoid edges ({min_edge}px)"),
        }
    }

    pub fn min_edge(&self) -> u32 {
        self.min_edge
    }
}

impl Rule for AvoidEdgesRule {
    fn id(&self) -> RuleId {
        RuleId::AvoidEdges
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        let d = ctx
            .to
            .x
            .min(ctx.to.y)
            .min(ctx.width - ctx.to.x)
            .min(ctx.height - ctx.to.y);
        if d < f64::from(self.min_edge) {
            Verdict::reject(RuleId::AvoidEdges, "avoid edges")
        } else {
            Verdict::Accept
        }
    }
}
