//! Rules coupled to the orb field around the destination.

use super::{Rule, RuleContext, Verdict};
use bloomia_data::{Axis, RuleId};

/// Neighbours sampled by [`OrbParityRule`].
pub const ORB_PARITY_NEAREST: usize = 5;

/// Inside a dense cluster one axis is locked.
#[derive(Debug, Clone)]
pub struct LocalDensityAxisRule {
    radius: u32,
    threshold: usize,
    forbid_axis: Axis,
    label: String,
}

impl LocalDensityAxisRule {
    pub fn new(radius: u32, threshold: usize, forbid_axis: Axis) -> Self {
        Self {
            radius,
            threshold,
            forbid_axis,
            label: format!(
                "dense area (≥{threshold} within {radius}px): no {}",
                forbid_axis.label()
            ),
        }
    }
}

impl Rule for LocalDensityAxisRule {
    fn id(&self) -> RuleId {
        RuleId::LocalDensityAxis
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        let stats = ctx
            .field
            .stats_near(ctx.to.x, ctx.to.y, f64::from(self.radius));
        if stats.count >= self.threshold && ctx.direction.axis() == self.forbid_axis {
            Verdict::reject(RuleId::LocalDensityAxis, "density axis")
        } else {
            Verdict::Accept
        }
    }
}

/// Odd-numbered moves need an odd dot count among the nearest orbs at the
/// destination, even-numbered moves an even one.
#[derive(Debug, Clone)]
pub struct OrbParityRule {
    radius: u32,
    label: String,
}

impl OrbParityRule {
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            label: format!("orb parity (within {radius}px): match move #"),
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

fn parity_word(bit: u32) -> &'static str {
    if bit == 1 {
        "odd"
    } else {
        "even"
    }
}

impl Rule for OrbParityRule {
    fn id(&self) -> RuleId {
        RuleId::OrbParity
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        let sample = ctx.field.parity_at(
            ctx.to.x,
            ctx.to.y,
            f64::from(self.radius),
            ORB_PARITY_NEAREST,
        );
        let expected = (ctx.move_index & 1) as u32;
        let actual = sample.parity_sum_nearest & 1;
        if actual == expected {
            return Verdict::Accept;
        }
        Verdict::reject(
            RuleId::OrbParity,
            format!(
                "orb parity: need {} (move #{}), got {} (dots {}/{})",
                parity_word(expected),
                ctx.move_index,
                parity_word(actual),
                sample.parity_sum_nearest,
                sample.nearest_used
            ),
        )
    }
}
