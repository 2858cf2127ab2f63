//! Rules that look only at the accepted move history.

use super::{Rule, RuleContext, Verdict};
use bloomia_data::{Axis, RuleId};

#[derive(Debug, Clone, Default)]
pub struct AlternateAxisRule;

impl AlternateAxisRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AlternateAxisRule {
    fn id(&self) -> RuleId {
        RuleId::AlternateAxis
    }

    fn label(&self) -> &str {
        "alternate axis"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        match ctx.last_accepted() {
            Some(last) if last.dir.axis() == ctx.direction.axis() => {
                Verdict::reject(RuleId::AlternateAxis, "alternate axis")
            }
            _ => Verdict::Accept,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoReversalRule;

impl NoReversalRule {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoReversalRule {
    fn id(&self) -> RuleId {
        RuleId::NoReversal
    }

    fn label(&self) -> &str {
        "no immediate reversal"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        match ctx.last_accepted() {
            Some(last) if last.dir.opposite() == ctx.direction => {
                Verdict::reject(RuleId::NoReversal, "no immediate reversal")
            }
            _ => Verdict::Accept,
        }
    }
}

/// Caps how many times in a row the same direction may be accepted.
#[derive(Debug, Clone)]
pub struct MomentumRule {
    max_repeat: u32,
    label: String,
}

impl MomentumRule {
    pub fn new(max_repeat: u32) -> Self {
        Self {
            max_repeat,
            label: format!("momentum (max {max_repeat} repeats)"),
        }
    }
}

impl Rule for MomentumRule {
    fn id(&self) -> RuleId {
        RuleId::Momentum
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        if self.max_repeat == 0 {
            return Verdict::Accept;
        }
        let streak = ctx
            .accepted
            .iter()
            .rev()
            .take_while(|m| m.dir == ctx.direction)
            .count();
        if streak >= self.max_repeat as usize {
            Verdict::reject(RuleId::Momentum, "momentum")
        } else {
            Verdict::Accept
        }
    }
}

/// Over the last `window` moves (candidate included) the horizontal and
/// vertical counts may differ by at most `max_delta`.
#[derive(Debug, Clone)]
pub struct AxisBalanceRule {
    window: usize,
    max_delta: usize,
    label: String,
}

impl AxisBalanceRule {
    pub fn new(window: usize, max_delta: usize) -> Self {
        Self {
            window,
            max_delta,
            label: format!("axis balance (last {window}: diff ≤ {max_delta})"),
        }
    }
}

impl Rule for AxisBalanceRule {
    fn id(&self) -> RuleId {
        RuleId::AxisBalance
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Verdict {
        if self.window <= 1 {
            return Verdict::Accept;
        }
        let keep = self.window - 1;
        let recent = &ctx.accepted[ctx.accepted.len().saturating_sub(keep)..];

        let (mut h, mut v) = (0usize, 0usize);
        for axis in recent
            .iter()
            .map(|m| m.dir.axis())
            .chain(std::iter::once(ctx.direction.axis()))
        {
            match axis {
                Axis::Horizontal => h += 1,
                Axis::Vertical => v += 1,
            }
        }

        if h.abs_diff(v) > self.max_delta {
            Verdict::reject(RuleId::AxisBalance, "axis balance")
        } else {
            Verdict::Accept
        }
    }
}
