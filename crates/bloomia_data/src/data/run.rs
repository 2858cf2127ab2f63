use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a catalog rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Boundary,
    NoShortCycle,
    AvoidEdges,
    AlternateAxis,
    #[serde(rename = "no_reversal")]
    NoReversal,
    Momentum,
    AxisBalance,
    LocalDensityAxis,
    OrbParity,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::Boundary => "boundary",
            RuleId::NoShortCycle => "no_short_cycle",
            RuleId::AvoidEdges => "avoid_edges",
            RuleId::AlternateAxis => "alternate_axis",
            RuleId::NoReversal => "no_reversal",
            RuleId::Momentum => "momentum",
            RuleId::AxisBalance => "axis_balance",
            RuleId::LocalDensityAxis => "local_density_axis",
            RuleId::OrbParity => "orb_parity",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and display label of an active rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: RuleId,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Failed moves used up the stability budget.
    Stability,
    /// No direction validates from the current position.
    DeadEnd,
    /// The player left while the run was still going.
    Abandoned,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EndReason::Stability => "stability",
            EndReason::DeadEnd => "dead_end",
            EndReason::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Ended(EndReason),
}

impl RunPhase {
    pub fn is_running(self) -> bool {
        matches!(self, RunPhase::Running)
    }

    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            RunPhase::Ended(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Everything the scoreboard needs to know about a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub seed: u32,
    pub score: u64,
    pub duration_ms: u64,
    pub moves: u32,
    pub valid_moves: u32,
    pub invalid_moves: u32,
    pub accuracy: f64,
    pub stage: usize,
    pub max_tension: f64,
    pub end_reason: EndReason,
    pub active_rules: Vec<RuleInfo>,
    pub run_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_serde_matches_as_str() {
        for id in [
            RuleId::Boundary,
            RuleId::NoShortCycle,
            RuleId::AvoidEdges,
            RuleId::AlternateAxis,
            RuleId::NoReversal,
            RuleId::Momentum,
            RuleId::AxisBalance,
            RuleId::LocalDensityAxis,
            RuleId::OrbParity,
        ] {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_run_phase_helpers() {
        assert!(RunPhase::Running.is_running());
        assert_eq!(
            RunPhase::Ended(EndReason::DeadEnd).end_reason(),
            Some(EndReason::DeadEnd)
        );
        assert_eq!(RunPhase::Idle.end_reason(), None);
    }
}
