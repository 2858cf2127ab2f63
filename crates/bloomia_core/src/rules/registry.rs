use bloomia_data::RuleId;

/// Rulebook entry shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDoc {
    pub id: RuleId,
    pub label: &'static str,
    pub description: &'static str,
}

pub const RULE_DOCS: [RuleDoc; 9] = [
    RuleDoc {
        id: RuleId::Boundary,
        label: "stay inside bounds",
        description: "Your destination must remain inside the play area (a fixed margin from the edges).",
    },
    RuleDoc {
        id: RuleId::NoShortCycle,
        label: "no 4-step cycle",
        description: "After the first 4 moves, you can't land exactly where you were 4 moves ago (stops looping like up, right, down, left).",
    },
    RuleDoc {
        id: RuleId::AvoidEdges,
        label: "avoid edges",
        description: "Your destination must stay at least N pixels away from the nearest edge (N can tighten later).",
    },
    RuleDoc {
        id: RuleId::AlternateAxis,
        label: "alternate axis",
        description: "Horizontal moves must alternate with vertical moves (the first move is always allowed).",
    },
    RuleDoc {
        id: RuleId::NoReversal,
        label: "no immediate reversal",
        description: "You cannot immediately reverse direction (left/right, up/down).",
    },
    RuleDoc {
        id: RuleId::Momentum,
        label: "momentum",
        description: "Repeating the same direction too many times becomes invalid (a max-repeat cap).",
    },
    RuleDoc {
        id: RuleId::AxisBalance,
        label: "axis balance",
        description: "In the last W moves, horizontal and vertical counts must stay close (difference must be at most D). With W=8 and D=2 your last 8 moves can't split worse than 5 to 3.",
    },
    RuleDoc {
        id: RuleId::LocalDensityAxis,
        label: "dense area axis lock",
        description: "If your destination is inside a dense orb cluster (at least T within radius R), one axis is locked and only the other axis is allowed.",
    },
    RuleDoc {
        id: RuleId::OrbParity,
        label: "orb parity",
        description: "Look at the 5 closest orbs within the radius at your destination: rings count as 0, dots count as 1. On move #1/#3/#5 the dot count must be odd, on move #2/#4/#6 it must be even.",
    },
];

pub fn doc_for(id: RuleId) -> Option<&'static RuleDoc> {
    RULE_DOCS.iter().find(|doc| doc.id == id)
}
