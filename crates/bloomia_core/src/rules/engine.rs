use super::{Rule, RuleContext, Verdict};
use bloomia_data::{RuleId, RuleInfo};
use std::sync::Arc;

/// Ordered rule stack. The first rejecting rule decides.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn push(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        for rule in &self.rules {
            let verdict = rule.check(ctx);
            if !verdict.is_accept() {
                return verdict;
            }
        }
        Verdict::Accept
    }

    pub fn list(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id(),
                label: r.label().to_string(),
            })
            .collect()
    }

    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
