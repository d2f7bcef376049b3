//! The fixed, read-only registry of fix rules.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::{FixError, Result};
use crate::rule::FixRule;
use crate::transforms::BUILTIN_RULES;

// Built once on first use; every lookup after that only reads.
static BUILTIN_REGISTRY: Lazy<FixRegistry> = Lazy::new(|| {
    FixRegistry::new(BUILTIN_RULES).unwrap_or_else(|e| panic!("invalid built-in fix rules: {}", e))
});

/// Ordered set of [`FixRule`]s keyed by rule id.
///
/// Construction rejects duplicate ids; there is no way to add or remove
/// rules afterwards.
#[derive(Debug, Clone, Default)]
pub struct FixRegistry {
    rules: IndexMap<&'static str, FixRule>,
}

impl FixRegistry {
    /// Build a registry, keeping the given order.
    ///
    /// Fails with [`FixError::DuplicateRule`] if two rules share an id.
    pub fn new(rules: impl IntoIterator<Item = FixRule>) -> Result<Self> {
        let mut map = IndexMap::new();
        for rule in rules {
            if map.insert(rule.rule_id, rule).is_some() {
                return Err(FixError::DuplicateRule {
                    rule_id: rule.rule_id.to_string(),
                });
            }
        }
        Ok(Self { rules: map })
    }

    /// The process-wide registry of built-in rules.
    pub fn builtin() -> &'static FixRegistry {
        &BUILTIN_REGISTRY
    }

    /// Find the rule registered for `rule_id`.
    pub fn lookup(&self, rule_id: &str) -> Option<&FixRule> {
        self.rules.get(rule_id)
    }

    pub fn contains(&self, rule_id: &str) -> bool {
        self.rules.contains_key(rule_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FixRule> {
        self.rules.values()
    }

    /// Registered rule ids in registration order.
    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }
}
