//! Fix rule records and the seam to the grammar engine's match objects.

use std::fmt;

/// Signature of a rule-specific suggestion rewrite.
pub type Transform = fn(&str) -> String;

/// A rewrite registered for one grammar-engine rule id.
///
/// Identity is `rule_id`. Uniqueness is enforced by
/// [`FixRegistry`](crate::FixRegistry), not here.
#[derive(Clone, Copy)]
pub struct FixRule {
    /// Rule identifier from the grammar engine's catalog.
    pub rule_id: &'static str,
    /// Short human-readable description of what the rewrite does.
    pub description: &'static str,
    transform: Transform,
}

impl FixRule {
    /// Create a new fix rule.
    pub const fn new(
        rule_id: &'static str,
        description: &'static str,
        transform: Transform,
    ) -> Self {
        Self {
            rule_id,
            description,
            transform,
        }
    }

    /// Run this rule's rewrite on a raw suggestion.
    pub fn apply(&self, suggestion: &str) -> String {
        (self.transform)(suggestion)
    }
}

impl fmt::Debug for FixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixRule")
            .field("rule_id", &self.rule_id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Anything that can name the grammar rule behind a suggestion.
///
/// Lets callers hand over the engine's own match/rule object instead of
/// pulling the id out first.
pub trait GrammarMatch {
    /// Identifier of the rule that produced the suggestion.
    fn rule_id(&self) -> &str;
}

impl GrammarMatch for str {
    fn rule_id(&self) -> &str {
        self
    }
}

impl GrammarMatch for String {
    fn rule_id(&self) -> &str {
        self.as_str()
    }
}

impl<T: GrammarMatch + ?Sized> GrammarMatch for &T {
    fn rule_id(&self) -> &str {
        (**self).rule_id()
    }
}
