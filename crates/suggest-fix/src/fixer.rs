//! Rule-keyed suggestion rewriting.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::FixerConfig;
use crate::registry::FixRegistry;
use crate::rule::{FixRule, GrammarMatch};

/// One suggestion from the grammar engine, as read from batch input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRequest {
    /// Id of the rule that produced the suggestion.
    pub rule_id: String,
    /// Raw replacement text proposed by the engine.
    pub suggestion: String,
}

impl FixRequest {
    pub fn new(rule_id: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            suggestion: suggestion.into(),
        }
    }
}

impl GrammarMatch for FixRequest {
    fn rule_id(&self) -> &str {
        &self.rule_id
    }
}

/// Result of running a [`FixRequest`] through the fixer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixOutcome {
    pub rule_id: String,
    pub original: String,
    pub fixed: String,
    /// Whether a registered, enabled rule ran. The text may still be
    /// unchanged when this is `true`.
    pub applied: bool,
}

impl FixOutcome {
    /// Whether the rewrite produced different text.
    pub fn changed(&self) -> bool {
        self.original != self.fixed
    }
}

/// Rewrites grammar-engine suggestions using a [`FixRegistry`].
///
/// Unknown or disabled rule ids are not errors: the suggestion is returned
/// exactly as given.
#[derive(Debug, Clone)]
pub struct SuggestionFixer<'r> {
    registry: &'r FixRegistry,
    config: FixerConfig,
}

impl SuggestionFixer<'static> {
    /// Create a fixer over the built-in rules with default configuration.
    pub fn new() -> Self {
        Self::with_registry(FixRegistry::builtin())
    }
}

impl Default for SuggestionFixer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> SuggestionFixer<'r> {
    /// Create a fixer over a specific registry.
    pub fn with_registry(registry: &'r FixRegistry) -> Self {
        Self {
            registry,
            config: FixerConfig::default(),
        }
    }

    /// Apply a configuration.
    pub fn with_config(mut self, config: FixerConfig) -> Self {
        for rule_id in &config.disabled_rules {
            if !self.registry.contains(rule_id) {
                warn!(rule_id = %rule_id, "disabled rule is not registered");
            }
        }
        self.config = config;
        self
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r FixRegistry {
        self.registry
    }

    /// Whether a rewrite would run for this rule id.
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        self.active_rule(rule_id).is_some()
    }

    /// Rewrite `suggestion` with the rule registered for `rule_id`, or return
    /// it unchanged if there is none.
    pub fn fix_suggestion(&self, rule_id: &str, suggestion: &str) -> String {
        match self.active_rule(rule_id) {
            Some(rule) => {
                let fixed = rule.apply(suggestion);
                debug!(rule_id, original = suggestion, fixed = %fixed, "applied suggestion fix");
                fixed
            }
            None => {
                trace!(rule_id, "no fix rule, passing suggestion through");
                suggestion.to_string()
            }
        }
    }

    /// Same as [`fix_suggestion`](Self::fix_suggestion), taking the engine's
    /// match object.
    pub fn fix_match<M: GrammarMatch + ?Sized>(
        &self,
        grammar_match: &M,
        suggestion: &str,
    ) -> String {
        self.fix_suggestion(grammar_match.rule_id(), suggestion)
    }

    /// Run a single request.
    pub fn fix(&self, request: &FixRequest) -> FixOutcome {
        FixOutcome {
            rule_id: request.rule_id.clone(),
            original: request.suggestion.clone(),
            fixed: self.fix_suggestion(&request.rule_id, &request.suggestion),
            applied: self.is_enabled(&request.rule_id),
        }
    }

    /// Run a batch of requests, keeping their order.
    pub fn fix_all(&self, requests: &[FixRequest]) -> Vec<FixOutcome> {
        requests.iter().map(|r| self.fix(r)).collect()
    }

    fn active_rule(&self, rule_id: &str) -> Option<&'r FixRule> {
        if self.config.is_disabled(rule_id) {
            return None;
        }
        self.registry.lookup(rule_id)
    }
}

/// Rewrite a suggestion using the built-in rules and default configuration.
pub fn fix_suggestion(rule_id: &str, suggestion: &str) -> String {
    SuggestionFixer::new().fix_suggestion(rule_id, suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::ARTICLE_MISSING;

    #[test]
    fn test_unknown_rule_is_identity() {
        let fixer = SuggestionFixer::new();
        assert_eq!(fixer.fix_suggestion("UPPERCASE_SENTENCE_START", "The  Quick"), "The  Quick");
        assert_eq!(fixer.fix_suggestion("", "A Dog"), "A Dog");
    }

    #[test]
    fn test_rule_id_is_case_sensitive() {
        let fixer = SuggestionFixer::new();
        assert_eq!(fixer.fix_suggestion("article_missing", "A Dog"), "A Dog");
    }

    #[test]
    fn test_article_missing() {
        let fixer = SuggestionFixer::new();
        assert_eq!(fixer.fix_suggestion(ARTICLE_MISSING, "The  Quick fox"), "The quick fox");
        assert_eq!(fixer.fix_suggestion(ARTICLE_MISSING, "A Dog barks"), "A dog barks");
    }

    #[test]
    fn test_disabled_rule_is_identity() {
        let fixer = SuggestionFixer::new()
            .with_config(FixerConfig::default().with_disabled_rule(ARTICLE_MISSING));
        assert!(!fixer.is_enabled(ARTICLE_MISSING));
        assert_eq!(fixer.fix_suggestion(ARTICLE_MISSING, "The  Quick"), "The  Quick");
    }

    #[test]
    fn test_fix_match() {
        let fixer = SuggestionFixer::new();
        let request = FixRequest::new(ARTICLE_MISSING, "ignored");
        assert_eq!(fixer.fix_match(&request, "A Cat"), "A cat");
        assert_eq!(fixer.fix_match(ARTICLE_MISSING, "A Cat"), "A cat");
    }

    #[test]
    fn test_fix_outcome_flags() {
        let fixer = SuggestionFixer::new();

        let applied = fixer.fix(&FixRequest::new(ARTICLE_MISSING, "A dog"));
        assert!(applied.applied);
        assert!(!applied.changed());

        let changed = fixer.fix(&FixRequest::new(ARTICLE_MISSING, "A Dog"));
        assert!(changed.applied);
        assert!(changed.changed());
        assert_eq!(changed.fixed, "A dog");

        let skipped = fixer.fix(&FixRequest::new("OTHER", "A Dog"));
        assert!(!skipped.applied);
        assert_eq!(skipped.fixed, "A Dog");
    }

    #[test]
    fn test_fix_all_keeps_order() {
        let fixer = SuggestionFixer::new();
        let outcomes = fixer.fix_all(&[
            FixRequest::new("OTHER", "Z  Z"),
            FixRequest::new(ARTICLE_MISSING, "The Bird"),
        ]);
        let fixed: Vec<_> = outcomes.iter().map(|o| o.fixed.as_str()).collect();
        assert_eq!(fixed, vec!["Z  Z", "The bird"]);
    }

    #[test]
    fn test_free_function() {
        assert_eq!(fix_suggestion(ARTICLE_MISSING, "A Dog"), "A dog");
        assert_eq!(fix_suggestion("NOPE", "A Dog"), "A Dog");
    }
}
