//! Fixer configuration.
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! { "disabled_rules": ["ARTICLE_MISSING"] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FixError, Result};

/// Configuration for a [`SuggestionFixer`](crate::SuggestionFixer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixerConfig {
    /// Rule ids whose rewrite is skipped. A disabled rule behaves like an
    /// unregistered one: the suggestion passes through untouched.
    pub disabled_rules: Vec<String>,
}

impl FixerConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FixError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: FixerConfig = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            disabled = config.disabled_rules.len(),
            "loaded fixer config"
        );
        Ok(config)
    }

    /// Disable a rule by id.
    pub fn with_disabled_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.disabled_rules.push(rule_id.into());
        self
    }

    /// Whether the rule with this id is switched off.
    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|id| id == rule_id)
    }
}
