//! suggest-fix: rule-keyed cleanup of grammar-engine replacement suggestions.
//!
//! A grammar checker reports a rule id and a replacement suggestion. Some
//! rules produce text that needs a cosmetic touch-up before it is shown to
//! the user; this crate keeps a fixed registry of those rewrites and applies
//! the one matching the rule id. Suggestions from any other rule pass through
//! unchanged.
//!
//! # Example
//!
//! ```
//! use suggest_fix::{fix_suggestion, ARTICLE_MISSING};
//!
//! assert_eq!(fix_suggestion(ARTICLE_MISSING, "The  Quick fox"), "The quick fox");
//! assert_eq!(fix_suggestion("SOME_OTHER_RULE", "The  Quick fox"), "The  Quick fox");
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod rule;
pub mod transforms;

mod fixer;

pub use config::FixerConfig;
pub use error::{FixError, Result};
pub use fixer::{fix_suggestion, FixOutcome, FixRequest, SuggestionFixer};
pub use registry::FixRegistry;
pub use rule::{FixRule, GrammarMatch, Transform};
pub use transforms::{ARTICLE_MISSING, BUILTIN_RULES};
