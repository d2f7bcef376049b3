//! Built-in suggestion rewrites.
//!
//! Each transform is a pure `fn(&str) -> String` so it can sit in a
//! [`FixRule`] without boxing. Transforms never fail: input they cannot
//! handle comes back whitespace-normalized and otherwise untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::FixRule;

/// Rule id the grammar engine reports when it inserts a missing article.
pub const ARTICLE_MISSING: &str = "ARTICLE_MISSING";

/// Every rule shipped with the library, in registration order.
pub const BUILTIN_RULES: [FixRule; 1] = [FixRule::new(
    ARTICLE_MISSING,
    "Lower-case the word following an inserted \"The\"/\"A\" article",
    article_missing,
)];

// Articles whose following word gets lower-cased, each with its single
// separating space. Matching is case-sensitive; "An" is not covered.
const ARTICLE_PREFIXES: [&str; 2] = ["The ", "A "];

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every maximal run of whitespace to a single ASCII space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Rewrite for `ARTICLE_MISSING`.
///
/// The engine proposes "<Article> <Word> ..." and keeps the original
/// sentence-initial capital on `<Word>`. After whitespace collapsing, the
/// first character after `"The "` (index 4) or `"A "` (index 2) is
/// lower-cased; everything else is left as is. Input without a recognized
/// article, or with nothing after it, is returned collapsed.
pub fn article_missing(suggestion: &str) -> String {
    let collapsed = collapse_whitespace(suggestion);

    let target = ARTICLE_PREFIXES
        .iter()
        .find(|prefix| collapsed.starts_with(*prefix))
        .map(|prefix| prefix.chars().count());

    match target {
        Some(index) => lowercase_char_at(&collapsed, index).unwrap_or(collapsed),
        None => collapsed,
    }
}

/// Lower-case the `index`-th character (by `char`), or `None` if the text is
/// too short.
fn lowercase_char_at(text: &str, index: usize) -> Option<String> {
    let (offset, ch) = text.char_indices().nth(index)?;

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..offset]);
    out.extend(ch.to_lowercase());
    out.push_str(&text[offset + ch.len_utf8()..]);
    Some(out)
}
