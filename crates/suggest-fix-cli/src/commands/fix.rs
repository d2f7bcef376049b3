//! Fix command - rewrite one suggestion.

use suggest_fix::SuggestionFixer;

pub fn run(
    fixer: &SuggestionFixer<'_>,
    rule: &str,
    suggestion: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", fixer.fix_suggestion(rule, suggestion));
    Ok(())
}
