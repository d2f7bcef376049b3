//! Rules command - list the registered fix rules.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;
use suggest_fix::SuggestionFixer;

/// One row of the `rules --json` listing.
#[derive(Debug, Serialize)]
struct RuleListing<'a> {
    rule_id: &'a str,
    description: &'a str,
    enabled: bool,
}

pub fn run(
    fixer: &SuggestionFixer<'_>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render(fixer, json_output)?);
    Ok(())
}

fn render(
    fixer: &SuggestionFixer<'_>,
    json_output: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let registry = fixer.registry();

    if json_output {
        let rules: Vec<_> = registry
            .iter()
            .map(|rule| RuleListing {
                rule_id: rule.rule_id,
                description: rule.description,
                enabled: fixer.is_enabled(rule.rule_id),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rules)? + "\n");
    }

    let mut out = String::new();
    writeln!(out, "{}", "Registered fix rules".cyan().bold())?;
    writeln!(out)?;
    for rule in registry.iter() {
        let state = if fixer.is_enabled(rule.rule_id) {
            "enabled".green()
        } else {
            "disabled".red()
        };
        writeln!(
            out,
            "  {:<24} {:<10} {}",
            rule.rule_id.white().bold(),
            state,
            rule.description
        )?;
    }

    Ok(out)
}
