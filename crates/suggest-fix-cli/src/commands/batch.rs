//! Batch command - rewrite every suggestion in a JSON file.

use std::fmt::Write as _;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use colored::Colorize;
use suggest_fix::{FixOutcome, FixRequest, SuggestionFixer};
use tracing::debug;

pub fn run(
    fixer: &SuggestionFixer<'_>,
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = read_input(&file, std::io::stdin().lock())?;
    let outcomes = fix_batch(fixer, &content)?;
    debug!(count = outcomes.len(), "processed batch");

    print!("{}", render(&outcomes, json_output, verbose)?);
    Ok(())
}

/// Read the batch from `file`, or from `stdin` when the path is `-`.
fn read_input(file: &Path, mut stdin: impl Read) -> Result<String, Box<dyn std::error::Error>> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(buf);
    }

    std::fs::read_to_string(file).map_err(|e| -> Box<dyn std::error::Error> {
        if e.kind() == ErrorKind::NotFound {
            format!("Input file not found: {}", file.display()).into()
        } else {
            format!("Cannot read input file '{}': {}", file.display(), e).into()
        }
    })
}

fn fix_batch(
    fixer: &SuggestionFixer<'_>,
    content: &str,
) -> Result<Vec<FixOutcome>, serde_json::Error> {
    let requests: Vec<FixRequest> = serde_json::from_str(content)?;
    Ok(fixer.fix_all(&requests))
}

fn render(
    outcomes: &[FixOutcome],
    json_output: bool,
    verbose: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    if json_output {
        return Ok(serde_json::to_string_pretty(outcomes)? + "\n");
    }

    let mut out = String::new();
    let mut changed = 0;
    for outcome in outcomes {
        if outcome.changed() {
            changed += 1;
            writeln!(
                out,
                "{} {}: {} {} {}",
                "~".yellow().bold(),
                outcome.rule_id.cyan(),
                outcome.original.dimmed(),
                "→".dimmed(),
                outcome.fixed.white().bold()
            )?;
        } else if verbose {
            let marker = if outcome.applied { "=" } else { "-" };
            writeln!(
                out,
                "{} {}: {}",
                marker.dimmed(),
                outcome.rule_id.dimmed(),
                outcome.fixed
            )?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {} of {} suggestions rewritten",
        "Done:".green().bold(),
        changed.to_string().white().bold(),
        outcomes.len()
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BATCH: &str = r#"[
        { "rule_id": "ARTICLE_MISSING", "suggestion": "The  Cat" },
        { "rule_id": "OTHER_RULE", "suggestion": "a  b" }
    ]"#;

    #[test]
    fn test_read_input_from_stdin() {
        let content = read_input(Path::new("-"), BATCH.as_bytes()).unwrap();
        assert_eq!(content, BATCH);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(BATCH.as_bytes()).expect("Failed to write to temp file");

        let content = read_input(file.path(), std::io::empty()).unwrap();
        assert_eq!(content, BATCH);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("batch.json");

        let err = read_input(&missing, std::io::empty()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Input file not found"));
        assert!(message.contains("batch.json"));
    }

    #[test]
    fn test_fix_batch_rejects_invalid_json() {
        let fixer = SuggestionFixer::new();
        assert!(fix_batch(&fixer, "{ not json").is_err());
    }

    #[test]
    fn test_render_json_outcomes() {
        let fixer = SuggestionFixer::new();
        let outcomes = fix_batch(&fixer, BATCH).unwrap();

        let rendered = render(&outcomes, true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["rule_id"], "ARTICLE_MISSING");
        assert_eq!(value[0]["original"], "The  Cat");
        assert_eq!(value[0]["fixed"], "The cat");
        assert_eq!(value[0]["applied"], true);
        assert_eq!(value[1]["fixed"], "a  b");
        assert_eq!(value[1]["applied"], false);
    }

    #[test]
    fn test_render_text_summary() {
        let fixer = SuggestionFixer::new();
        let outcomes = fix_batch(&fixer, BATCH).unwrap();

        let quiet = render(&outcomes, false, false).unwrap();
        assert!(quiet.contains("The cat"));
        assert!(!quiet.contains("a  b"));
        assert!(quiet.contains("of 2 suggestions rewritten"));

        let verbose = render(&outcomes, false, true).unwrap();
        assert!(verbose.contains("a  b"));
    }
}
