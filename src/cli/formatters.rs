//! Console formatting for batch progress lines

use colored::Colorize;

use crate::pipeline::{BatchReport, Outcome};

/// `[i/total] Saved: <file>`, `[i/total] Skipped (exists): <file>` or
/// `[i/total] Failed: <url>` followed by an indented error line.
pub fn format_outcome_line(position: usize, total: usize, outcome: &Outcome) -> String {
    let counter = format!("[{}/{}]", position, total);
    match outcome {
        Outcome::Saved { filename, .. } => {
            format!("{} {} {}", counter, "Saved:".green(), filename)
        }
        Outcome::Skipped { filename, .. } => {
            format!("{} {} {}", counter, "Skipped (exists):".yellow(), filename)
        }
        Outcome::Failed { url, error } => {
            format!("{} {} {}\n  {}", counter, "Failed:".red(), url, error)
        }
    }
}

pub fn format_report_json(report: &BatchReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "saved": report.saved(),
        "skipped": report.skipped(),
        "failed": report.failed(),
        "outcomes": report.outcomes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn saved_and_skipped_lines() {
        plain();
        let saved = Outcome::Saved {
            url: "u".to_string(),
            filename: "AMZN_Q4.md".to_string(),
        };
        assert_eq!(format_outcome_line(1, 3, &saved), "[1/3] Saved: AMZN_Q4.md");

        let skipped = Outcome::Skipped {
            url: "u".to_string(),
            filename: "AMZN_Q4.md".to_string(),
        };
        assert_eq!(
            format_outcome_line(2, 3, &skipped),
            "[2/3] Skipped (exists): AMZN_Q4.md"
        );
    }

    #[test]
    fn failed_line_indents_error() {
        plain();
        let failed = Outcome::Failed {
            url: "https://x.com/a".to_string(),
            error: "HTTP 404 for url: https://x.com/a".to_string(),
        };
        assert_eq!(
            format_outcome_line(3, 3, &failed),
            "[3/3] Failed: https://x.com/a\n  HTTP 404 for url: https://x.com/a"
        );
    }

    #[test]
    fn json_report_includes_counts_and_status_tags() {
        let report = BatchReport {
            outcomes: vec![Outcome::Saved {
                url: "u".to_string(),
                filename: "F.md".to_string(),
            }],
        };
        let json: serde_json::Value =
            serde_json::from_str(&format_report_json(&report).unwrap()).unwrap();
        assert_eq!(json["saved"], 1);
        assert_eq!(json["failed"], 0);
        assert_eq!(json["outcomes"][0]["status"], "saved");
        assert_eq!(json["outcomes"][0]["filename"], "F.md");
    }
}
