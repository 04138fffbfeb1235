//! URL list builder
//!
//! Merges URLs from an optional list file and the command line into one
//! ordered sequence with exact-string duplicates removed.

use anyhow::Context;
use itertools::Itertools;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, TranscriptError};

/// Build the ordered, de-duplicated URL list.
///
/// File entries come first, then the literal URLs. The first occurrence of
/// each URL wins.
pub fn build_url_list(file: Option<&Path>, urls: &[String]) -> Result<Vec<String>> {
    let mut collected = Vec::new();

    if let Some(path) = file {
        if !path.exists() {
            return Err(TranscriptError::UrlListNotFound(path.to_path_buf()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read URL list {}", path.display()))?;
        collected.extend(parse_url_lines(&content));
        debug!("Read {} URLs from {}", collected.len(), path.display());
    }

    collected.extend(urls.iter().cloned());

    Ok(dedup_preserving_order(collected))
}

/// One URL per line; blank lines and `#` comments are ignored.
pub fn parse_url_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    urls.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let urls = strings(&["a", "b", "a"]);
        assert_eq!(dedup_preserving_order(urls), strings(&["a", "b"]));
    }

    #[test]
    fn dedup_is_exact_match_only() {
        let urls = strings(&["https://x.com/a", "https://x.com/a/", "HTTPS://x.com/a"]);
        assert_eq!(dedup_preserving_order(urls.clone()), urls);
    }

    #[test]
    fn parse_lines_skips_blanks_and_comments() {
        let content = "# header\n\nhttps://a.com/x\n   \n  https://b.com/y  \n#https://c.com\n";
        assert_eq!(
            parse_url_lines(content),
            strings(&["https://a.com/x", "https://b.com/y"])
        );
    }

    #[test]
    fn file_entries_precede_literal_urls() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "https://a.com/1").unwrap();
        writeln!(file, "https://a.com/2").unwrap();

        let urls = build_url_list(
            Some(file.path()),
            &strings(&["https://a.com/3", "https://a.com/1"]),
        )
        .unwrap();
        assert_eq!(
            urls,
            strings(&["https://a.com/1", "https://a.com/2", "https://a.com/3"])
        );
    }

    #[test]
    fn missing_file_is_not_found_error() {
        let err = build_url_list(Some(Path::new("/nonexistent/urls.txt")), &[]).unwrap_err();
        match err.downcast_ref::<TranscriptError>() {
            Some(TranscriptError::UrlListNotFound(path)) => {
                assert_eq!(path, Path::new("/nonexistent/urls.txt"));
            }
            other => panic!("expected UrlListNotFound, got {:?}", other),
        }
    }

    #[test]
    fn no_inputs_yield_empty_list() {
        assert!(build_url_list(None, &[]).unwrap().is_empty());
    }
}
