//! Output filename derivation
//!
//! Turns a (ticker, title) pair into a deterministic, filesystem-safe stem
//! such as `AMZN_Q4_2025_Earnings_Call_Transcript`.

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::Result;

pub const DEFAULT_STEM_TITLE: &str = "Earnings_Call_Transcript";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| static_regex(r"\s+"));
static UNSAFE_CHARS_RE: Lazy<Regex> = Lazy::new(|| static_regex(r"[^A-Za-z0-9_]+"));
static UNDERSCORES_RE: Lazy<Regex> = Lazy::new(|| static_regex(r"_+"));

fn static_regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex {:?}: {}", pattern, err))
}

/// Filename stem for a transcript: `{TICKER}_{cleaned title}`.
pub fn filename_stem(ticker: &str, title: &str) -> Result<String> {
    Ok(format!("{}_{}", ticker, clean_title(ticker, title)?))
}

pub fn markdown_filename(stem: &str) -> String {
    format!("{}.md", stem)
}

pub fn text_filename(stem: &str) -> String {
    format!("{}.txt", stem)
}

/// Strip the company prefix and ticker, then reduce to `[A-Za-z0-9_]`.
///
/// Both prefixes are stripped lazily up to the first match: `(TICKER)`
/// first, then a bare word-boundary `TICKER`. A ticker that appears as a
/// whole word earlier in the title than intended still over-strips.
pub fn clean_title(ticker: &str, title: &str) -> Result<String> {
    let escaped = regex::escape(ticker);
    let mut cleaned = title.to_string();

    for pattern in [
        format!(r"^.*?\({}\)\s*", escaped),
        format!(r"^.*?\b{}\b\s*", escaped),
    ] {
        let re = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid ticker pattern for {:?}", ticker))?;
        cleaned = re.replace(&cleaned, "").into_owned();
    }

    let cleaned = WHITESPACE_RE.replace_all(&cleaned, "_");
    let cleaned = UNSAFE_CHARS_RE.replace_all(&cleaned, "");
    let cleaned = UNDERSCORES_RE.replace_all(&cleaned, "_");
    let cleaned = cleaned.trim_matches('_');

    if cleaned.is_empty() {
        Ok(DEFAULT_STEM_TITLE.to_string())
    } else {
        Ok(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_company_and_parenthesized_ticker() {
        assert_eq!(
            filename_stem("AMZN", "Amazon (AMZN) Q4 2025 Earnings Call Transcript").unwrap(),
            "AMZN_Q4_2025_Earnings_Call_Transcript"
        );
    }

    #[test]
    fn strips_bare_ticker_case_insensitively() {
        assert_eq!(
            filename_stem("MSFT", "msft Q2 2024 earnings call").unwrap(),
            "MSFT_Q2_2024_earnings_call"
        );
    }

    #[test]
    fn bare_ticker_requires_word_boundary() {
        // "AMZNX" does not match, the later standalone "AMZN" does
        assert_eq!(
            clean_title("AMZN", "AMZNX fund vs AMZN Q1 call").unwrap(),
            "Q1_call"
        );
        assert_eq!(clean_title("F", "Fiscal Q1 Call").unwrap(), "Fiscal_Q1_Call");
    }

    #[test]
    fn regex_metacharacters_in_ticker_are_literal() {
        assert_eq!(
            clean_title("A.B", "Foo (A.B) Q1 call").unwrap(),
            "Q1_call"
        );
        assert_eq!(clean_title("A.B", "AxB Q1 call").unwrap(), "AxB_Q1_call");
    }

    #[test]
    fn title_equal_to_ticker_uses_default() {
        assert_eq!(filename_stem("AMZN", "AMZN").unwrap(), "AMZN_Earnings_Call_Transcript");
        assert_eq!(filename_stem("AAPL", "  ---  ").unwrap(), "AAPL_Earnings_Call_Transcript");
    }

    #[test]
    fn removes_unsafe_characters_and_collapses_underscores() {
        assert_eq!(
            clean_title("UNKNOWN", "Q3 2024: Results & Outlook / Part__2 ").unwrap(),
            "Q3_2024_Results_Outlook_Part_2"
        );
        assert_eq!(clean_title("UNKNOWN", "Café résumé").unwrap(), "Caf_rsum");
    }

    #[test]
    fn extensions_are_appended_to_stem() {
        assert_eq!(markdown_filename("AMZN_Q4"), "AMZN_Q4.md");
        assert_eq!(text_filename("AMZN_Q4"), "AMZN_Q4.txt");
    }
}
