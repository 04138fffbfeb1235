//! Ticker inference from transcript URL slugs
//!
//! Transcript URLs follow the `<ticker>-q<n>-<year>-earnings-call-transcript`
//! convention, so the first short alphabetic token that is not a fiscal
//! quarter marker is taken as the ticker. Nothing is checked against a real
//! ticker registry: a slug that starts with another short word (a company
//! abbreviation, say) yields that word instead.

use reqwest::Url;

pub const UNKNOWN_TICKER: &str = "UNKNOWN";

const QUARTER_MARKERS: &[&str] = &["q1", "q2", "q3", "q4"];

/// Final path segment of `url`, or its parent when the URL ends in `/`.
///
/// Unparseable URLs yield an empty slug.
pub fn slug_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let segments: Vec<&str> = match parsed.path_segments() {
        Some(segments) => segments.collect(),
        None => return String::new(),
    };

    match segments.as_slice() {
        [.., parent, last] if last.is_empty() => parent.to_string(),
        [.., last] => last.to_string(),
        [] => String::new(),
    }
}

pub fn ticker_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|token| !token.is_empty())
        .filter(|token| {
            !QUARTER_MARKERS
                .iter()
                .any(|marker| token.eq_ignore_ascii_case(marker))
        })
        .find(|token| is_ticker_candidate(token))
        .map(|token| token.to_ascii_uppercase())
        .unwrap_or_else(|| UNKNOWN_TICKER.to_string())
}

pub fn ticker_from_url(url: &str) -> String {
    ticker_from_slug(&slug_from_url(url))
}

fn is_ticker_candidate(token: &str) -> bool {
    (1..=5).contains(&token.len()) && token.chars().all(|ch| ch.is_ascii_alphabetic())
}
