//! Transcripts - earnings call transcript downloader
//!
//! This library fetches transcript pages, extracts their title and body,
//! infers the company ticker from the URL slug, and writes each transcript
//! as Markdown and plain text under a deterministic filename.

pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod naming;
pub mod pipeline;
pub mod scraping;
pub mod tickers;
pub mod url_list;
