//! Error handling for the transcript downloader
//!
//! Defines the domain error types and a unified Result type using anyhow
//! for context chaining and error propagation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for transcript downloads
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("URL list file not found: {}", .0.display())]
    UrlListNotFound(PathBuf),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status} for url: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("request failed")]
    Request(#[from] reqwest::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for transcript operations
pub type Result<T> = anyhow::Result<T>;
