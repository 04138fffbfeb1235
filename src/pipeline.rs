//! Batch orchestration
//!
//! Processes URLs strictly in order: ticker inference, fetch, extraction,
//! filename derivation and write. Each URL ends in exactly one [`Outcome`];
//! a failure is recorded and the batch moves on.

use anyhow::Context;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::naming::{filename_stem, markdown_filename, text_filename};
use crate::scraping::extract_transcript;
use crate::tickers::ticker_from_url;

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub outdir: PathBuf,
    pub delay: Duration,
    pub overwrite: bool,
}

/// Result of processing a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Saved { url: String, filename: String },
    Skipped { url: String, filename: String },
    Failed { url: String, error: String },
}

impl Outcome {
    pub fn url(&self) -> &str {
        match self {
            Outcome::Saved { url, .. }
            | Outcome::Skipped { url, .. }
            | Outcome::Failed { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Saved { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Create the output directory (and parents) if missing.
pub fn prepare_outdir(outdir: &Path) -> Result<()> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create output directory {}", outdir.display()))
}

/// Process every URL in order, reporting each outcome through `on_outcome`
/// as soon as it is known (1-based index, total, outcome).
pub fn run_batch<F, C>(
    urls: &[String],
    fetcher: &F,
    options: &BatchOptions,
    mut on_outcome: C,
) -> BatchReport
where
    F: PageFetcher + ?Sized,
    C: FnMut(usize, usize, &Outcome),
{
    let total = urls.len();
    let mut report = BatchReport::default();

    for (index, url) in urls.iter().enumerate() {
        let position = index + 1;
        let ticker = ticker_from_url(url);
        debug!("[{}/{}] {} -> ticker {}", position, total, url, ticker);

        let existing = if options.overwrite {
            None
        } else {
            find_existing_output(&options.outdir, &ticker, url)
        };

        let (outcome, fetched) = match existing {
            Some(filename) => {
                info!("Skipping {} without fetching, {} exists", url, filename);
                (
                    Outcome::Skipped {
                        url: url.clone(),
                        filename,
                    },
                    false,
                )
            }
            None => {
                let outcome = match fetch_and_write(url, &ticker, fetcher, options) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        warn!("Failed to process {}: {:#}", url, err);
                        Outcome::Failed {
                            url: url.clone(),
                            error: format!("{:#}", err),
                        }
                    }
                };
                (outcome, true)
            }
        };

        on_outcome(position, total, &outcome);
        report.outcomes.push(outcome);

        if fetched && position < total && !options.delay.is_zero() {
            std::thread::sleep(options.delay);
        }
    }

    report
}

fn fetch_and_write<F>(
    url: &str,
    ticker: &str,
    fetcher: &F,
    options: &BatchOptions,
) -> Result<Outcome>
where
    F: PageFetcher + ?Sized,
{
    let html = fetcher.fetch(url)?;
    let transcript = extract_transcript(&html);

    let stem = filename_stem(ticker, &transcript.title)?;
    let md_name = markdown_filename(&stem);
    let md_path = options.outdir.join(&md_name);
    let txt_path = options.outdir.join(text_filename(&stem));

    if !options.overwrite && md_path.exists() && txt_path.exists() {
        return Ok(Outcome::Skipped {
            url: url.to_string(),
            filename: md_name,
        });
    }

    fs::write(&md_path, transcript.to_markdown(url))
        .with_context(|| format!("Failed to write {}", md_path.display()))?;
    fs::write(&txt_path, transcript.to_text(url))
        .with_context(|| format!("Failed to write {}", txt_path.display()))?;
    info!("Saved {} ({} bytes of body)", md_name, transcript.body.len());

    Ok(Outcome::Saved {
        url: url.to_string(),
        filename: md_name,
    })
}

/// Look for a previous download of `url`: a `<TICKER>_*.md` whose
/// `Source:` line names the URL and whose `.txt` sibling exists.
fn find_existing_output(outdir: &Path, ticker: &str, url: &str) -> Option<String> {
    let prefix = format!("{}_", ticker);
    let source_line = format!("Source: {}", url);

    let entries = fs::read_dir(outdir).ok()?;
    let mut candidates: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(&prefix) && name.ends_with(".md"))
        .collect();
    candidates.sort();

    candidates.into_iter().find(|name| {
        let md_path = outdir.join(name);
        let txt_path = md_path.with_extension("txt");
        if !txt_path.exists() {
            return false;
        }
        source_line_of(&md_path).as_deref() == Some(source_line.as_str())
    })
}

/// Third line of a written transcript, without reading the body.
fn source_line_of(md_path: &Path) -> Option<String> {
    let file = File::open(md_path).ok()?;
    BufReader::new(file).lines().nth(2)?.ok()
}
