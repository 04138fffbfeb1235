use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;

pub mod formatters;

#[derive(Parser, Debug)]
#[command(name = "transcripts")]
#[command(version, about = "Download earnings call transcripts from Motley Fool URLs.")]
#[command(
    long_about = "Fetch earnings call transcript pages, extract the title and article body, and save each as <TICKER>_<title>.md and .txt in the output directory."
)]
pub struct Cli {
    /// Transcript URLs
    pub urls: Vec<String>,

    /// Path to file with one URL per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(long, default_value = ".")]
    pub outdir: PathBuf,

    /// Delay between requests in seconds [default: 1.0]
    #[arg(long)]
    pub delay: Option<f64>,

    /// Overwrite existing files
    #[arg(long)]
    pub overwrite: bool,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long)]
    pub timeout: Option<f64>,

    /// User-Agent header for requests
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Config file (default: ~/.config/transcripts/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Output the batch report in JSON format
    #[arg(long = "json")]
    pub json: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout,
            delay_secs: self.delay,
        }
    }
}
