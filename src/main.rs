use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use transcripts::cli::formatters::{format_outcome_line, format_report_json};
use transcripts::cli::Cli;
use transcripts::fetch::HttpFetcher;
use transcripts::pipeline::{prepare_outdir, run_batch, BatchOptions};
use transcripts::{config, url_list};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the batch report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("transcripts error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let urls = url_list::build_url_list(cli.file.as_deref(), &cli.urls)?;
    if urls.is_empty() {
        println!("No URLs provided. Use arguments or --file.");
        return Ok(ExitCode::from(2));
    }

    let settings = config::load(cli.config.as_deref())?.resolve(&cli.overrides())?;
    prepare_outdir(&cli.outdir)?;
    let fetcher = HttpFetcher::new(&settings.fetch)?;

    let options = BatchOptions {
        outdir: cli.outdir.clone(),
        delay: settings.delay,
        overwrite: cli.overwrite,
    };

    tracing::info!("Processing {} URLs into {}", urls.len(), cli.outdir.display());
    let report = run_batch(&urls, &fetcher, &options, |position, total, outcome| {
        if !cli.json {
            println!("{}", format_outcome_line(position, total, outcome));
        }
    });

    if cli.json {
        println!("{}", format_report_json(&report)?);
    }

    tracing::info!(
        "Batch complete: {} saved, {} skipped, {} failed",
        report.saved(),
        report.skipped(),
        report.failed()
    );
    Ok(ExitCode::SUCCESS)
}
