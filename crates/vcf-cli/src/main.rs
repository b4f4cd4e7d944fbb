//! Contact vCard batcher CLI.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use vcf_cli::logging::{LogConfig, LogFormat, init_logging};
use vcf_cli::pipeline::{ExportRequest, RunSummary, run_export};
use vcf_model::LabelPolicy;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let request = export_request_from_cli(&cli);
    let exit_code = match run_with_progress(&request) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run the export with an indicatif bar tracking batch progress.
fn run_with_progress(request: &ExportRequest) -> Result<RunSummary> {
    let style = ProgressStyle::with_template("Writing batches [{bar:40}] {pos}/{len}")?
        .progress_chars("=> ");
    let bar = ProgressBar::new(0).with_style(style);
    let result = run_export(request, |progress| {
        if bar.length() != Some(progress.total_batches as u64) {
            bar.set_length(progress.total_batches as u64);
        }
        bar.set_position(progress.batch as u64);
    });
    bar.finish_and_clear();
    result
}

fn export_request_from_cli(cli: &Cli) -> ExportRequest {
    ExportRequest {
        contacts_csv: cli.contacts_csv.clone(),
        output_dir: cli.output_dir.clone(),
        batch_size: cli.batch_size,
        label_policy: if cli.keep_redistributed_labels {
            LabelPolicy::KeepRedistributed
        } else {
            LabelPolicy::PositionalWins
        },
        skip_photos: cli.skip_photos,
        dry_run: cli.dry_run,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
