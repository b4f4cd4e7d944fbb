//! CLI argument definitions for the vCard batcher.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vcf_export::DEFAULT_BATCH_SIZE;

#[derive(Parser)]
#[command(
    name = "vcard-batcher",
    version,
    about = "Normalize a contact CSV export and emit batched vCard files",
    long_about = "Normalize phone and label fields of a contact CSV export, write the\n\
                  cleaned table back out, and emit vCard 3.0 files in fixed-size\n\
                  batches bundled into a single ZIP archive."
)]
pub struct Cli {
    /// Path to the contacts CSV export.
    #[arg(value_name = "CONTACTS_CSV")]
    pub contacts_csv: PathBuf,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Rows per vCard batch file.
    #[arg(long = "batch-size", value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Keep the Mobile label assigned during value redistribution.
    ///
    /// By default the positional slot label overwrites it, matching the
    /// behavior of the legacy export tooling.
    #[arg(long = "keep-redistributed-labels")]
    pub keep_redistributed_labels: bool,

    /// Skip photo downloads; records are emitted without PHOTO entries.
    #[arg(long = "skip-photos")]
    pub skip_photos: bool,

    /// Normalize and report without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
