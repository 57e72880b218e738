//! CLI argument definitions for revify.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "revify",
    version,
    about = "Revify - Mobile review sentiment analyzer",
    long_about = "Classify mobile product reviews as positive, negative or neutral.\n\n\
                  Analyze a single review or a whole CSV file with 'mobile' and\n\
                  'review' columns. Sentiment is scored by counting fixed\n\
                  positive and negative keywords."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow review text to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict the sentiment of a single review.
    Analyze(AnalyzeArgs),

    /// Classify every review in a CSV file.
    Batch(BatchArgs),

    /// List the known mobile products.
    Mobiles,

    /// List the positive and negative keywords.
    Keywords,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Review text (read from stdin when omitted).
    #[arg(value_name = "REVIEW")]
    pub review: Option<String>,

    /// Mobile name typed manually; takes precedence over --pick.
    #[arg(long = "mobile", value_name = "NAME")]
    pub mobile: Option<String>,

    /// Pick a mobile by its number in `revify mobiles`.
    #[arg(long = "pick", value_name = "N")]
    pub pick: Option<usize>,

    /// Append a glyph to the predicted label.
    #[arg(long = "glyphs")]
    pub glyphs: bool,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// CSV file with 'mobile' and 'review' columns.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output CSV path (default: sentiment_results.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of result rows to preview (0 disables the preview).
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 20)]
    pub preview: usize,

    /// Classify and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write labels with glyphs, e.g. "Positive 😀".
    #[arg(long = "glyphs")]
    pub glyphs: bool,

    /// Infer numeric and boolean column types instead of reading text.
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// Print the label summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
