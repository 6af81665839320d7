//! CLI argument definitions for the directory search tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hcd_ingest::{DATA_DIR_ENV_VAR, DEFAULT_DATA_DIR};
use hcd_model::{Category, DEFAULT_SUGGESTION_LIMIT};

#[derive(Parser)]
#[command(
    name = "hcd",
    version,
    about = "Search Taiwan home-care and hospice institutions",
    long_about = "Search the published home-care (居家醫療機構) and hospice \
                  (安寧照護／護理之家) institution lists.\n\n\
                  Records are grouped by region and district, filtered by keyword \
                  and institution type, and shown one page at a time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the institution CSVs and optional directory.toml.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = DATA_DIR_ENV_VAR,
        default_value = DEFAULT_DATA_DIR,
        global = true
    )]
    pub data_dir: PathBuf,

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
        default_value = "compact",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter institutions and show one page of results.
    Search(SearchArgs),

    /// List regions and the districts found in the data.
    Regions,

    /// Show one institution with its service flags.
    Show(ShowArgs),

    /// Suggest institution names containing a keyword.
    Suggest(SuggestArgs),

    /// List the source files and how many rows each produced.
    Sources,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Region (縣市), e.g. 台北市. 全部 or omitted matches every region.
    #[arg(long = "region", value_name = "REGION")]
    pub region: Option<String>,

    /// District (鄉鎮市區), e.g. 大安區.
    #[arg(long = "district", value_name = "DISTRICT")]
    pub district: Option<String>,

    /// Free-text keyword matched against name, address, phone, and team.
    #[arg(long = "keyword", short = 'k', value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Institution type: hospital, clinic, or nursing-home.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// 1-based page number; clamped to the last page.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides directory.toml).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// Match the keyword case-insensitively.
    #[arg(long = "ignore-case")]
    pub ignore_case: bool,

    /// Match a keyword naming a known district against the address only.
    #[arg(long = "force-district")]
    pub force_district: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Institution name; an exact match wins over a partial one.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct SuggestArgs {
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Maximum number of suggestions.
    #[arg(long = "limit", default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
