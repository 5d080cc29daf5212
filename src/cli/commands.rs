//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagination engine CLI
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Engine configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level (logs go to stderr)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a page/offset query string (e.g. "page=2&per_page=50")
    Params {
        /// Raw query string
        query: String,
    },

    /// Compute pagination metadata for a page
    Calc {
        #[arg(long, allow_hyphen_values = true)]
        page: i64,

        #[arg(long, allow_hyphen_values = true)]
        limit: i64,

        /// Total number of rows
        #[arg(long, allow_hyphen_values = true)]
        total: i64,
    },

    /// Compute pagination metadata for an offset
    CalcOffset {
        #[arg(long, allow_hyphen_values = true)]
        offset: i64,

        #[arg(long, allow_hyphen_values = true)]
        limit: i64,

        /// Total number of rows
        #[arg(long, allow_hyphen_values = true)]
        total: i64,
    },

    /// Normalize a cursor query string (e.g. "cursor=NDI&direction=backward")
    CursorParams {
        /// Raw query string
        query: String,
    },

    /// Encode a row key as a cursor
    Encode {
        /// Key value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Treat the value as an RFC 3339 timestamp
        #[arg(long, conflicts_with = "number")]
        timestamp: bool,

        /// Treat the value as a number
        #[arg(long)]
        number: bool,
    },

    /// Decode a cursor
    Decode {
        cursor: String,
    },

    /// Page numbers for a pagination control (-1 marks an ellipsis)
    Window {
        #[arg(long, allow_hyphen_values = true)]
        current: i64,

        /// Total number of pages
        #[arg(long)]
        total: u64,

        /// Entries to show (defaults to the configured value)
        #[arg(long)]
        max_visible: Option<usize>,
    },

    /// Navigation links and Link header for a page
    Links {
        /// Base URL of the list endpoint
        #[arg(long)]
        base_url: String,

        #[arg(long, allow_hyphen_values = true)]
        page: i64,

        #[arg(long, allow_hyphen_values = true)]
        limit: i64,

        /// Total number of rows
        #[arg(long, allow_hyphen_values = true)]
        total: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
