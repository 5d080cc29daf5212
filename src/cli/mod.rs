//! CLI module
//!
//! Command-line access to the pagination engine, handy for checking what a
//! list endpoint will answer for a given query.
//!
//! # Commands
//!
//! - `params` / `cursor-params` - Normalize a raw query string
//! - `calc` / `calc-offset` - Compute response metadata
//! - `encode` / `decode` - Work with cursors
//! - `window` - Page numbers for a pagination control
//! - `links` - Navigation links and `Link` header

mod commands;
mod runner;

pub use commands::{Cli, Commands, LogLevel, OutputFormat};
pub use runner::Runner;
