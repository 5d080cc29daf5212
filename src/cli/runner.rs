//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::EngineConfig;
use crate::cursor::{
    decode_cursor, encode_cursor, parse_cursor_pagination_params_with, CursorValue,
};
use crate::error::{Error, Result, ResultExt};
use crate::links::PageLinks;
use crate::page::{calculate_pagination, calculate_pagination_from_offset};
use crate::query::{parse_pagination_params, PaginationQuery};
use crate::window::page_numbers;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(&output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(&output)?,
        };
        println!("{rendered}");
        Ok(())
    }

    /// Run the CLI command and return its output as JSON
    pub fn execute(&self) -> Result<Value> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Params { query } => {
                let query = PaginationQuery::from_query_string(query);
                let params = parse_pagination_params(&query, &config.pagination);
                Ok(json!({
                    "params": params,
                    "skipTake": params.skip_take(),
                }))
            }
            Commands::Calc { page, limit, total } => {
                Ok(serde_json::to_value(calculate_pagination(*page, *limit, *total))?)
            }
            Commands::CalcOffset {
                offset,
                limit,
                total,
            } => Ok(serde_json::to_value(calculate_pagination_from_offset(
                *offset, *limit, *total,
            ))?),
            Commands::CursorParams { query } => {
                let query = PaginationQuery::from_query_string(query);
                let params = parse_cursor_pagination_params_with(&query, &config.cursor);
                Ok(json!({
                    "params": params,
                    "decodedCursor": params.decoded_cursor(),
                    "fetchLimit": params.fetch_limit(),
                }))
            }
            Commands::Encode {
                value,
                timestamp,
                number,
            } => {
                let key = parse_key(value, *timestamp, *number)?;
                Ok(json!({
                    "value": key.to_string(),
                    "cursor": encode_cursor(key),
                }))
            }
            Commands::Decode { cursor } => {
                let value = decode_cursor(cursor).ok_or_else(|| Error::invalid_cursor(cursor))?;
                Ok(json!({
                    "cursor": cursor,
                    "value": value,
                }))
            }
            Commands::Window {
                current,
                total,
                max_visible,
            } => {
                let max_visible = max_visible.unwrap_or(config.window.max_visible);
                Ok(serde_json::to_value(page_numbers(*current, *total, max_visible))?)
            }
            Commands::Links {
                base_url,
                page,
                limit,
                total,
            } => {
                let result = calculate_pagination(*page, *limit, *total);
                let links = PageLinks::from_base_url(base_url, &result)?;
                Ok(json!({
                    "links": links,
                    "header": links.to_link_header(),
                }))
            }
        }
    }

    /// Load configuration, falling back to defaults when no file is given
    fn load_config(&self) -> Result<EngineConfig> {
        match &self.cli.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display())),
            None => Ok(EngineConfig::default()),
        }
    }
}

/// Interpret a raw CLI key according to the type flags
fn parse_key(value: &str, timestamp: bool, number: bool) -> Result<CursorValue> {
    if timestamp {
        let ts = DateTime::parse_from_rfc3339(value)
            .map_err(|e| Error::invalid_timestamp(value, e.to_string()))?;
        return Ok(CursorValue::from(ts.with_timezone(&Utc)));
    }
    if number {
        if let Ok(n) = value.parse::<i64>() {
            return Ok(CursorValue::from(n));
        }
        return value
            .parse::<f64>()
            .map(CursorValue::from)
            .map_err(|e| Error::invalid_number(value, e.to_string()));
    }
    Ok(CursorValue::from(value))
}
