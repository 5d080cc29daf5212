//! Engine configuration
//!
//! Defaults for the parsers and the page-number window, loadable from YAML:
//!
//! ```yaml
//! pagination:
//!   default_limit: 25
//!   max_limit: 200
//! cursor:
//!   default_limit: 50
//! window:
//!   max_visible: 9
//! ```
//!
//! Every section and field is optional and falls back to the built-in
//! defaults.

use crate::cursor::CursorOptions;
use crate::error::{Error, Result};
use crate::query::PaginationOptions;
use crate::window::{DEFAULT_MAX_VISIBLE, MAX_VISIBLE_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page/offset parsing defaults
    pub pagination: PaginationOptions,

    /// Cursor parsing defaults
    pub cursor: CursorOptions,

    /// Page-number window settings
    pub window: WindowConfig,
}

/// Page-number window settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Entries shown in a page-number control
    pub max_visible: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Check that limits are usable
    pub fn validate(&self) -> Result<()> {
        validate_limits(
            "pagination",
            self.pagination.default_limit,
            self.pagination.max_limit,
        )?;
        if self.pagination.default_page < 1 {
            return Err(Error::invalid_value(
                "pagination.default_page",
                "must be at least 1",
            ));
        }
        validate_limits("cursor", self.cursor.default_limit, self.cursor.max_limit)?;
        if self.window.max_visible < 1 || self.window.max_visible > MAX_VISIBLE_LIMIT {
            return Err(Error::invalid_value(
                "window.max_visible",
                format!("must be between 1 and {MAX_VISIBLE_LIMIT}"),
            ));
        }
        Ok(())
    }
}

fn validate_limits(section: &str, default_limit: u64, max_limit: u64) -> Result<()> {
    if max_limit < 1 {
        return Err(Error::invalid_value(
            format!("{section}.max_limit"),
            "must be at least 1",
        ));
    }
    if default_limit < 1 || default_limit > max_limit {
        return Err(Error::invalid_value(
            format!("{section}.default_limit"),
            format!("must be between 1 and {max_limit}"),
        ));
    }
    Ok(())
}
