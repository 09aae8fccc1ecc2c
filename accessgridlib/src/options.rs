//! Rendering options.
//!
//! This module contains the configuration types that control how a table
//! is turned into text: which output format to use and how the column
//! aligner pads cells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccessGridError;

/// Output format requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human glyphs, colorized when writing to a terminal
    #[default]
    Default,
    /// Plain word tokens, never colorized
    AsciiTable,
}

impl OutputFormat {
    /// Lenient lookup: anything other than `ascii-table` is the default format.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Canonical name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Default => "default",
            OutputFormat::AsciiTable => "ascii-table",
        }
    }

    /// All format names, in display order
    pub fn names() -> [&'static str; 2] {
        [
            OutputFormat::Default.as_str(),
            OutputFormat::AsciiTable.as_str(),
        ]
    }
}

impl FromStr for OutputFormat {
    type Err = AccessGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(OutputFormat::Default),
            "ascii-table" => Ok(OutputFormat::AsciiTable),
            other => Err(AccessGridError::UnknownOutputFormat(other.to_string())),
        }
    }
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        OutputFormat::from_name(name)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for rendering a table.
///
/// Use the builder methods to override the defaults:
///
/// ```rust
/// use accessgridlib::{OutputFormat, RenderOptions};
///
/// let options = RenderOptions::new()
///     .format(OutputFormat::AsciiTable)
///     .padding(3);
/// assert_eq!(options.min_width, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format
    pub format: OutputFormat,
    /// Minimum width of a padded cell, padding included
    pub min_width: usize,
    /// Spaces added after the widest cell of a column
    pub padding: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Default,
            min_width: 4,
            padding: 2,
        }
    }
}

impl RenderOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Builder: set the minimum cell width
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Builder: set the column padding
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}
