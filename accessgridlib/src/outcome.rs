//! Outcomes of a single access check and their display forms.

use console::Style;
use serde::{Deserialize, Serialize};

use crate::options::OutputFormat;
use crate::render::{paint, Env, Render};

/// Result of checking one verb against one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// The verb was not checked or does not apply
    #[default]
    #[serde(rename = "not-applicable", alias = "none", alias = "n/a")]
    NoData,
    Allowed,
    Denied,
    /// The check itself failed
    #[serde(alias = "err")]
    Error,
}

impl Outcome {
    /// Glyph used by the default format
    pub fn glyph(&self) -> &'static str {
        match self {
            Outcome::NoData => "",
            Outcome::Allowed => "✔",
            Outcome::Denied => "✖",
            Outcome::Error => "ERR",
        }
    }

    /// Word used by the ascii-table format
    pub fn ascii(&self) -> &'static str {
        match self {
            Outcome::NoData => "n/a",
            Outcome::Allowed => "yes",
            Outcome::Denied => "no",
            Outcome::Error => "ERR",
        }
    }

    /// Terminal color, if any
    fn style(&self) -> Option<Style> {
        match self {
            Outcome::NoData => None,
            Outcome::Allowed => Some(Style::new().green()),
            Outcome::Denied => Some(Style::new().red()),
            Outcome::Error => Some(Style::new().magenta()),
        }
    }
}

impl Render for Outcome {
    fn render(&self, env: &Env) -> String {
        match env.format {
            OutputFormat::AsciiTable => self.ascii().to_string(),
            OutputFormat::Default => match self.style() {
                Some(style) if env.styled() => paint(&style, self.glyph()),
                _ => self.glyph().to_string(),
            },
        }
    }
}
