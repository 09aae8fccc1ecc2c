//! Rendering primitives: the environment a cell renders against and the
//! cells that make up header and label columns.

use console::Style;

use crate::options::OutputFormat;

/// Where and how a table is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Env {
    /// Destination is an interactive terminal
    pub is_terminal: bool,
    /// Requested output format
    pub format: OutputFormat,
}

impl Env {
    pub fn new(is_terminal: bool, format: OutputFormat) -> Self {
        Env {
            is_terminal,
            format,
        }
    }

    /// ANSI styling is emitted only for the default format on a terminal
    pub fn styled(&self) -> bool {
        self.is_terminal && self.format == OutputFormat::Default
    }
}

/// Anything that can produce its display string for an [`Env`].
pub trait Render {
    fn render(&self, env: &Env) -> String;
}

/// A header or label cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Rendered verbatim
    Text(String),
    /// Rendered bold in the default format on a terminal, verbatim otherwise
    Bold(String),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn bold(s: impl Into<String>) -> Self {
        Cell::Bold(s.into())
    }

    /// Plain text cells for each string
    pub fn text_list<I, S>(strs: I) -> Vec<Cell>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        strs.into_iter().map(Cell::text).collect()
    }

    /// Bold cells for each string
    pub fn bold_list<I, S>(strs: I) -> Vec<Cell>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        strs.into_iter().map(Cell::bold).collect()
    }

    /// The unstyled content
    pub fn content(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Bold(s) => s,
        }
    }
}

impl Render for Cell {
    fn render(&self, env: &Env) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            // same gate as the glyph colors: default format on a terminal
            Cell::Bold(s) if env.styled() => paint(&Style::new().bold(), s),
            Cell::Bold(s) => s.clone(),
        }
    }
}

/// Apply `style` regardless of what console detects for the process.
///
/// Whether to style is decided by the [`Env`], not by console's own
/// terminal probing.
pub(crate) fn paint(style: &Style, s: &str) -> String {
    style.clone().force_styling(true).apply_to(s).to_string()
}
