//! Table-ready access data.
//!
//! The data flow is:
//! 1. Raw result (`AccessResult`)
//! 2. Table (sorted and grouped rows, still typed)
//! 3. Text (cells rendered against an `Env`, then column-aligned)

use std::io::Write;

use crate::error::AccessGridError;
use crate::options::{OutputFormat, RenderOptions};
use crate::outcome::Outcome;
use crate::output::align::AlignedWriter;
use crate::render::{Cell, Env, Render};
use crate::terminal::TerminalDetection;

/// One line of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Introduces a group: `"<group>:"` followed by the upper-cased verbs
    Group { label: String, verbs: Vec<String> },
    /// Blank line between groups
    Spacer,
    /// A resource and one outcome per verb, in header order
    Data {
        resource: String,
        outcomes: Vec<Outcome>,
    },
}

impl Row {
    /// Group header row for `display_group`, verbs upper-cased.
    pub fn group<S: AsRef<str>>(display_group: &str, verbs: &[S]) -> Self {
        Row::Group {
            label: format!("{display_group}:"),
            verbs: verbs.iter().map(|v| v.as_ref().to_uppercase()).collect(),
        }
    }

    pub fn data(resource: impl Into<String>, outcomes: Vec<Outcome>) -> Self {
        Row::Data {
            resource: resource.into(),
            outcomes,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Row::Data { .. })
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Row::Group { .. })
    }

    fn render_cells(&self, env: &Env) -> Vec<String> {
        match self {
            Row::Group { label, verbs } => {
                let mut cells = vec![Cell::bold(label.as_str()).render(env)];
                cells.extend(verbs.iter().map(|v| Cell::bold(v.as_str()).render(env)));
                // empty trailing cell keeps the last verb column padded
                cells.push(String::new());
                cells
            }
            Row::Spacer => vec![" ".to_string(), String::new()],
            Row::Data { resource, outcomes } => {
                let mut cells = vec![resource.clone()];
                cells.extend(outcomes.iter().map(|o| o.render(env)));
                cells
            }
        }
    }
}

/// Access table: an optional header line plus ordered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Top-level column headers, written before any row when present
    pub headers: Option<Vec<Cell>>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Table without a top-level header line
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers(headers: Vec<Cell>) -> Self {
        Table {
            headers: Some(headers),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn add_row(&mut self, resource: impl Into<String>, outcomes: Vec<Outcome>) {
        self.push(Row::data(resource, outcomes));
    }

    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.is_data())
    }

    pub fn group_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.is_group())
    }

    /// Render every row into an aligned grid without writing it anywhere.
    fn layout(&self, env: &Env, options: &RenderOptions) -> AlignedWriter {
        let mut writer = AlignedWriter::from_options(options);
        if let Some(headers) = &self.headers {
            writer.push_line(headers.iter().map(|h| h.render(env)).collect());
        }
        for row in &self.rows {
            writer.push_line(row.render_cells(env));
        }
        tracing::trace!(lines = writer.len(), ?env, "laid out access table");
        writer
    }

    /// Write the table to `out` in `format`.
    ///
    /// `format` is an [`OutputFormat`] or its name; names other than
    /// `ascii-table` select the default format. Colors are used only when
    /// `terminal` reports an interactive destination and the format is
    /// [`OutputFormat::Default`].
    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
        format: impl Into<OutputFormat>,
        terminal: &TerminalDetection,
    ) -> Result<(), AccessGridError> {
        let options = RenderOptions::new().format(format.into());
        self.render_with_options(out, &options, terminal)
    }

    pub fn render_with_options<W: Write + ?Sized>(
        &self,
        out: &mut W,
        options: &RenderOptions,
        terminal: &TerminalDetection,
    ) -> Result<(), AccessGridError> {
        let env = Env::new(terminal.is_terminal(), options.format);
        self.layout(&env, options).flush_to(out)?;
        Ok(())
    }

    /// Render into a string instead of a stream
    pub fn render_to_string(
        &self,
        format: impl Into<OutputFormat>,
        terminal: &TerminalDetection,
    ) -> String {
        let format = format.into();
        let env = Env::new(terminal.is_terminal(), format);
        self.layout(&env, &RenderOptions::new().format(format))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample_table() -> Table {
        let mut table = Table::new();
        table.push(Row::group("core", &["get", "list"]));
        table.add_row("configmaps", vec![Outcome::Allowed, Outcome::Denied]);
        table.add_row("pods", vec![Outcome::Error, Outcome::NoData]);
        table.push(Row::Spacer);
        table.push(Row::group("apps", &["get", "list"]));
        table.add_row("deployments", vec![Outcome::Allowed, Outcome::Allowed]);
        table
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_group_row_uppercases_verbs() {
        let row = Row::group("core", &["get", "deletecollection"]);
        assert_eq!(
            row,
            Row::Group {
                label: "core:".to_string(),
                verbs: vec!["GET".to_string(), "DELETECOLLECTION".to_string()],
            }
        );
    }

    #[test]
    fn test_ascii_render() {
        let table = sample_table();
        let out = table.render_to_string(OutputFormat::AsciiTable, &TerminalDetection::assume(true));
        assert_eq!(
            out,
            "core:        GET  LIST\n\
             configmaps   yes  no\n\
             pods         ERR  n/a\n\
             \n\
             apps:        GET  LIST\n\
             deployments  yes  yes\n"
        );
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_default_render_without_terminal() {
        let table = sample_table();
        let out = table.render_to_string(OutputFormat::Default, &TerminalDetection::assume(false));
        assert_eq!(
            out,
            "core:        GET  LIST\n\
             configmaps   ✔    ✖\n\
             pods         ERR\n\
             \n\
             apps:        GET  LIST\n\
             deployments  ✔    ✔\n"
        );
    }

    #[test]
    fn test_default_render_on_terminal_is_colored() {
        let table = sample_table();
        let terminal = TerminalDetection::assume(true);
        let out = table.render_to_string(OutputFormat::Default, &terminal);
        assert!(out.contains("\x1b[32m✔\x1b[0m"));
        assert!(out.contains("\x1b[31m✖\x1b[0m"));
        assert!(out.contains("\x1b[35mERR\x1b[0m"));
        assert!(out.contains("\x1b[1mcore:\x1b[0m"));

        let plain = table.render_to_string(OutputFormat::Default, &TerminalDetection::assume(false));
        assert_eq!(console::strip_ansi_codes(&out), plain);
    }

    #[test]
    fn test_render_writes_to_stream() {
        let table = sample_table();
        let mut buf: Vec<u8> = Vec::new();
        table
            .render(&mut buf, OutputFormat::AsciiTable, &TerminalDetection::assume(false))
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_propagates_write_errors() {
        let table = sample_table();
        let err = table
            .render(&mut FailingWriter, OutputFormat::Default, &TerminalDetection::assume(false))
            .unwrap_err();
        assert!(matches!(err, AccessGridError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_ascii_on_terminal_has_no_escapes() {
        let mut table = Table::new();
        table.push(Row::group("core", &["get"]));
        table.add_row("pods", vec![Outcome::Allowed]);
        let out = table.render_to_string(OutputFormat::AsciiTable, &TerminalDetection::assume(true));
        assert!(!out.contains('\x1b'), "{out:?}");
        assert_eq!(out, "core:  GET\npods   yes\n");
    }

    #[test]
    fn test_render_by_format_name() {
        let table = sample_table();
        let terminal = TerminalDetection::assume(false);

        let mut by_name: Vec<u8> = Vec::new();
        table.render(&mut by_name, "ascii-table", &terminal).unwrap();
        assert_eq!(
            String::from_utf8(by_name).unwrap(),
            table.render_to_string(OutputFormat::AsciiTable, &terminal)
        );

        // unrecognized names fall back to the default format
        assert_eq!(
            table.render_to_string("wide", &terminal),
            table.render_to_string(OutputFormat::Default, &terminal)
        );
    }

    #[test]
    fn test_headers_written_first() {
        let mut table = Table::with_headers(Cell::bold_list(["NAME", "GET"]));
        table.add_row("pods", vec![Outcome::Allowed]);
        let out = table.render_to_string(OutputFormat::AsciiTable, &TerminalDetection::assume(false));
        assert_eq!(out, "NAME  GET\npods  yes\n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let table = Table::new();
        let out = table.render_to_string(OutputFormat::Default, &TerminalDetection::assume(false));
        assert_eq!(out, "");
        assert_eq!(table.data_rows().count(), 0);
    }

    #[test]
    fn test_custom_padding() {
        let mut table = Table::new();
        table.add_row("pods", vec![Outcome::Allowed, Outcome::Denied]);
        let options = RenderOptions::new()
            .format(OutputFormat::AsciiTable)
            .padding(4)
            .min_width(0);
        let mut buf: Vec<u8> = Vec::new();
        table
            .render_with_options(&mut buf, &options, &TerminalDetection::assume(false))
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "pods    yes    no\n");
    }
}
