//! Column-aligning writer.
//!
//! Cells are buffered line by line. On [`AlignedWriter::finish`] every column
//! is measured across all lines and each cell is padded to its column width,
//! so nothing is emitted until the whole table is known.
//!
//! Widths are measured on the visible text only: ANSI escape sequences are
//! zero-width and wide characters count by their display width.

use std::io::{self, Write};

use crate::options::RenderOptions;

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Buffers cells and writes them as an aligned grid.
///
/// A cell that is followed by another cell on its line is padded to
/// `max(widest + padding, min_width)`, where `widest` is taken over its
/// column block; the last cell of a line is written as is and does not
/// count toward any width.
#[derive(Debug, Clone)]
pub struct AlignedWriter {
    min_width: usize,
    padding: usize,
    lines: Vec<Vec<String>>,
}

impl AlignedWriter {
    pub fn new(min_width: usize, padding: usize) -> Self {
        AlignedWriter {
            min_width,
            padding,
            lines: Vec::new(),
        }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.min_width, options.padding)
    }

    /// Append one line of cells
    pub fn push_line(&mut self, cells: Vec<String>) {
        self.lines.push(cells);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Padded width of every non-final cell, line by line.
    ///
    /// A column block is a run of consecutive lines that all have a
    /// non-final cell in that column. Cells of one block share a width; a
    /// line without such a cell ends the block, so sections separated by a
    /// shorter line are sized independently.
    fn cell_widths(&self) -> Vec<Vec<usize>> {
        let mut widths: Vec<Vec<usize>> = self
            .lines
            .iter()
            .map(|line| vec![0; line.len().saturating_sub(1)])
            .collect();
        let columns = widths.iter().map(Vec::len).max().unwrap_or(0);

        for column in 0..columns {
            let mut start = 0;
            while start < self.lines.len() {
                if widths[start].len() <= column {
                    start += 1;
                    continue;
                }
                let mut end = start;
                let mut widest = 0;
                while end < self.lines.len() && widths[end].len() > column {
                    widest = widest.max(visible_width(&self.lines[end][column]));
                    end += 1;
                }
                let width = (widest + self.padding).max(self.min_width);
                for line in &mut widths[start..end] {
                    line[column] = width;
                }
                start = end;
            }
        }
        widths
    }

    /// Lay out every buffered line, each terminated by `\n`.
    ///
    /// Trailing blanks are trimmed so lines whose final cells are empty do
    /// not end in padding.
    pub fn finish(self) -> String {
        let widths = self.cell_widths();
        let mut output = String::new();
        for (line, line_widths) in self.lines.iter().zip(&widths) {
            let mut text = String::new();
            if let Some((last, padded)) = line.split_last() {
                for (cell, width) in padded.iter().zip(line_widths) {
                    text.push_str(cell);
                    let fill = width.saturating_sub(visible_width(cell));
                    text.extend(std::iter::repeat(' ').take(fill));
                }
                text.push_str(last);
            }
            output.push_str(text.trim_end_matches(' '));
            output.push('\n');
        }
        output
    }

    /// Write the laid out grid to `out` in one go and flush it.
    pub fn flush_to<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        let text = self.finish();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

impl Default for AlignedWriter {
    fn default() -> Self {
        Self::from_options(&RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_visible_width_ignores_escapes() {
        assert_eq!(visible_width("abc"), 3);
        assert_eq!(visible_width("\x1b[32m✔\x1b[0m"), 1);
        assert_eq!(visible_width("\x1b[1mcore:\x1b[0m"), 5);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_columns_padded_to_widest() {
        let mut w = AlignedWriter::new(4, 2);
        w.push_line(line(&["core:", "GET", "LIST", ""]));
        w.push_line(line(&["configmaps", "yes", "no"]));
        w.push_line(line(&["pods", "no", "yes"]));
        let out = w.finish();
        assert_eq!(
            out,
            "core:       GET  LIST\n\
             configmaps  yes  no\n\
             pods        no   yes\n"
        );
    }

    #[test]
    fn test_shorter_line_splits_column_blocks() {
        let mut w = AlignedWriter::new(4, 2);
        w.push_line(line(&["a:", "X", "Y", ""]));
        w.push_line(line(&["r", "ERR", "✔"]));
        w.push_line(line(&[" ", ""]));
        w.push_line(line(&["b:", "X", "Y", ""]));
        w.push_line(line(&["r", "✔", "✔"]));
        assert_eq!(
            w.finish(),
            "a:  X    Y\n\
             r   ERR  ✔\n\
             \n\
             b:  X   Y\n\
             r   ✔   ✔\n"
        );
    }

    #[test]
    fn test_min_width_applies() {
        let mut w = AlignedWriter::new(6, 1);
        w.push_line(line(&["a", "b"]));
        assert_eq!(w.finish(), "a     b\n");
    }

    #[test]
    fn test_escape_sequences_do_not_widen_columns() {
        let mut plain = AlignedWriter::new(4, 2);
        plain.push_line(line(&["pods", "✔", "✖"]));
        plain.push_line(line(&["secrets", "✖", "✔"]));

        let mut colored = AlignedWriter::new(4, 2);
        colored.push_line(line(&["pods", "\x1b[32m✔\x1b[0m", "\x1b[31m✖\x1b[0m"]));
        colored.push_line(line(&["secrets", "\x1b[31m✖\x1b[0m", "\x1b[32m✔\x1b[0m"]));

        let stripped = console::strip_ansi_codes(&colored.finish()).to_string();
        assert_eq!(stripped, plain.finish());
    }

    #[test]
    fn test_trailing_blanks_trimmed() {
        let mut w = AlignedWriter::new(4, 2);
        w.push_line(line(&["deployments", "GET", ""]));
        w.push_line(line(&[" ", ""]));
        let out = w.finish();
        assert_eq!(out, "deployments  GET\n\n");
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        let w = AlignedWriter::default();
        assert!(w.is_empty());
        assert_eq!(w.finish(), "");
    }

    #[test]
    fn test_flush_to_writes_everything() {
        let mut w = AlignedWriter::default();
        w.push_line(line(&["a", "b"]));
        assert_eq!(w.len(), 1);
        let mut buf: Vec<u8> = Vec::new();
        w.flush_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a   b\n");
    }
}
