//! Convert tabular item exports into label printer command files.

mod columns;
mod commands;
mod layout;
mod markers;
mod rows;

pub use columns::{
    ColumnMap, ColumnsError, DEFAULT_CODE_HEADER, DEFAULT_DESCRIPTION_HEADER,
    DEFAULT_QUANTITY_HEADER,
};
pub use commands::{BlockKind, CRLF, CommandBlock, LabelFormat};
pub use layout::{DESCRIPTION_WIDTH, LabelLines, split_description};
pub use markers::{Marker, MarkerStyle};
pub use rows::{InputRow, LabelJob, SkipReason, plan_row, read_rows};

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while preparing the output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The command file is ASCII; `line` is the 1-based output line.
    #[error("non-ASCII character '{ch}' (U+{code:04X}) in output line {line}")]
    NonAscii { ch: char, code: u32, line: usize },
}

/// Settings for one conversion.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub markers: MarkerStyle,
    pub columns: ColumnMap,
}

/// Counts reported after a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub skipped: usize,
    pub blocks: usize,
}

/// Build the full output text: header, then every row's blocks in order,
/// joined with CRLF.
pub fn render_document(rows: &[InputRow], markers: MarkerStyle) -> (String, Summary) {
    let format = LabelFormat::new(markers);
    let mut parts = format.header();
    let mut summary = Summary {
        rows: rows.len(),
        ..Summary::default()
    };

    for (idx, row) in rows.iter().enumerate() {
        match plan_row(row) {
            Ok(job) => {
                for block in job.blocks(&format) {
                    debug!(code = %job.code, kind = %block.kind, quantity = block.quantity, "block");
                    parts.push(block.render());
                    summary.blocks += 1;
                }
            }
            Err(reason) => {
                // Data rows start on line 2, after the header.
                debug!(line = idx + 2, code = %row.code.trim(), "skipping row: {}", reason);
                summary.skipped += 1;
            }
        }
    }

    (parts.join(CRLF), summary)
}

/// The file is written as ASCII; anything else cannot be encoded.
pub fn ensure_ascii(content: &str) -> Result<(), OutputError> {
    for (idx, line) in content.split(CRLF).enumerate() {
        if let Some(ch) = line.chars().find(|c| !c.is_ascii()) {
            return Err(OutputError::NonAscii {
                ch,
                code: ch as u32,
                line: idx + 1,
            });
        }
    }
    Ok(())
}

/// Read `input`, convert every row and write the command file to `output`.
/// Nothing is written if the input cannot be read or the output would not be
/// plain ASCII.
pub fn convert_file(input: &Path, output: &Path, options: &Options) -> Result<Summary> {
    let file =
        File::open(input).with_context(|| format!("failed to open input {}", input.display()))?;
    let rows = read_rows(file, &options.columns)
        .with_context(|| format!("failed to read rows from {}", input.display()))?;

    let (content, summary) = render_document(&rows, options.markers);
    ensure_ascii(&content)
        .with_context(|| format!("cannot encode output for {}", output.display()))?;

    fs::write(output, content.as_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        markers = %options.markers,
        rows = summary.rows,
        skipped = summary.skipped,
        blocks = summary.blocks,
        "wrote {}",
        output.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_header_only() {
        let (doc, summary) = render_document(&[], MarkerStyle::Placeholder);
        let header = LabelFormat::default().header().join(CRLF);
        assert_eq!(doc, header);
        assert!(doc.ends_with("<STX>R<ETX>\r\n"));
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn blocks_follow_rows_in_order() {
        let rows = vec![
            InputRow::new("X1", "Widget", "3"),
            InputRow::new("", "orphan", "4"),
            InputRow::new("X2", "", "1"),
        ];
        let (doc, summary) = render_document(&rows, MarkerStyle::Placeholder);
        assert_eq!(
            summary,
            Summary {
                rows: 3,
                skipped: 1,
                blocks: 3
            }
        );
        let first = doc.find("<LF>X1<ETX>").unwrap();
        let second = doc.find("<LF>X2<ETX>").unwrap();
        assert!(first < second);
        assert!(!doc.contains("orphan"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let rows = vec![InputRow::new("A", "Some long description text here", "7")];
        let first = render_document(&rows, MarkerStyle::Placeholder);
        let second = render_document(&rows, MarkerStyle::Placeholder);
        assert_eq!(first, second);
    }

    #[test]
    fn non_ascii_is_reported_with_its_line() {
        assert!(ensure_ascii("plain\r\ntext").is_ok());
        let err = ensure_ascii("ok\r\nCAMIÓN").unwrap_err();
        let OutputError::NonAscii { ch, line, .. } = err;
        assert_eq!(ch, 'Ó');
        assert_eq!(line, 2);
    }
}
