use crate::columns::ColumnMap;
use crate::commands::{CommandBlock, LabelFormat};
use crate::layout::{DESCRIPTION_WIDTH, LabelLines, split_description};
use std::io;
use thiserror::Error;

/// Raw values of one data row, looked up by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    pub code: String,
    pub description: String,
    pub quantity: String,
}

impl InputRow {
    pub fn new<C, D, Q>(code: C, description: D, quantity: Q) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        Q: Into<String>,
    {
        Self {
            code: code.into(),
            description: description.into(),
            quantity: quantity.into(),
        }
    }
}

/// Why a row produced no labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("quantity '{0}' is not an integer")]
    InvalidQuantity(String),
    #[error("quantity {0} is not positive")]
    NonPositiveQuantity(i64),
    #[error("item code is empty")]
    MissingCode,
}

/// A validated row, ready to be turned into command blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelJob {
    pub code: String,
    pub lines: LabelLines,
    pub quantity: u64,
}

impl LabelJob {
    /// One main block for all copies but the last, then a residual block for
    /// the last one. A single copy is printed by a main block alone.
    pub fn blocks(&self, format: &LabelFormat) -> Vec<CommandBlock> {
        if self.quantity > 1 {
            vec![
                format.main_block(&self.code, &self.lines, self.quantity - 1),
                format.residual_block(&self.code, &self.lines),
            ]
        } else {
            vec![format.main_block(&self.code, &self.lines, self.quantity)]
        }
    }
}

/// Validate a row. The quantity is checked before the code.
pub fn plan_row(row: &InputRow) -> Result<LabelJob, SkipReason> {
    let code = row.code.trim();
    let quantity_text = row.quantity.trim();
    let quantity: i64 = quantity_text
        .parse()
        .map_err(|_| SkipReason::InvalidQuantity(quantity_text.to_string()))?;
    if quantity <= 0 {
        return Err(SkipReason::NonPositiveQuantity(quantity));
    }
    if code.is_empty() {
        return Err(SkipReason::MissingCode);
    }

    Ok(LabelJob {
        code: code.to_string(),
        lines: split_description(&row.description, DESCRIPTION_WIDTH),
        quantity: quantity as u64,
    })
}

/// Read tab-separated rows. The first record names the columns; absent
/// columns and short rows yield empty values.
pub fn read_rows<R: io::Read>(
    reader: R,
    columns: &ColumnMap,
) -> Result<Vec<InputRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    // A repeated header resolves to its last column.
    let locate = |name: &str| {
        headers
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .map(|(idx, _)| idx)
            .last()
    };
    let code_idx = locate(columns.code.as_str());
    let description_idx = locate(columns.description.as_str());
    let quantity_idx = locate(columns.quantity.as_str());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        rows.push(InputRow {
            code: field(code_idx),
            description: field(description_idx),
            quantity: field(quantity_idx),
        });
    }
    Ok(rows)
}
