//! Shared XLSX specification models.

use std::fmt;

use crate::conf::{
    derive_default_decimal_format, derive_default_header_format, derive_default_integer_format,
};

////////////////////////////////////////////////////////////////////////////////
// #region CellValue

/// Typed cell value as it travels between tables and workbook files.
///
/// The file format stores integers and decimals alike as numbers, so numeric
/// variants compare by value: `Integer(3) == Decimal(3.0)`.
#[derive(Debug, Clone, Default)]
pub enum EnumCellValue {
    /// Missing/blank cell.
    #[default]
    Empty,
    /// Whole number.
    Integer(i64),
    /// Fractional number.
    Decimal(f64),
    /// Text value.
    Text(String),
    /// Boolean value.
    Boolean(bool),
}

impl EnumCellValue {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Decimal(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view of the cell, if it holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the cell is blank.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl PartialEq for EnumCellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl fmt::Display for EnumCellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<i32> for EnumCellValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for EnumCellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for EnumCellValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Build a `Vec<EnumCellValue>` from mixed literals.
///
/// ```
/// use rpgkit_io_xlsx::{cells, EnumCellValue};
///
/// let row = cells![1, "Iron Sword", 3.5];
/// assert_eq!(row[0], EnumCellValue::Integer(1));
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::EnumCellValue::from($value)),*]
    };
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableAndWorkbook

/// Named grid: one header row followed by data rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecTable {
    /// Sheet title.
    pub name: String,
    /// Header row.
    pub header: Vec<EnumCellValue>,
    /// Data rows, positionally aligned with `header`.
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecTable {
    /// Create an empty-bodied table with the given header.
    pub fn new(name: impl Into<String>, header: Vec<EnumCellValue>) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Builder-style row append.
    pub fn with_rows(mut self, rows: Vec<Vec<EnumCellValue>>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Header column count.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Data row count (header excluded).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row across header and body.
    pub fn width_max(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .fold(self.header.len(), usize::max)
    }

    /// First header cell (A1), if present.
    pub fn first_header(&self) -> Option<&EnumCellValue> {
        self.header.first()
    }

    /// Header cells rendered as text.
    pub fn header_texts(&self) -> Vec<String> {
        self.header.iter().map(ToString::to_string).collect()
    }

    /// Indices of data rows whose length differs from the header.
    pub fn ragged_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != self.header.len())
            .map(|(n_idx, _)| n_idx)
            .collect()
    }
}

/// Ordered tables saved as one file; the first is the active sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecWorkbook {
    /// Tables in sheet order.
    pub tables: Vec<SpecTable>,
}

impl SpecWorkbook {
    /// Create workbook from tables.
    pub fn new(tables: Vec<SpecTable>) -> Self {
        Self { tables }
    }

    /// Sheet names in order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a table by sheet name.
    pub fn table(&self, name: &str) -> Option<&SpecTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Active (first) table.
    pub fn active(&self) -> Option<&SpecTable> {
        self.tables.first()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Italic style.
    pub italic: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<String>,
    /// Text wrap.
    pub text_wrap: Option<bool>,
    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color.
    pub bg_color: Option<String>,
    /// Font color.
    pub font_color: Option<String>,
}

impl SpecCellFormat {
    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            align: other.align.clone().or_else(|| self.align.clone()),
            text_wrap: other.text_wrap.or(self.text_wrap),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
            font_color: other.font_color.clone().or_else(|| self.font_color.clone()),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Autofit rule for column width inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Disable autofit.
    None,
    /// Infer width from header cells only (default).
    #[default]
    Header,
    /// Infer width from body cells only.
    Body,
    /// Infer width from both header and body cells.
    All,
}

/// Autofit policy for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Autofit width inference rule.
    pub rule_columns: EnumAutofitColumnsRule,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::Header,
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

/// Writer-wide options controlling formats and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecXlsxWriteOptions {
    /// Header row format.
    pub fmt_header: SpecCellFormat,
    /// Format for text and boolean cells.
    pub fmt_text: SpecCellFormat,
    /// Format for integer cells, overlaid on `fmt_text`.
    pub fmt_integer: SpecCellFormat,
    /// Format for decimal cells, overlaid on `fmt_text`.
    pub fmt_decimal: SpecCellFormat,
    /// Column autofit policy.
    pub policy_autofit: SpecAutofitCellsPolicy,
    /// Freeze the header row.
    pub if_freeze_header: bool,
}

impl Default for SpecXlsxWriteOptions {
    fn default() -> Self {
        Self {
            fmt_header: derive_default_header_format(),
            fmt_text: SpecCellFormat::default(),
            fmt_integer: derive_default_integer_format(),
            fmt_decimal: derive_default_decimal_format(),
            policy_autofit: SpecAutofitCellsPolicy::default(),
            if_freeze_header: true,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Workbook read/write failures.
#[derive(Debug, thiserror::Error)]
pub enum XlsxIoError {
    /// Serialization or save failure.
    #[error("xlsx write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    /// Workbook could not be opened or parsed.
    #[error("xlsx read error: {0}")]
    Read(#[from] calamine::Error),
    /// One worksheet could not be read.
    #[error("failed to read sheet {name:?}: {message}")]
    Sheet {
        /// Sheet name.
        name: String,
        /// Underlying error text.
        message: String,
    },
    /// Table does not fit workbook structural limits.
    #[error("invalid table: {0}")]
    InvalidTable(String),
    /// In-place edit could not load or save the workbook.
    #[error("xlsx edit error: {0}")]
    Edit(String),
    /// In-place edit addressed a sheet index the workbook does not have.
    #[error("sheet index out of range: {0}")]
    SheetIndex(usize),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cells_compare_by_value() {
        assert_eq!(EnumCellValue::Integer(3), EnumCellValue::Decimal(3.0));
        assert_ne!(EnumCellValue::Integer(3), EnumCellValue::Decimal(3.5));
        assert_ne!(EnumCellValue::Integer(1), EnumCellValue::Text("1".to_string()));
        assert_ne!(EnumCellValue::Empty, EnumCellValue::Text(String::new()));
    }

    #[test]
    fn test_cells_macro_infers_variants() {
        let row = cells![1, "Iron Sword", 3.5, true];
        assert_eq!(
            row,
            vec![
                EnumCellValue::Integer(1),
                EnumCellValue::Text("Iron Sword".to_string()),
                EnumCellValue::Decimal(3.5),
                EnumCellValue::Boolean(true),
            ]
        );
    }

    #[test]
    fn test_ragged_rows_reports_misaligned_rows() {
        let table = SpecTable::new("T", cells!["ID", "Name"]).with_rows(vec![
            cells![1, "A"],
            cells![2],
            cells![3, "C", "extra"],
        ]);
        assert_eq!(table.ragged_rows(), vec![1, 2]);
        assert_eq!(table.width(), 2);
        assert_eq!(table.width_max(), 3);
        assert_eq!(table.height(), 3);
    }

    #[test]
    fn test_default_decimal_format_keeps_all_digits() {
        let write_options = SpecXlsxWriteOptions::default();
        assert_eq!(write_options.fmt_decimal.num_format.as_deref(), Some("General"));
        let fmt_body = write_options.fmt_text.merge(&write_options.fmt_decimal);
        assert_eq!(fmt_body.num_format.as_deref(), Some("General"));
        assert_eq!(fmt_body.bold, None);
    }

    #[test]
    fn test_format_merge_prefers_patch() {
        let fmt_base = SpecCellFormat {
            bold: Some(false),
            num_format: Some("0".to_string()),
            ..Default::default()
        };
        let fmt = fmt_base.merge(&SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        });
        assert_eq!(fmt.bold, Some(true));
        assert_eq!(fmt.num_format.as_deref(), Some("0"));
    }
}
