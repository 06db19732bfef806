//! XLSX writer kernel that serializes tables into workbook output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};

use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecTable, SpecWorkbook, SpecXlsxWriteOptions, XlsxIoError,
};
use crate::util::{
    derive_unique_sheet_name, plan_column_widths, sanitize_sheet_name, validate_table_limits,
};

/// Resolved `rust_xlsxwriter` formats for one writer.
struct SpecCellFormatSet {
    fmt_header: Format,
    fmt_text: Format,
    fmt_integer: Format,
    fmt_decimal: Format,
}

impl SpecCellFormatSet {
    fn from_options(write_options: &SpecXlsxWriteOptions) -> Self {
        let fmt_body = &write_options.fmt_text;
        Self {
            fmt_header: derive_rust_xlsx_format(&write_options.fmt_header),
            fmt_text: derive_rust_xlsx_format(fmt_body),
            fmt_integer: derive_rust_xlsx_format(&fmt_body.merge(&write_options.fmt_integer)),
            fmt_decimal: derive_rust_xlsx_format(&fmt_body.merge(&write_options.fmt_decimal)),
        }
    }

    fn select(&self, value: &EnumCellValue) -> &Format {
        match value {
            EnumCellValue::Integer(_) => &self.fmt_integer,
            EnumCellValue::Decimal(_) => &self.fmt_decimal,
            _ => &self.fmt_text,
        }
    }
}

/// Stateful workbook writer.
///
/// Tables are buffered in memory until [`Self::close`] is called.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    write_options: SpecXlsxWriteOptions,
    formats: SpecCellFormatSet,
    l_sheet_names: Vec<String>,
    set_sheet_names_existing: BTreeSet<String>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path and options.
    pub fn new(path_file_out: impl Into<PathBuf>, write_options: SpecXlsxWriteOptions) -> Self {
        let formats = SpecCellFormatSet::from_options(&write_options);
        Self {
            path_file_out: path_file_out.into(),
            workbook: Workbook::new(),
            write_options,
            formats,
            l_sheet_names: Vec::new(),
            set_sheet_names_existing: BTreeSet::new(),
            if_closed: false,
        }
    }

    /// Sheet names written so far, in order.
    pub fn sheet_names(&self) -> &[String] {
        &self.l_sheet_names
    }

    /// Flush workbook to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxIoError> {
        if self.if_closed {
            return Ok(());
        }
        if self.l_sheet_names.is_empty() {
            return Err(XlsxIoError::InvalidTable(
                "workbook must contain at least one table.".to_string(),
            ));
        }
        self.workbook.save(&self.path_file_out)?;
        self.if_closed = true;
        Ok(())
    }

    /// Write one table as a new sheet. Returns the sheet name actually used.
    pub fn write_table(&mut self, table: &SpecTable) -> Result<String, XlsxIoError> {
        if self.if_closed {
            return Err(XlsxIoError::InvalidTable(
                "cannot write after close().".to_string(),
            ));
        }
        validate_table_limits(table).map_err(XlsxIoError::InvalidTable)?;

        let sheet_name_unique = derive_unique_sheet_name(
            &sanitize_sheet_name(&table.name, "_"),
            &mut self.set_sheet_names_existing,
        );
        let l_widths = plan_column_widths(table, &self.write_options.policy_autofit);

        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet_name_unique)?;

        write_row(worksheet, 0, &table.header, |_| &self.formats.fmt_header)?;
        for (n_idx_row, row) in table.rows.iter().enumerate() {
            write_row(worksheet, n_idx_row + 1, row, |value| {
                self.formats.select(value)
            })?;
        }

        if self.write_options.if_freeze_header && !table.header.is_empty() {
            worksheet.set_freeze_panes(1, 0)?;
        }
        if let Some(l_widths) = l_widths {
            for (n_idx_col, n_width) in l_widths.into_iter().enumerate() {
                worksheet.set_column_width(cast_col_num(n_idx_col)?, n_width)?;
            }
        }

        self.l_sheet_names.push(sheet_name_unique.clone());
        Ok(sheet_name_unique)
    }
}

/// Write all tables of `workbook` to `path`, replacing any existing file.
pub fn write_workbook(
    path: impl AsRef<Path>,
    workbook: &SpecWorkbook,
    write_options: &SpecXlsxWriteOptions,
) -> Result<(), XlsxIoError> {
    let mut writer = XlsxWriter::new(path.as_ref(), write_options.clone());
    for table in &workbook.tables {
        writer.write_table(table)?;
    }
    writer.close()
}

fn write_row<'a>(
    worksheet: &mut Worksheet,
    row_idx: usize,
    row_values: &[EnumCellValue],
    select_format: impl Fn(&EnumCellValue) -> &'a Format,
) -> Result<(), XlsxIoError> {
    let n_row = cast_row_num(row_idx)?;
    for (col_idx, value) in row_values.iter().enumerate() {
        let n_col = cast_col_num(col_idx)?;
        let format = select_format(value);
        match value {
            EnumCellValue::Empty => {}
            EnumCellValue::Text(val) => {
                worksheet.write_string_with_format(n_row, n_col, val, format)?;
            }
            EnumCellValue::Integer(val) => {
                worksheet.write_number_with_format(n_row, n_col, *val as f64, format)?;
            }
            EnumCellValue::Decimal(val) => {
                worksheet.write_number_with_format(n_row, n_col, *val, format)?;
            }
            EnumCellValue::Boolean(val) => {
                worksheet.write_boolean_with_format(n_row, n_col, *val, format)?;
            }
        }
    }
    Ok(())
}

fn derive_rust_xlsx_format(fmt_spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &fmt_spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = fmt_spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if fmt_spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if fmt_spec.italic.unwrap_or(false) {
        format = format.set_italic();
    }
    if let Some(val) = &fmt_spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &fmt_spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &fmt_spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = &fmt_spec.font_color {
        format = format.set_font_color(val.as_str());
    }
    if fmt_spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "fill" => Some(FormatAlign::Fill),
        "justify" => Some(FormatAlign::Justify),
        _ => None,
    }
}

fn cast_row_num(value: usize) -> Result<u32, XlsxIoError> {
    u32::try_from(value)
        .map_err(|_| XlsxIoError::InvalidTable(format!("row index overflow: {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, XlsxIoError> {
    u16::try_from(value)
        .map_err(|_| XlsxIoError::InvalidTable(format!("column index overflow: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells;

    #[test]
    fn test_close_without_tables_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = XlsxWriter::new(dir.path().join("empty.xlsx"), Default::default());
        assert!(matches!(writer.close(), Err(XlsxIoError::InvalidTable(_))));
        assert!(!dir.path().join("empty.xlsx").exists());
    }

    #[test]
    fn test_write_after_close_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = XlsxWriter::new(dir.path().join("one.xlsx"), Default::default());
        let table = SpecTable::new("One", cells!["ID"]).with_rows(vec![cells![1]]);
        writer.write_table(&table).expect("write");
        writer.close().expect("close");
        writer.close().expect("close twice");
        assert!(writer.write_table(&table).is_err());
        assert!(dir.path().join("one.xlsx").is_file());
    }

    #[test]
    fn test_duplicate_and_illegal_sheet_names_are_fixed_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = XlsxWriter::new(dir.path().join("names.xlsx"), Default::default());
        writer
            .write_table(&SpecTable::new("Loot", cells!["ID"]))
            .expect("write");
        writer
            .write_table(&SpecTable::new("Loot", cells!["ID"]))
            .expect("write");
        writer
            .write_table(&SpecTable::new("Loot/Drops", cells!["ID"]))
            .expect("write");
        assert_eq!(writer.sheet_names(), ["Loot", "Loot__2", "Loot_Drops"]);
    }

    #[test]
    fn test_derive_format_align_is_case_insensitive() {
        assert_eq!(derive_format_align(" Center "), Some(FormatAlign::Center));
        assert_eq!(derive_format_align("diagonal"), None);
    }
}
