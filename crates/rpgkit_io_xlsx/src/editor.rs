//! In-place workbook editor backed by `umya-spreadsheet`.
//!
//! Unlike [`crate::writer`], the editor loads the whole package and writes it
//! back, so formulas, styles, merged ranges, column widths, sheet names and
//! sheet visibility survive a save. Only the cells set through the editor
//! change.

use std::path::PathBuf;

use umya_spreadsheet::{Cell, Spreadsheet, Worksheet, reader, writer};

use crate::reader::derive_number_value;
use crate::spec::{EnumCellValue, XlsxIoError};

/// Loaded workbook bound to the path it was read from.
pub struct XlsxEditor {
    path_file: PathBuf,
    book: Spreadsheet,
}

impl XlsxEditor {
    /// Load the workbook at `path_file`.
    pub fn open(path_file: impl Into<PathBuf>) -> Result<Self, XlsxIoError> {
        let path_file = path_file.into();
        let book = reader::xlsx::read(&path_file)
            .map_err(|err| XlsxIoError::Edit(format!("failed to open workbook: {err}")))?;
        Ok(Self { path_file, book })
    }

    /// Sheet names in workbook order, exactly as stored.
    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|worksheet| worksheet.get_name().to_string())
            .collect()
    }

    /// Cached value of one cell, 0-based `(row, col)`.
    ///
    /// Formula cells report [`EnumCellValue::Empty`]; their stored text is an
    /// expression, not a literal.
    pub fn cell_value(
        &self,
        n_idx_sheet: usize,
        row: usize,
        col: usize,
    ) -> Result<EnumCellValue, XlsxIoError> {
        let worksheet = self.worksheet(n_idx_sheet)?;
        let Some(cell) = worksheet.get_cell(derive_coordinate(row, col)?) else {
            return Ok(EnumCellValue::Empty);
        };
        Ok(derive_cell_value_from_cell(cell))
    }

    /// Overwrite one cell with a literal string, keeping its style.
    pub fn set_cell_text(
        &mut self,
        n_idx_sheet: usize,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), XlsxIoError> {
        let coordinate = derive_coordinate(row, col)?;
        let worksheet = self
            .book
            .get_sheet_collection_mut()
            .get_mut(n_idx_sheet)
            .ok_or(XlsxIoError::SheetIndex(n_idx_sheet))?;
        worksheet.get_cell_mut(coordinate).set_value_string(text);
        Ok(())
    }

    /// Write the workbook back to its source path.
    pub fn save(&self) -> Result<(), XlsxIoError> {
        writer::xlsx::write(&self.book, &self.path_file)
            .map_err(|err| XlsxIoError::Edit(format!("failed to save workbook: {err}")))
    }

    fn worksheet(&self, n_idx_sheet: usize) -> Result<&Worksheet, XlsxIoError> {
        self.book
            .get_sheet_collection()
            .get(n_idx_sheet)
            .ok_or(XlsxIoError::SheetIndex(n_idx_sheet))
    }
}

/// `umya` addresses cells as 1-based `(col, row)`.
fn derive_coordinate(row: usize, col: usize) -> Result<(u32, u32), XlsxIoError> {
    let cast = |value: usize| {
        u32::try_from(value + 1)
            .map_err(|_| XlsxIoError::InvalidTable(format!("cell index overflow: {value}")))
    };
    Ok((cast(col)?, cast(row)?))
}

fn derive_cell_value_from_cell(cell: &Cell) -> EnumCellValue {
    if cell.is_formula() {
        return EnumCellValue::Empty;
    }
    let value = cell.get_value();
    match cell.get_data_type() {
        "s" | "str" | "inlineStr" => EnumCellValue::Text(value.to_string()),
        "n" => value
            .parse::<f64>()
            .map(derive_number_value)
            .unwrap_or_else(|_| EnumCellValue::Text(value.to_string())),
        "b" => EnumCellValue::Boolean(matches!(&*value, "TRUE" | "1")),
        _ if value.is_empty() => EnumCellValue::Empty,
        _ => EnumCellValue::Text(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{SpecTable, SpecWorkbook, cells, read_workbook, write_workbook};

    fn write_sample(path: &Path) {
        let workbook = SpecWorkbook::new(vec![
            SpecTable::new("Weapons", cells!["ID", "Name", "Damage"])
                .with_rows(vec![cells![1, "Iron Sword", 2.5]]),
            SpecTable::new("Armor", cells!["Id", "Name"]),
        ]);
        write_workbook(path, &workbook, &Default::default()).expect("write");
    }

    #[test]
    fn test_cell_value_reads_typed_cells() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("items.xlsx");
        write_sample(&path);

        let editor = XlsxEditor::open(&path).expect("open");
        assert_eq!(editor.sheet_names(), ["Weapons", "Armor"]);
        assert_eq!(editor.cell_value(0, 0, 0).expect("A1"), EnumCellValue::from("ID"));
        assert_eq!(editor.cell_value(0, 1, 0).expect("A2"), EnumCellValue::Integer(1));
        assert_eq!(editor.cell_value(0, 1, 2).expect("C2"), EnumCellValue::Decimal(2.5));
        assert_eq!(editor.cell_value(0, 5, 5).expect("F6"), EnumCellValue::Empty);
        assert!(matches!(
            editor.cell_value(2, 0, 0),
            Err(XlsxIoError::SheetIndex(2))
        ));
    }

    #[test]
    fn test_set_cell_text_changes_only_that_cell() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("items.xlsx");
        write_sample(&path);
        let workbook_before = read_workbook(&path).expect("read");

        let mut editor = XlsxEditor::open(&path).expect("open");
        editor.set_cell_text(0, 0, 0, "Id").expect("set");
        editor.save().expect("save");

        let workbook_after = read_workbook(&path).expect("read");
        assert_eq!(workbook_after.sheet_names(), workbook_before.sheet_names());
        let table_after = &workbook_after.tables[0];
        let table_before = &workbook_before.tables[0];
        assert_eq!(table_after.header, cells!["Id", "Name", "Damage"]);
        assert_eq!(table_after.rows, table_before.rows);
        assert_eq!(workbook_after.tables[1], workbook_before.tables[1]);
    }

    #[test]
    fn test_open_rejects_non_workbook() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip").expect("write");
        assert!(matches!(XlsxEditor::open(&path), Err(XlsxIoError::Edit(_))));
    }
}
