//! Workbook reader: loads every sheet of a file into [`SpecWorkbook`].

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::spec::{EnumCellValue, SpecTable, SpecWorkbook, XlsxIoError};

/// Read all sheets of the workbook at `path`.
///
/// The file handle is released before this returns, so the caller may
/// overwrite the same path.
pub fn read_workbook(path: impl AsRef<Path>) -> Result<SpecWorkbook, XlsxIoError> {
    let mut workbook = open_workbook_auto(path.as_ref())?;

    let l_sheet_names = workbook.sheet_names();
    let mut l_tables = Vec::with_capacity(l_sheet_names.len());
    for sheet_name in l_sheet_names {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|err| XlsxIoError::Sheet {
                name: sheet_name.clone(),
                message: err.to_string(),
            })?;
        l_tables.push(derive_table_from_range(sheet_name, &range));
    }

    Ok(SpecWorkbook::new(l_tables))
}

/// Convert a sheet range into a table anchored at A1.
///
/// Row 1 becomes the header. Leading blank rows/columns are kept as
/// [`EnumCellValue::Empty`], so `header[0]` is always cell A1.
pub fn derive_table_from_range(name: String, range: &Range<Data>) -> SpecTable {
    let Some((n_row_end, n_col_end)) = range.end() else {
        return SpecTable::new(name, Vec::new());
    };
    if range.is_empty() {
        return SpecTable::new(name, Vec::new());
    }

    let mut l_grid: Vec<Vec<EnumCellValue>> = (0..=n_row_end)
        .map(|n_row| {
            let mut l_row: Vec<EnumCellValue> = (0..=n_col_end)
                .map(|n_col| {
                    range
                        .get_value((n_row, n_col))
                        .map(derive_cell_value_from_data)
                        .unwrap_or_default()
                })
                .collect();
            while l_row.last().is_some_and(EnumCellValue::is_empty) {
                l_row.pop();
            }
            l_row
        })
        .collect();

    let l_header = l_grid.remove(0);
    SpecTable::new(name, l_header).with_rows(l_grid)
}

/// Map one calamine cell onto [`EnumCellValue`].
///
/// Whole-valued floats become integers; date-times become their serial number.
pub fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::Empty,
        Data::Int(n) => EnumCellValue::Integer(*n),
        Data::Float(n) => derive_number_value(*n),
        Data::String(s) => EnumCellValue::Text(s.clone()),
        Data::Bool(b) => EnumCellValue::Boolean(*b),
        Data::DateTime(dt) => EnumCellValue::Decimal(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => EnumCellValue::Text(s.clone()),
        Data::Error(err) => EnumCellValue::Text(err.to_string()),
    }
}

pub(crate) fn derive_number_value(n: f64) -> EnumCellValue {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        EnumCellValue::Integer(n as i64)
    } else {
        EnumCellValue::Decimal(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_floats_read_back_as_integers() {
        assert_eq!(
            derive_cell_value_from_data(&Data::Float(25.0)),
            EnumCellValue::Integer(25)
        );
        assert!(matches!(
            derive_cell_value_from_data(&Data::Float(3.5)),
            EnumCellValue::Decimal(n) if n == 3.5
        ));
        assert!(matches!(
            derive_cell_value_from_data(&Data::Float(f64::NAN)),
            EnumCellValue::Decimal(_)
        ));
    }

    #[test]
    fn test_range_is_anchored_at_a1() {
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Name".to_string()));
        range.set_value((2, 1), Data::String("X".to_string()));
        range.set_value((2, 2), Data::Float(1.0));

        let table = derive_table_from_range("S".to_string(), &range);
        assert!(table.header.is_empty());
        assert_eq!(table.first_header(), None);
        assert_eq!(
            table.rows,
            vec![
                vec![EnumCellValue::Empty, "Name".into()],
                vec![EnumCellValue::Empty, "X".into(), EnumCellValue::Integer(1)],
            ]
        );
    }

    #[test]
    fn test_empty_range_yields_empty_table() {
        let range: Range<Data> = Range::empty();
        let table = derive_table_from_range("Blank".to_string(), &range);
        assert_eq!(table.name, "Blank");
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }
}
