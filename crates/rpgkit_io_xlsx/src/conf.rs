//! XLSX constants and default preset factories.

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Workbook file extension, without the leading dot.
pub const C_EXT_XLSX: &str = "xlsx";

/// Header row format: bold, otherwise workbook default.
pub fn derive_default_header_format() -> SpecCellFormat {
    SpecCellFormat {
        bold: Some(true),
        ..Default::default()
    }
}

/// Integer cell format.
pub fn derive_default_integer_format() -> SpecCellFormat {
    SpecCellFormat {
        num_format: Some("0".to_string()),
        ..Default::default()
    }
}

/// Decimal cell format. `General` shows every stored digit.
pub fn derive_default_decimal_format() -> SpecCellFormat {
    SpecCellFormat {
        num_format: Some("General".to_string()),
        ..Default::default()
    }
}
