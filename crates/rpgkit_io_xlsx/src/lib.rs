//! `rpgkit_io_xlsx` v1:
//! Table model and XLSX read/write kernel.
//!
//! - `conf`   : constants and default presets
//! - `spec`   : table/workbook models, options, errors
//! - `util`   : pure helper functions
//! - `writer` : `rust_xlsxwriter`-backed writer
//! - `reader` : `calamine`-backed reader
//! - `editor` : `umya-spreadsheet`-backed in-place editor
pub mod conf;
pub mod editor;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_EXT_XLSX, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL,
};
pub use editor::XlsxEditor;
pub use reader::read_workbook;
pub use spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecTable,
    SpecWorkbook, SpecXlsxWriteOptions, XlsxIoError,
};
pub use util::{derive_unique_sheet_name, plan_column_widths, sanitize_sheet_name};
pub use writer::{XlsxWriter, write_workbook};
