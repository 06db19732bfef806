//! Dataset model, run options and top-level error types.

use std::path::PathBuf;

use rpgkit_io_xlsx::{SpecTable, SpecWorkbook, SpecXlsxWriteOptions, XlsxIoError};

/// Default output directory for the generator.
pub const C_DIR_OUTPUT_DEFAULT: &str = ".";
/// Default target directory for the header normalizer.
pub const C_DIR_NORMALIZE_DEFAULT: &str = "test-data";
/// First-header text the normalizer looks for.
pub const C_HEADER_ID_UPPER: &str = "ID";
/// Replacement text written by the normalizer.
pub const C_HEADER_ID_NORMALIZED: &str = "Id";

////////////////////////////////////////////////////////////////////////////////
// #region Dataset

/// One fixture file: a key, a file name and its tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDataset {
    /// Short selector, e.g. `items`.
    pub key: String,
    /// File name written into the output directory.
    pub file_name: String,
    /// Tables in sheet order.
    pub workbook: SpecWorkbook,
}

impl SpecDataset {
    /// Create a dataset from its tables.
    pub fn new(key: &str, file_name: &str, tables: Vec<SpecTable>) -> Self {
        Self {
            key: key.to_string(),
            file_name: file_name.to_string(),
            workbook: SpecWorkbook::new(tables),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Input options for `generate_fixtures`.
#[derive(Debug, Clone)]
pub struct SpecGenerateOptions {
    /// Directory the workbooks are written into.
    pub dir_output: PathBuf,
    /// Dataset keys to generate; `None` generates all of them.
    pub datasets: Option<Vec<String>>,
    /// Create `dir_output` when missing.
    pub if_create_dir: bool,
    /// Workbook write options.
    pub write_options: SpecXlsxWriteOptions,
}

impl Default for SpecGenerateOptions {
    fn default() -> Self {
        Self {
            dir_output: PathBuf::from(C_DIR_OUTPUT_DEFAULT),
            datasets: None,
            if_create_dir: false,
            write_options: SpecXlsxWriteOptions::default(),
        }
    }
}

/// Input options for `normalize_dir`.
#[derive(Debug, Clone)]
pub struct SpecNormalizeOptions {
    /// Glob patterns a file basename must match.
    pub patterns_include_files: Vec<String>,
    /// Glob patterns that exclude a file basename.
    pub patterns_exclude_files: Option<Vec<String>>,
    /// Inspect and report without saving.
    pub if_dry_run: bool,
    /// Workbook write options used when re-saving.
    pub write_options: SpecXlsxWriteOptions,
}

impl Default for SpecNormalizeOptions {
    fn default() -> Self {
        Self {
            patterns_include_files: vec![format!("*.{}", rpgkit_io_xlsx::C_EXT_XLSX)],
            patterns_exclude_files: None,
            if_dry_run: false,
            write_options: SpecXlsxWriteOptions::default(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Top-level failures of a generate or normalize run.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Filesystem access failed.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Workbook read or write failed.
    #[error("workbook error at {}: {source}", .path.display())]
    Xlsx {
        /// Workbook path.
        path: PathBuf,
        /// Underlying workbook error.
        #[source]
        source: XlsxIoError,
    },
    /// Target path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotDirectory(PathBuf),
    /// Invalid include/exclude pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    /// Unknown dataset key.
    #[error("unknown dataset {0:?}")]
    UnknownDataset(String),
}

impl FixtureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn xlsx(path: impl Into<PathBuf>, source: XlsxIoError) -> Self {
        Self::Xlsx {
            path: path.into(),
            source,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
