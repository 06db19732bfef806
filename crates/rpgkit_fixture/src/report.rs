//! Run report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Summary of one `generate_fixtures` run.
#[derive(Debug, Default, Clone)]
pub struct ReportGenerate {
    /// Files written, in order.
    pub files: Vec<PathBuf>,
    /// Tables (sheets) written across all files.
    pub cnt_tables: u64,
    /// Data rows written across all tables, header excluded.
    pub cnt_rows: u64,
}

impl ReportGenerate {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_files".to_string(), self.files.len() as u64);
        dict_counts.insert("cnt_tables".to_string(), self.cnt_tables);
        dict_counts.insert("cnt_rows".to_string(), self.cnt_rows);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} files={} tables={} rows={}",
            dict_counts["cnt_files"], dict_counts["cnt_tables"], dict_counts["cnt_rows"]
        )
    }
}

impl fmt::Display for ReportGenerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[GENERATE]"))
    }
}

/// Sheets renamed in one workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecNormalizedFile {
    /// Workbook path.
    pub path: PathBuf,
    /// Sheets whose first header was rewritten.
    pub sheets: Vec<String>,
}

/// Aggregate counters for one `normalize_dir` run.
#[derive(Debug, Default, Clone)]
pub struct ReportNormalize {
    /// Directory entries inspected.
    pub cnt_scanned: u64,
    /// Files that matched the include/exclude filters.
    pub cnt_matched: u64,
    /// Workbooks written back to disk.
    pub cnt_saved: u64,
    /// Header cells rewritten across all workbooks.
    pub cnt_renamed: u64,
    /// Per-file rename details, only for files with at least one rename.
    pub files: Vec<SpecNormalizedFile>,
}

impl ReportNormalize {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_saved".to_string(), self.cnt_saved);
        dict_counts.insert("cnt_renamed".to_string(), self.cnt_renamed);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} scanned={} matched={} saved={} renamed={}",
            dict_counts["cnt_scanned"],
            dict_counts["cnt_matched"],
            dict_counts["cnt_saved"],
            dict_counts["cnt_renamed"]
        )
    }
}

impl fmt::Display for ReportNormalize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[NORMALIZE]"))
    }
}

/// Mutable accumulator for normalize statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportNormalizeBuilder {
    /// See [`ReportNormalize::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportNormalize::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportNormalize::cnt_saved`].
    pub cnt_saved: u64,
    /// See [`ReportNormalize::files`].
    pub files: Vec<SpecNormalizedFile>,
}

impl ReportNormalizeBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    /// Increment saved count by one.
    pub fn add_saved(&mut self) {
        self.cnt_saved += 1;
    }

    /// Record renamed sheets of one file. Empty lists are ignored.
    pub fn add_renamed(&mut self, path: PathBuf, sheets: Vec<String>) {
        if sheets.is_empty() {
            return;
        }
        self.files.push(SpecNormalizedFile { path, sheets });
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportNormalize {
        let cnt_renamed = self.files.iter().map(|f| f.sheets.len() as u64).sum();
        ReportNormalize {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_saved: self.cnt_saved,
            cnt_renamed,
            files: self.files,
        }
    }
}
