//! In-place header normalization: `ID` -> `Id` in cell A1 of every sheet.

use std::path::Path;

use tracing::{debug, info};

use rpgkit_io_xlsx::{EnumCellValue, XlsxEditor, XlsxIoError};

use crate::report::{ReportNormalize, ReportNormalizeBuilder};
use crate::spec::{C_HEADER_ID_NORMALIZED, C_HEADER_ID_UPPER, FixtureError, SpecNormalizeOptions};
use crate::util::{SpecFilePatterns, list_dir_files};

/// Whether a first header cell must be rewritten.
///
/// Only a literal text cell reading exactly `ID` matches; `id`, `ID `, a
/// number, a formula or a blank cell do not.
pub fn is_header_id_upper(value: &EnumCellValue) -> bool {
    value.as_text() == Some(C_HEADER_ID_UPPER)
}

/// Rewrite A1 from `ID` to `Id` on every sheet of `editor`; return changed
/// sheet names.
///
/// No other cell is touched. The caller decides whether to save.
pub fn normalize_workbook(editor: &mut XlsxEditor) -> Result<Vec<String>, XlsxIoError> {
    let mut l_sheets_changed = Vec::new();
    for (n_idx_sheet, sheet_name) in editor.sheet_names().into_iter().enumerate() {
        if !is_header_id_upper(&editor.cell_value(n_idx_sheet, 0, 0)?) {
            continue;
        }
        editor.set_cell_text(n_idx_sheet, 0, 0, C_HEADER_ID_NORMALIZED)?;
        info!(sheet = %sheet_name, "Changed ID to Id in sheet {sheet_name}");
        l_sheets_changed.push(sheet_name);
    }
    Ok(l_sheets_changed)
}

/// Normalize every matching workbook directly inside `dir`, saving in place.
///
/// Files are processed one at a time in name order. A file that cannot be
/// opened or saved aborts the run.
pub fn normalize_dir<P>(dir: P, options: &SpecNormalizeOptions) -> Result<ReportNormalize, FixtureError>
where
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let spec_pats = SpecFilePatterns::from_raw(
        Some(options.patterns_include_files.as_slice()),
        options.patterns_exclude_files.as_deref(),
    )?;

    let mut builder = ReportNormalizeBuilder::default();
    for (path_file, name_file) in list_dir_files(dir)? {
        builder.add_scanned();
        if !path_file.is_file() || !spec_pats.is_selected(&name_file) {
            debug!(file = %name_file, "skipping entry");
            continue;
        }
        builder.add_matched();
        info!(file = %name_file, "Fixing {name_file}...");

        let mut editor =
            XlsxEditor::open(&path_file).map_err(|e| FixtureError::xlsx(&path_file, e))?;
        let l_sheets_changed =
            normalize_workbook(&mut editor).map_err(|e| FixtureError::xlsx(&path_file, e))?;

        if options.if_dry_run {
            debug!(file = %name_file, "dry run, not saving");
        } else {
            editor.save().map_err(|e| FixtureError::xlsx(&path_file, e))?;
            builder.add_saved();
            info!(file = %name_file, "{name_file} updated");
        }
        builder.add_renamed(path_file, l_sheets_changed);
    }

    Ok(builder.build())
}
