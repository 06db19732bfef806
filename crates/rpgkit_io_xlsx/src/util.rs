//! Stateless helper utilities used by the XLSX writer and reader.

use std::collections::BTreeSet;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::{EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecTable};

////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Return `name` if unused, otherwise the first free `name__N` (N >= 2).
///
/// The chosen name is recorded in `set_names_existing`.
pub fn derive_unique_sheet_name(name: &str, set_names_existing: &mut BTreeSet<String>) -> String {
    if !set_names_existing.contains(name) {
        set_names_existing.insert(name.to_string());
        return name.to_string();
    }

    let base_name: String = name
        .chars()
        .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
        .collect();

    let mut n_idx = 2usize;
    loop {
        let candidate: String = format!("{base_name}__{n_idx}")
            .chars()
            .take(N_LEN_EXCEL_SHEET_NAME_MAX)
            .collect();
        if !set_names_existing.contains(&candidate) {
            set_names_existing.insert(candidate.clone());
            return candidate;
        }
        n_idx += 1;
    }
}

/// Check that a table fits in one worksheet.
pub fn validate_table_limits(table: &SpecTable) -> Result<(), String> {
    let n_rows_total = table.height() + 1;
    if n_rows_total > N_NROWS_EXCEL_MAX {
        return Err(format!(
            "table {:?} has {n_rows_total} rows including header; Excel limit is {N_NROWS_EXCEL_MAX}.",
            table.name
        ));
    }
    let n_cols = table.width_max();
    if n_cols > N_NCOLS_EXCEL_MAX {
        return Err(format!(
            "table {:?} has {n_cols} columns; Excel limit is {N_NCOLS_EXCEL_MAX}.",
            table.name
        ));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Autofit

/// Estimate displayed width units for one cell value.
pub fn estimate_width_len(value: &EnumCellValue) -> usize {
    match value {
        EnumCellValue::Empty => 0,
        EnumCellValue::Text(s) => estimate_unicode_string_width(s),
        other => other.to_string().len(),
    }
}

fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Plan final column widths for a table, or `None` when autofit is disabled.
pub fn plan_column_widths(table: &SpecTable, policy: &SpecAutofitCellsPolicy) -> Option<Vec<f64>> {
    if matches!(policy.rule_columns, EnumAutofitColumnsRule::None) {
        return None;
    }

    let n_width = table.width_max();
    let mut l_width_by_col_header = vec![0usize; n_width];
    let mut l_width_by_col_body = vec![0usize; n_width];

    for (n_idx_col, value) in table.header.iter().enumerate() {
        l_width_by_col_header[n_idx_col] = estimate_width_len(value);
    }
    if matches!(
        policy.rule_columns,
        EnumAutofitColumnsRule::Body | EnumAutofitColumnsRule::All
    ) {
        for row in &table.rows {
            for (n_idx_col, value) in row.iter().enumerate() {
                l_width_by_col_body[n_idx_col] =
                    usize::max(l_width_by_col_body[n_idx_col], estimate_width_len(value));
            }
        }
    }

    let n_min = usize::max(1, policy.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy.width_cell_max));
    let n_pad = policy.width_cell_padding;

    let l_widths = (0..n_width)
        .map(|n_idx_col| {
            let n_width_recorded = match policy.rule_columns {
                EnumAutofitColumnsRule::Body => l_width_by_col_body[n_idx_col],
                EnumAutofitColumnsRule::All => usize::max(
                    l_width_by_col_header[n_idx_col],
                    l_width_by_col_body[n_idx_col],
                ),
                EnumAutofitColumnsRule::Header | EnumAutofitColumnsRule::None => {
                    l_width_by_col_header[n_idx_col]
                }
            };
            usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad)) as f64
        })
        .collect();

    Some(l_widths)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
