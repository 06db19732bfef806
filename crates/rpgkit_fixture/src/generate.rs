//! Fixture generation: write the embedded datasets as workbook files.

use tracing::{debug, info};

use rpgkit_io_xlsx::write_workbook;

use crate::datasets::{dataset, datasets};
use crate::report::ReportGenerate;
use crate::spec::{FixtureError, SpecDataset, SpecGenerateOptions};
use crate::util::prepare_output_dir;

/// Write the selected datasets into `options.dir_output`.
///
/// Existing files are overwritten. The first write failure aborts the run;
/// files written before it are left in place.
pub fn generate_fixtures(options: &SpecGenerateOptions) -> Result<ReportGenerate, FixtureError> {
    let l_datasets = select_datasets(options.datasets.as_deref())?;
    prepare_output_dir(&options.dir_output, options.if_create_dir)?;

    let mut report = ReportGenerate::default();
    for spec_dataset in l_datasets {
        let path_file_out = options.dir_output.join(&spec_dataset.file_name);
        debug!(
            file = %path_file_out.display(),
            sheets = ?spec_dataset.workbook.sheet_names(),
            "writing dataset"
        );
        write_workbook(&path_file_out, &spec_dataset.workbook, &options.write_options)
            .map_err(|e| FixtureError::xlsx(&path_file_out, e))?;
        info!(file = %spec_dataset.file_name, "Created {}", spec_dataset.file_name);

        report.cnt_tables += spec_dataset.workbook.tables.len() as u64;
        report.cnt_rows += spec_dataset
            .workbook
            .tables
            .iter()
            .map(|t| t.height() as u64)
            .sum::<u64>();
        report.files.push(path_file_out);
    }

    Ok(report)
}

/// Resolve dataset keys, keeping generation order and dropping duplicates.
fn select_datasets(keys: Option<&[String]>) -> Result<Vec<SpecDataset>, FixtureError> {
    let Some(keys) = keys else {
        return Ok(datasets());
    };

    for c_key in keys {
        if dataset(c_key).is_none() {
            return Err(FixtureError::UnknownDataset(c_key.clone()));
        }
    }
    Ok(datasets()
        .into_iter()
        .filter(|d| keys.contains(&d.key))
        .collect())
}
