//! `rpgkit_fixture` v1:
//! RPG sample workbooks for test fixtures.
//!
//! - `datasets`  : embedded literal datasets
//! - `generate`  : write datasets to workbook files
//! - `normalize` : in-place `ID` -> `Id` header pass over a directory
//! - `report`    : run-time report models
//! - `spec`      : dataset model, options, errors
//! - `util`      : pattern matching and path helpers

pub mod datasets;
pub mod generate;
pub mod normalize;
pub mod report;
pub mod spec;
mod util;

pub use datasets::{TUP_DATASET_KEYS, dataset, datasets};
pub use generate::generate_fixtures;
pub use normalize::{is_header_id_upper, normalize_dir, normalize_workbook};
pub use report::{ReportGenerate, ReportNormalize, ReportNormalizeBuilder, SpecNormalizedFile};
pub use spec::{
    C_DIR_NORMALIZE_DEFAULT, C_DIR_OUTPUT_DEFAULT, C_HEADER_ID_NORMALIZED, C_HEADER_ID_UPPER,
    FixtureError, SpecDataset, SpecGenerateOptions, SpecNormalizeOptions,
};
