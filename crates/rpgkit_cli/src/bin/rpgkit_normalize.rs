//! Rename an `ID` first header to `Id` in every workbook of a directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rpgkit_fixture::{C_DIR_NORMALIZE_DEFAULT, SpecNormalizeOptions, normalize_dir};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the workbooks
    #[arg(short, long, default_value = C_DIR_NORMALIZE_DEFAULT)]
    dir: PathBuf,

    /// Skip files whose name matches this glob (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Report what would change without saving
    #[arg(long)]
    dry_run: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rpgkit_cli::init_tracing(cli.quiet);

    let options = SpecNormalizeOptions {
        patterns_exclude_files: if cli.exclude.is_empty() {
            None
        } else {
            Some(cli.exclude)
        },
        if_dry_run: cli.dry_run,
        ..Default::default()
    };
    let report = normalize_dir(&cli.dir, &options)
        .with_context(|| format!("failed to normalize workbooks in {}", cli.dir.display()))?;

    info!("{report}");
    info!("All files fixed!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_targets_test_data() {
        let cli = Cli::try_parse_from(["rpgkit-normalize"]).expect("parse");
        assert_eq!(cli.dir, PathBuf::from("test-data"));
        assert!(cli.exclude.is_empty());
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "rpgkit-normalize",
            "--dir",
            "fixtures",
            "--exclude",
            "~$*",
            "--dry-run",
            "-q",
        ])
        .expect("parse");
        assert_eq!(cli.dir, PathBuf::from("fixtures"));
        assert_eq!(cli.exclude, ["~$*"]);
        assert!(cli.dry_run);
        assert!(cli.quiet);
    }
}
