//! Write the RPG sample workbooks (characters, items, skills, monsters, quests).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use rpgkit_fixture::{C_DIR_OUTPUT_DEFAULT, SpecGenerateOptions, TUP_DATASET_KEYS, generate_fixtures};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory
    #[arg(short, long, default_value = C_DIR_OUTPUT_DEFAULT)]
    dir: PathBuf,

    /// Only write these datasets (repeatable); defaults to all
    #[arg(long = "dataset", value_parser = clap::builder::PossibleValuesParser::new(TUP_DATASET_KEYS))]
    datasets: Vec<String>,

    /// Create the output directory if it does not exist
    #[arg(long)]
    create_dir: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rpgkit_cli::init_tracing(cli.quiet);

    let options = SpecGenerateOptions {
        dir_output: cli.dir.clone(),
        datasets: if cli.datasets.is_empty() {
            None
        } else {
            Some(cli.datasets)
        },
        if_create_dir: cli.create_dir,
        ..Default::default()
    };
    let report = generate_fixtures(&options)
        .with_context(|| format!("failed to generate fixtures in {}", cli.dir.display()))?;

    info!("{report}");
    info!("All RPG Excel files created successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_writes_all_datasets_into_cwd() {
        let cli = Cli::try_parse_from(["rpgkit-generate"]).expect("parse");
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(cli.datasets.is_empty());
        assert!(!cli.create_dir);
    }

    #[test]
    fn test_dataset_flag_accepts_known_keys_only() {
        let cli = Cli::try_parse_from(["rpgkit-generate", "--dataset", "items", "--dataset", "quests"])
            .expect("parse");
        assert_eq!(cli.datasets, ["items", "quests"]);
        assert!(Cli::try_parse_from(["rpgkit-generate", "--dataset", "npcs"]).is_err());
    }
}
