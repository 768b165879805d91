use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use savewire_tools::{
    format_inspect_pretty, format_types_pretty, inspect_save, list_types, normalize_save,
};
use schema::builtin_registry;

#[derive(Parser)]
#[command(
    name = "savewire-tools",
    version,
    about = "savewire save file inspection and listing tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered entity types and their field schemas.
    Types {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Decode a save file and report its entities.
    Inspect {
        /// Path to the save text.
        save_file: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Re-encode a save file in canonical formatting.
    Normalize {
        /// Path to the save text.
        save_file: PathBuf,
        /// Write here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = builtin_registry();

    match cli.command {
        Command::Types { format } => {
            let types = list_types(&registry);
            match format {
                OutputFormat::Pretty => print!("{}", format_types_pretty(&types)),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&types).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Inspect { save_file, format } => {
            let input = fs::read_to_string(&save_file)
                .with_context(|| format!("read save {}", save_file.display()))?;
            let report = inspect_save(&input, &registry);
            match format {
                OutputFormat::Pretty => print!("{}", format_inspect_pretty(&report)),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
        Command::Normalize { save_file, output } => {
            let input = fs::read_to_string(&save_file)
                .with_context(|| format!("read save {}", save_file.display()))?;
            let normalized = normalize_save(&input, &registry)
                .with_context(|| format!("normalize {}", save_file.display()))?;
            match output {
                Some(path) => fs::write(&path, normalized)
                    .with_context(|| format!("write {}", path.display()))?,
                None => print!("{normalized}"),
            }
        }
    }
    Ok(())
}
