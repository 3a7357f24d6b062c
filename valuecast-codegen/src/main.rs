//! Valuecast Codegen - value object scaffolding tool
//!
//! Writes a new value object source file from a template, ready for its
//! validation to be filled in.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use valuecast_codegen::{scaffold, CodegenError, ScaffoldOptions};

#[derive(Parser)]
#[command(name = "valuecast-codegen")]
#[command(about = "Scaffold valuecast value objects", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new value object
    Make {
        /// Type name, in UpperCamelCase
        name: String,

        /// Type of the raw value
        #[arg(short, long, default_value = "String")]
        raw: String,

        /// Output directory for the generated file
        #[arg(short, long, default_value = "src/value_objects")]
        output: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Make {
            name,
            raw,
            output,
            force,
        } => {
            let options = ScaffoldOptions {
                name,
                raw,
                output,
                force,
            };
            make(&options)
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn make(options: &ScaffoldOptions) -> anyhow::Result<ExitCode> {
    match scaffold(options) {
        Ok(scaffolded) => {
            if scaffolded.overwritten {
                log::info!("Value Object overwritten: {}", scaffolded.path.display());
            } else {
                log::info!("Value Object created: {}", scaffolded.path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ CodegenError::AlreadyExists(_)) => {
            log::error!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
