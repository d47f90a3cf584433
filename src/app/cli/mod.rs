//! CLI Adapter.

mod generate;
mod preview;

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Environment variable holding the `tracing` filter directive.
const LOG_ENV: &str = "CRUDGEN_LOG";

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(
    about = "Scaffold a CRUD backend (schema, handlers, routes, auth, entry point) for a resource",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every artifact for a resource, creating only missing files
    #[clap(visible_alias = "g")]
    Generate {
        /// Resource name (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Field name, repeat in emission order (prompted when omitted)
        #[arg(short, long = "field")]
        fields: Vec<String>,
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Generator config file (defaults to <dir>/crudgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print one rendered artifact without writing anything
    #[clap(visible_alias = "p")]
    Preview {
        /// schema, handler, routes, auth-schema, auth-handler, auth-routes, entry-point, mount
        artifact: String,
        /// Resource name
        #[arg(short, long)]
        name: String,
        /// Field name, repeat in emission order
        #[arg(short, long = "field", required = true)]
        fields: Vec<String>,
        /// Project directory whose config is used
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Generator config file (defaults to <dir>/crudgen.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { name, fields, dir, config } => {
            generate::run_generate(name, fields, dir, config)
        }
        Commands::Preview { artifact, name, fields, dir, config } => {
            preview::run_preview(&artifact, &name, &fields, dir, config).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr, filtered by `CRUDGEN_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Ask for one line of text. Ctrl-C yields [`AppError::Cancelled`].
fn prompt_text(prompt: &str) -> Result<String, AppError> {
    match Input::<String>::new().with_prompt(prompt).interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::Cancelled)
        }
        Err(err) => Err(AppError::Validation(format!("Failed to read input: {}", err))),
    }
}
