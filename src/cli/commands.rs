use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::generator::{generate_all, GenerateOptions};

/// Command-line interface for restgen
///
/// Provides the `generate` command that compiles a directory of JSON
/// endpoint descriptions into client bindings and test stubs.
#[derive(Parser)]
#[command(name = "restgen")]
#[command(about = "restgen CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate source code and tests from the JSON API specification
    Generate {
        /// Path to the directory with JSON API specs
        #[arg(short, long, default_value = "rest-api-spec")]
        input: PathBuf,

        /// Path to the output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Overwrite existing artifacts
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Print per-file progress
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error when the input location is unusable, the output root
/// cannot be created, or at least one endpoint in the batch failed; the
/// failure list is printed before returning, so the process exits non-zero
/// iff not every endpoint succeeded.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            input,
            output,
            force,
            verbose,
        } => {
            let options = GenerateOptions {
                input: input.clone(),
                output: output.clone(),
                force: *force,
                verbose: *verbose,
            };
            let report = generate_all(&options)?;
            report.print_summary();
            if !report.all_succeeded() {
                anyhow::bail!(
                    "{} of {} endpoints failed",
                    report.failures().count(),
                    report.outcomes.len()
                );
            }
            Ok(())
        }
    }
}
