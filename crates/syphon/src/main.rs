use clap::{Parser, Subcommand};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;
use syphon::commands::{FilterArgs, run_deserialize, run_serialize};

/// Syphon CLI - move form values into nested JSON and back
#[derive(Parser)]
#[command(name = "syphon")]
#[command(about = "Serialize form documents into nested JSON objects and back", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (otherwise SYPHON_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Read every eligible control of a form into one JSON object
    Serialize {
        /// Path to the form document (JSON element tree)
        #[arg(short, long)]
        form: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the values of a JSON object into a form
    Deserialize {
        /// Path to the form document (JSON element tree)
        #[arg(short, long)]
        form: PathBuf,
        /// Path to the JSON object to apply
        #[arg(long)]
        data: PathBuf,
        #[command(flatten)]
        filters: FilterArgs,
        /// Output file for the updated form (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output a result envelope as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Application session for Syphon CLI
#[derive(Clone)]
struct SyphonSession {
    command: Commands,
}

#[async_trait::async_trait]
impl AppSession for SyphonSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Serialize {
                form,
                filters,
                output,
            } => run_serialize(form.clone(), filters, output.clone()),
            Commands::Deserialize {
                form,
                data,
                filters,
                output,
                json,
            } => run_deserialize(form.clone(), data.clone(), filters, output.clone(), *json),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();
    syphon::logging::init(cli.verbose);

    // Create session with command
    let session = SyphonSession {
        command: cli.command,
    };

    // Initialize and run starbase App
    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
