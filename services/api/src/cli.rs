use crate::commands::{
    init_command_telemetry, run_analyze, run_batch, run_catalog, AnalyzeArgs, BatchArgs,
    CatalogArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use micro_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Micro Decision Analyzer",
    about = "Estimate the butterfly effect of everyday habits from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze a single decision and print the result
    Analyze(AnalyzeArgs),
    /// List the known decisions and target roles
    Catalog(CatalogArgs),
    /// Analyze every row of a CSV file
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => {
            init_command_telemetry()?;
            run_analyze(args)
        }
        Command::Catalog(args) => {
            init_command_telemetry()?;
            run_catalog(args)
        }
        Command::Batch(args) => {
            init_command_telemetry()?;
            run_batch(args)
        }
    }
}
