mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use echo_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "epaecho")]
#[command(about = "Query facility compliance data from the EPA ECHO API")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "60", global = true)]
    timeout: u64,

    /// Log request URLs and raw response bodies
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search facilities
    Facilities(commands::facilities::FacilitiesArgs),
    /// Fetch map markers for a query ID
    Map(commands::map::MapArgs),
    /// Page through the facilities behind a query ID
    Qid(commands::qid::QidArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("echo_api=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let client = Client::new().with_debug(cli.debug);
    let timeout = Duration::from_secs(cli.timeout);

    match &cli.command {
        Commands::Facilities(args) => {
            commands::facilities::run(args, &client, timeout, &format).await?
        }
        Commands::Map(args) => commands::map::run(args, &client, timeout, &format).await?,
        Commands::Qid(args) => commands::qid::run(args, &client, timeout, &format).await?,
    }

    Ok(())
}
