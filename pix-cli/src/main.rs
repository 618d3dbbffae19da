//! Pix CLI
//!
//! Runs pix transfers against an in-memory directory loaded from JSON.

mod config;
mod script;
mod transfer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pix_hex::TransactionService;
use pix_repo::{InMemoryDirectory, InMemoryTransactions, Seed};
use pix_types::{PixKeyKind, TransactionResponse};

use config::{Config, LogFormat};
use script::Script;
use transfer::{Settlement, TransferArgs};

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "Pix transfer CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script of operations, printing one JSON line per step
    Run {
        /// Script file (seed records plus `operations`)
        script: PathBuf,
    },
    /// Register a single transfer and optionally settle it
    Transfer {
        /// Seed file with banks, accounts and pix keys
        #[arg(long, env = "PIX_SEED_FILE")]
        seed: PathBuf,
        /// Source account ID
        #[arg(long)]
        from: String,
        /// Destination pix key
        #[arg(long)]
        key: String,
        /// Destination key kind (email, cpf)
        #[arg(long, default_value = "email")]
        kind: PixKeyKind,
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        description: String,
        /// Transaction ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Complete the transaction after registering it
        #[arg(long, conflicts_with = "cancel")]
        complete: bool,
        /// Cancel the transaction with this reason after registering it
        #[arg(long)]
        cancel: Option<String>,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script } => {
            let script: Script = read_json(&script).await?;
            let directory = InMemoryDirectory::from_seed(script.seed)?;
            let service = TransactionService::new(InMemoryTransactions::new(), directory);

            let outcomes = script::run(&service, script.operations).await;
            for outcome in &outcomes {
                println!("{}", serde_json::to_string(outcome)?);
            }

            script::ensure_succeeded(&outcomes)?;
        }

        Commands::Transfer {
            seed,
            from,
            key,
            kind,
            amount,
            description,
            id,
            complete,
            cancel,
        } => {
            let seed: Seed = read_json(&seed).await?;
            let tx = transfer::transfer(
                seed,
                TransferArgs {
                    from,
                    key,
                    kind,
                    amount,
                    description,
                    id,
                    settlement: Settlement::from_flags(complete, cancel),
                },
            )
            .await?;

            let response = TransactionResponse::from(&tx);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
