use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// PS009 Multisig Approval
#[derive(Parser)]
#[command(name = "multisig-approval")]
#[command(about = "Derive token-holder multisig addresses and find PS009 approval transactions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Build an M-of-N multisig address from public keys
    Multisig(commands::multisig::MultisigCommand),
    /// Resolve Group token NFT holders and build their multisig address
    Holders(commands::holders::HoldersCommand),
    /// Find the latest approval transaction for an address
    Approval(commands::approval::ApprovalCommand),
    /// Test wallet REST API connectivity
    TestApi(commands::test_api::TestApiCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Multisig(command) => command.run(),
        Commands::Holders(command) => command.run().await,
        Commands::Approval(command) => command.run().await,
        Commands::TestApi(command) => command.run().await,
    }
}
