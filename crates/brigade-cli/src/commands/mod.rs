//! CLI command definitions.

pub mod migrate;
pub mod seed;

use clap::{Parser, Subcommand};

use brigade_core::error::AppError;

/// Brigade back-office administration CLI.
#[derive(Debug, Parser)]
#[command(name = "brigade-cli", version, about)]
pub struct Cli {
    /// Configuration environment name (matches `config/<env>.toml`).
    #[arg(long, env = "BRIGADE_ENV", default_value = "development")]
    pub env: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run pending database migrations.
    Migrate,
    /// Create the default admin account and restaurant profile.
    Seed(seed::SeedArgs),
}

impl Cli {
    /// Executes the selected subcommand.
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Command::Migrate => migrate::run(&self.env).await,
            Command::Seed(args) => seed::run(&self.env, args).await,
        }
    }
}
