//! `migrate` subcommand.

use brigade_core::config::AppConfig;
use brigade_core::error::AppError;

/// Runs all pending database migrations.
pub async fn run(env: &str) -> Result<(), AppError> {
    let config = AppConfig::load(env)?;
    let pool = brigade_database::connection::create_pool(&config.database).await?;

    brigade_database::migration::run_migrations(&pool).await?;

    println!("Migrations complete");
    Ok(())
}
