//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use itemd_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://items.db")]
    pub database_url: String,
}

/// Create the database schema and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Schema is up to date");
    Ok(())
}
