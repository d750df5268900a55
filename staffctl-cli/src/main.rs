//! staffctl - interactive employee tracker backed by PostgreSQL
//!
//! Launches a menu-driven loop over three tables (department, role,
//! employee): list views with joins, guarded inserts, and a single update
//! path for an employee's role. Connection settings come from the
//! environment (`DATABASE_URL` or discrete `DB_*` variables), optionally
//! via a `.env` file.

use anyhow::Result;
use clap::Parser;
use staffctl_db::{create_pool, ping, DbConfig, DbResult, PgPool};
use tracing::{debug, info};

mod commands;
mod menu;
mod table;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "staffctl",
    author,
    version,
    about = "Interactive employee tracker backed by PostgreSQL",
    long_about = "Menu-driven management of departments, roles, and employees. \
                  Connection settings come from DATABASE_URL or the DB_USER, \
                  DB_PASSWORD, DB_HOST, DB_NAME, and DB_PORT variables."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long)]
    debug: bool,
}

/// Create the pool and verify the database answers. The verification
/// connection goes back to the pool right away.
async fn connect(config: &DbConfig) -> DbResult<PgPool> {
    let pool = create_pool(config).await?;
    ping(&pool).await?;
    Ok(pool)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    // dotenvy never overwrites variables that are already set.
    if let Ok(path) = dotenvy::dotenv() {
        debug!("loaded .env from {}", path.display());
    }

    let config = DbConfig::from_env()?;
    let pool = match connect(&config).await {
        Ok(pool) => pool,
        // Fatal, with no retry.
        Err(err) => {
            eprintln!("Error connecting to the PostgreSQL database: {err}");
            std::process::exit(1);
        }
    };
    info!("Connected to the PostgreSQL database.");

    menu::run(&pool).await?;

    pool.close().await;
    Ok(())
}
