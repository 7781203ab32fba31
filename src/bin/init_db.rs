//! Creates the class_records table. Pass `--reset` to drop existing records first.

use class_ledger::config::Config;
use class_ledger::db;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn is_reset() -> bool {
    std::env::args().any(|a| a == "--reset")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&config).await?;
    db::init_schema(&pool, is_reset()).await?;
    pool.close().await;

    println!("Database initialized at {}", config.database_url);
    Ok(())
}
