use class_ledger::config::Config;
use class_ledger::db;
use class_ledger::error::AppError;
use class_ledger::routes::router;
use class_ledger::state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("connecting to {}", config.database_url);
    let pool = db::connect(&config).await?;

    let state = AppState::new(pool);
    info!(
        "syllabus catalog: {} modules, {} topics",
        state.catalog.modules().len(),
        state.catalog.topic_count()
    );
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("listening on http://{}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
