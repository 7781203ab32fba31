pub mod repository;

use std::convert::Infallible;
use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Runs the schema script. With `reset` the table is dropped first and every record is lost.
pub async fn init_schema(pool: &SqlitePool, reset: bool) -> Result<(), AppError> {
    if reset {
        warn!("dropping class_records before recreating the schema");
        sqlx::raw_sql("DROP TABLE IF EXISTS class_records")
            .execute(pool)
            .await
            .map_err(AppError::Schema)?;
    }

    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(AppError::Schema)?;

    info!("schema ready");
    Ok(())
}

/// Request-scoped database handle.
///
/// No connection is checked out until [`DbScope::acquire`] is first called; later calls reuse
/// it. The connection goes back to the pool on [`DbScope::release`] or when the scope is
/// dropped, whichever happens first, so a request that fails halfway never holds on to it.
pub struct DbScope {
    pool: SqlitePool,
    conn: Option<PoolConnection<Sqlite>>,
}

impl DbScope {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool, conn: None }
    }

    pub async fn acquire(&mut self) -> Result<&mut SqliteConnection, sqlx::Error> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                debug!("opening request connection");
                self.pool.acquire().await?
            }
        };
        Ok(&mut **self.conn.insert(conn))
    }

    /// Returns `true` if a connection was held.
    pub fn release(&mut self) -> bool {
        match self.conn.take() {
            Some(conn) => {
                drop(conn);
                debug!("request connection released");
                true
            }
            None => false,
        }
    }
}

impl Drop for DbScope {
    fn drop(&mut self) {
        self.release();
    }
}

impl FromRequestParts<AppState> for DbScope {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(DbScope::new(state.db.clone()))
    }
}
