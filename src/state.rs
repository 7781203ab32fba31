use sqlx::SqlitePool;

use crate::catalog::SyllabusCatalog;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub catalog: SyllabusCatalog,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            catalog: SyllabusCatalog::builtin(),
        }
    }
}
