use tracing::{debug, info};

use crate::db::{DbScope, repository};
use crate::error::AppError;
use crate::models::{ClassRecord, ClassRecordForm};

/// Every stored record, newest first.
pub async fn list_all(scope: &mut DbScope) -> Result<Vec<ClassRecord>, AppError> {
    let conn = scope.acquire().await?;
    let records = repository::fetch_records(conn).await?;
    debug!("fetched {} class records", records.len());
    Ok(records)
}

/// Validates a submitted form and stores it. Nothing is written unless validation passes.
pub async fn create(scope: &mut DbScope, form: ClassRecordForm) -> Result<ClassRecord, AppError> {
    let new_record = form.validate()?;

    let conn = scope.acquire().await?;
    let id = repository::insert_record(conn, &new_record).await?;
    info!(id, "class record saved");

    Ok(new_record.into_record(id))
}

/// Deletes by id. A missing id is not an error; the returned count is then zero.
pub async fn delete(scope: &mut DbScope, id: i64) -> Result<u64, AppError> {
    let conn = scope.acquire().await?;
    let removed = repository::delete_record(conn, id).await?;
    info!(id, removed, "class record delete");
    Ok(removed)
}
