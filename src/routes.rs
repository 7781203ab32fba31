use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Local;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::db::DbScope;
use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::models::ClassRecordForm;
use crate::services::records;
use crate::state::AppState;
use crate::views;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create_record))
        .route("/eliminar/{id}", post(delete_record))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(mut db: DbScope) -> StatusCode {
    let conn = match db.acquire().await {
        Ok(conn) => conn,
        Err(err) => {
            error!("health check failed: {}", err);
            return StatusCode::INTERNAL_SERVER_ERROR;
        }
    };
    match sqlx::query("select 1").execute(conn).await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            error!("health check failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn index(
    State(state): State<AppState>,
    mut db: DbScope,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let flashes = flash::take(&headers);
    let records = records::list_all(&mut db).await?;
    db.release();

    let today = Local::now().date_naive();
    let page = views::render_index(&records, &state.catalog, &flashes, today);

    let mut response = Html(page).into_response();
    if !flashes.is_empty() {
        flash::clear(&mut response);
    }
    Ok(response)
}

async fn create_record(
    mut db: DbScope,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = ClassRecordForm::from_pairs(pairs);

    let message = match records::create(&mut db, form).await {
        Ok(_) => Flash::success("Record saved successfully."),
        Err(AppError::Validation(err)) => {
            warn!("rejected class record: {}", err);
            Flash::error(err.to_string())
        }
        Err(err) => {
            error!("failed to save class record: {}", err);
            Flash::error(format!("Error saving the record: {}", err))
        }
    };

    flash::redirect_with(&headers, message, "/")
}

async fn delete_record(
    mut db: DbScope,
    headers: HeaderMap,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let id = raw_id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(AppError::NotFound)?;

    let message = match records::delete(&mut db, id).await {
        Ok(_) => Flash::success(format!("Record {} deleted.", id)),
        Err(err) => {
            error!("failed to delete class record {}: {}", id, err);
            Flash::error(format!("Error deleting record {}.", id))
        }
    };

    Ok(flash::redirect_with(&headers, message, "/"))
}
