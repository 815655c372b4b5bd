use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::StatusMessage;
use models::category::{Category, CategoryId, CreateCategoryRequest, UpdateCategoryRequest};
use service::errors::ServiceError;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::observability::{self, RECORDS};
use crate::state::AppState;

/// Parse a path id. Non-integers are rejected; negative integers are valid
/// input that simply never match a record.
fn parse_id(raw: &str) -> Result<Option<CategoryId>, ApiError> {
    if let Ok(id) = raw.parse::<CategoryId>() {
        return Ok(Some(id));
    }
    match raw.parse::<i64>() {
        Ok(_) => Ok(None),
        Err(e) => {
            warn!(id = %raw, error = %e, "bad url parameter");
            Err(ApiError::InvalidId)
        }
    }
}

fn sync_records_gauge(state: &AppState) {
    let count = state.categories.list().len();
    RECORDS.set(i64::try_from(count).unwrap_or(i64::MAX));
}

fn reject(operation: &str, err: ApiError) -> ApiError {
    let outcome = match err {
        ApiError::NotFound => "not_found",
        _ => "invalid",
    };
    observability::record(operation, outcome);
    err
}

#[utoipa::path(
    get, path = "/categories", tag = "categories",
    responses((status = 200, description = "All categories, unordered", body = [crate::openapi::CategoryDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Category>> {
    info!("fetching all categories");
    let items = state.categories.list();
    observability::record("list", "ok");
    Json(items)
}

#[utoipa::path(
    get, path = "/categories/{id}", tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Found", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let id = parse_id(&raw).map_err(|e| reject("get", e))?;
    info!(id = %raw, "fetching category");
    match id.and_then(|id| state.categories.get(id)) {
        Some(category) => {
            observability::record("get", "ok");
            Ok(Json(category))
        }
        None => {
            warn!(id = %raw, "category not found");
            Err(reject("get", ApiError::NotFound))
        }
    }
}

#[utoipa::path(
    post, path = "/categories", tag = "categories",
    request_body = crate::openapi::CreateCategoryRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(input) = payload.map_err(|rej| {
        warn!(error = %rej.body_text(), "bad request");
        reject("create", rej.into())
    })?;

    let created = state.categories.create(input).map_err(|e| {
        warn!(error = %e, "validation error");
        reject("create", e.into())
    })?;

    sync_records_gauge(&state);
    observability::record("create", "ok");
    info!(id = created.id, "category created");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/categories/{id}", tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    request_body = crate::openapi::UpdateCategoryRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CategoryDoc),
        (status = 400, description = "Invalid ID, body or id mismatch", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let id = parse_id(&raw).map_err(|e| reject("update", e))?;
    let Json(input) = payload.map_err(|rej| {
        warn!(error = %rej.body_text(), "bad request");
        reject("update", rej.into())
    })?;

    let Some(id) = id else {
        // still validate the body so a bad payload is a 400, not a 404
        input
            .validate()
            .map_err(|e| reject("update", ApiError::from(ServiceError::from(e))))?;
        warn!(id = %raw, "category not found");
        return Err(reject("update", ApiError::NotFound));
    };

    match state.categories.update(id, input) {
        Ok(updated) => {
            observability::record("update", "ok");
            info!(id = updated.id, "category updated");
            Ok(Json(updated))
        }
        Err(e) => {
            warn!(id, error = %e, "category update rejected");
            Err(reject("update", e.into()))
        }
    }
}

#[utoipa::path(
    delete, path = "/categories/{id}", tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted (or already absent)", body = crate::openapi::StatusResponse),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<StatusMessage>, ApiError> {
    let id = parse_id(&raw).map_err(|e| reject("delete", e))?;
    let existed = id.map(|id| state.categories.delete(id)).unwrap_or(false);
    if existed {
        sync_records_gauge(&state);
        observability::record("delete", "ok");
        info!(id = %raw, "category deleted");
    } else {
        observability::record("delete", "absent");
        warn!(id = %raw, "delete of absent category");
    }
    Ok(Json(StatusMessage::deleted()))
}
