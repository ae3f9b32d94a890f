use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};
use crate::handlers::extract::FormOrJson;
use crate::log_query::{self, LogFilter};
use crate::models::{Exercise, ExerciseForm, ExerciseView, LogQueryParams, LogView};
use crate::services::DynStore;

/// POST /api/users/:id/exercises. Appends one entry to the user's log and
/// echoes it back with the owning user's identity.
#[axum::debug_handler]
pub async fn add_exercise(
    State(store): State<DynStore>,
    Path(id): Path<String>,
    FormOrJson(form): FormOrJson<ExerciseForm>,
) -> ApiResult<Json<ExerciseView>> {
    // An id that is not even a well-formed uuid identifies no user.
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound)?;

    let duration = form
        .duration
        .as_minutes()
        .ok_or_else(|| ApiError::Validation("Invalid duration".to_string()))?;

    let date = match form.date.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(text) => log_query::parse_date(text)
            .ok_or_else(|| ApiError::Validation("Invalid date format".to_string()))?,
        None => Local::now().date_naive(),
    };

    let entry = Exercise::new(form.description.clone(), duration, date);
    let user = store
        .append_exercise(id, entry)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!("logged exercise for user {}", user.id);
    Ok(Json(ExerciseView {
        id: user.id,
        username: user.username,
        date: log_query::format_date(date),
        duration,
        description: form.description,
    }))
}

/// GET /api/users/:id/logs?from=&to=&limit=. Validates the id before any
/// store access, then applies the from -> to -> limit pipeline to the log.
pub async fn get_logs(
    State(store): State<DynStore>,
    Path(id): Path<String>,
    Query(params): Query<LogQueryParams>,
) -> ApiResult<Json<LogView>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid user ID format".to_string()))?;

    let user = store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    // Empty query values are treated as absent, like the original API.
    let from = match params.from.as_deref().filter(|s| !s.is_empty()) {
        Some(text) => Some(log_query::parse_date(text).ok_or_else(|| {
            ApiError::Validation("Invalid from date format".to_string())
        })?),
        None => None,
    };
    let to = match params.to.as_deref().filter(|s| !s.is_empty()) {
        Some(text) => Some(log_query::parse_date(text).ok_or_else(|| {
            ApiError::Validation("Invalid 'to' date format".to_string())
        })?),
        None => None,
    };
    // Non-numeric limits are silently ignored.
    let limit = params.limit.as_deref().and_then(|s| s.trim().parse().ok());

    let (count, log) = log_query::filter_log(&user.log, &LogFilter { from, to, limit });
    Ok(Json(LogView {
        id: user.id,
        username: user.username,
        count,
        log,
    }))
}
