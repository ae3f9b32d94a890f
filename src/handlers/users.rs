use axum::{extract::State, Json};

use crate::errors::{ApiError, ApiResult};
use crate::handlers::extract::FormOrJson;
use crate::models::{CreateUserForm, UserView};
use crate::services::DynStore;

/// POST /api/users. Create-or-fetch: posting an existing username returns
/// that user unchanged, so the operation is idempotent per username.
#[axum::debug_handler]
pub async fn create_user(
    State(store): State<DynStore>,
    FormOrJson(form): FormOrJson<CreateUserForm>,
) -> ApiResult<Json<UserView>> {
    let username = form.username.as_deref().map(str::trim).unwrap_or("");
    if username.is_empty() {
        return Err(ApiError::Validation("Username is required".to_string()));
    }

    if let Some(existing) = store.find_by_username(username).await? {
        tracing::debug!("user {} already exists", username);
        return Ok(Json(UserView::from(&existing)));
    }

    let user = store.create_user(username).await?;
    Ok(Json(UserView::from(&user)))
}

/// GET /api/users. All users projected to `{username, _id}`, logs omitted.
pub async fn list_users(State(store): State<DynStore>) -> ApiResult<Json<Vec<UserView>>> {
    let users = store.list_users().await?;
    Ok(Json(users.iter().map(UserView::from).collect()))
}
