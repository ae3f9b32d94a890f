mod extract;
mod logs;
mod users;

pub use extract::FormOrJson;
pub use logs::{add_exercise, get_logs};
pub use users::{create_user, list_users};

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::DynStore;

pub fn router(store: DynStore) -> Router {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:id/exercises", post(add_exercise))
        .route("/api/users/:id/logs", get(get_logs))
        .with_state(store)
}
