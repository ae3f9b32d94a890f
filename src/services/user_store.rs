use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::models::{Exercise, User};

/// Document-store operations the handlers depend on. Implemented by the
/// Redis store in production and by an in-memory store in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact-match lookup by username.
    async fn find_by_username(&self, username: &str) -> ApiResult<Option<User>>;

    /// Inserts a new user with an empty log and a store-generated id.
    async fn create_user(&self, username: &str) -> ApiResult<User>;

    /// All users, in no guaranteed order.
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<User>>;

    /// Appends one entry to the user's log. Returns the updated user, or
    /// `None` when no user has that id.
    async fn append_exercise(&self, id: Uuid, entry: Exercise) -> ApiResult<Option<User>>;
}

pub type DynStore = Arc<dyn UserStore>;
