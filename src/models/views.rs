use serde::Serialize;
use uuid::Uuid;

use crate::log_query::LogEntryView;
use crate::models::User;

// Response shapes mirror the original API: ids are exposed as `_id`.

#[derive(Debug, Serialize)]
pub struct UserView {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            id: user.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: i64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct LogView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryView>,
}
