use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub log: Vec<Exercise>,
}

// Entry fields are individually optional so a partially malformed stored
// document still decodes; missing values are shaped with placeholders on read.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Exercise {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Exercise {
    pub fn new(description: String, duration: i64, date: NaiveDate) -> Self {
        Self {
            description: Some(description),
            duration: Some(duration),
            date: Some(date),
        }
    }
}
