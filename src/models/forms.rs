use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseForm {
    pub description: String,
    pub duration: DurationField,
    pub date: Option<String>,
}

// `duration` arrives as a JSON number or as urlencoded text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationField {
    Number(i64),
    Text(String),
}

impl DurationField {
    pub fn as_minutes(&self) -> Option<i64> {
        match self {
            DurationField::Number(n) => Some(*n),
            DurationField::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}
