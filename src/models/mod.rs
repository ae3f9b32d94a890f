mod forms;
mod user;
mod views;

pub use forms::{CreateUserForm, DurationField, ExerciseForm, LogQueryParams};
pub use user::{Exercise, User};
pub use views::{ExerciseView, LogView, UserView};
