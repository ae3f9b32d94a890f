use thiserror::Error;

pub mod response;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    // The #[from] attribute converts a redis::RedisError into ApiError::Store
    // at the call site; decode failures are mapped into RedisError by the store.
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),
}

pub type ApiResult<T> = Result<T, ApiError>;
