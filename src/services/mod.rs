mod redis_store;
mod user_store;

#[cfg(test)]
pub mod memory;

pub use redis_store::RedisStore;
pub use user_store::{DynStore, UserStore};
