use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::models::{Exercise, User};
use crate::services::UserStore;

// Key scheme: `user:<uuid>` holds the JSON user document, `username:<name>`
// maps a username to its id, and the `users` set holds every id for listing.
const USERS_SET: &str = "users";

pub struct RedisStore {
    client: Arc<Client>,
}

impl RedisStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    fn user_key(id: Uuid) -> String {
        format!("user:{}", id)
    }

    fn username_key(username: &str) -> String {
        format!("username:{}", username)
    }

    fn decode(data: &str) -> Result<User, redis::RedisError> {
        serde_json::from_str(data).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Failed to decode user document",
                e.to_string(),
            ))
        })
    }

    fn encode(user: &User) -> Result<String, redis::RedisError> {
        serde_json::to_string(user).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Failed to encode user document",
                e.to_string(),
            ))
        })
    }
}

#[async_trait]
impl UserStore for RedisStore {
    async fn find_by_username(&self, username: &str) -> ApiResult<Option<User>> {
        let mut conn = self.client.get_async_connection().await?;
        let id: Option<String> = conn.get(Self::username_key(username)).await?;
        match id {
            Some(id) => {
                let id = id.parse::<Uuid>().map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Malformed id in username index",
                        e.to_string(),
                    ))
                })?;
                self.find_by_id(id).await
            }
            None => Ok(None),
        }
    }

    async fn create_user(&self, username: &str) -> ApiResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            log: Vec::new(),
        };

        let mut conn = self.client.get_async_connection().await?;
        let _: () = conn.set(Self::user_key(user.id), Self::encode(&user)?).await?;
        let _: () = conn
            .set(Self::username_key(&user.username), user.id.to_string())
            .await?;
        let _: () = conn.sadd(USERS_SET, user.id.to_string()).await?;

        tracing::info!("created user {} ({})", user.username, user.id);
        Ok(user)
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let mut conn = self.client.get_async_connection().await?;
        let ids: Vec<String> = conn.smembers(USERS_SET).await?;

        let mut users = Vec::with_capacity(ids.len());
        for id in ids {
            // Ids in the set without a document are skipped rather than fatal.
            let data: Option<String> = conn.get(format!("user:{}", id)).await?;
            if let Some(data) = data {
                users.push(Self::decode(&data)?);
            }
        }
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<User>> {
        let mut conn = self.client.get_async_connection().await?;
        let data: Option<String> = conn.get(Self::user_key(id)).await?;
        match data {
            Some(data) => Ok(Some(Self::decode(&data)?)),
            None => Ok(None),
        }
    }

    async fn append_exercise(&self, id: Uuid, entry: Exercise) -> ApiResult<Option<User>> {
        let mut conn = self.client.get_async_connection().await?;
        let data: Option<String> = conn.get(Self::user_key(id)).await?;
        let Some(data) = data else {
            return Ok(None);
        };

        let mut user = Self::decode(&data)?;
        user.log.push(entry);
        let _: () = conn.set(Self::user_key(id), Self::encode(&user)?).await?;

        Ok(Some(user))
    }
}
