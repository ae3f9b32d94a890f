use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::models::{Exercise, User};
use crate::services::UserStore;

/// In-memory store for handler tests. Counts store calls so tests can assert
/// that validation short-circuits before any store access.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn find_log(&self, id: Uuid) -> Vec<Exercise> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.log.clone())
            .unwrap_or_default()
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> ApiResult<Option<User>> {
        self.touch();
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str) -> ApiResult<User> {
        self.touch();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            log: Vec::new(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.touch();
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> ApiResult<Option<User>> {
        self.touch();
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn append_exercise(&self, id: Uuid, entry: Exercise) -> ApiResult<Option<User>> {
        self.touch();
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.log.push(entry);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}
