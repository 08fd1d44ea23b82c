//! In-memory user store.

use std::sync::RwLock;

use crate::error::AppError;
use crate::models::{NewUser, User, UserPatch, seed_users};
use crate::traits::UserStore;

/// `UserStore` backed by a `Vec` in process memory.
///
/// Every operation holds the lock for its whole body, so each call runs to
/// completion before the next one observes the collection. Contents are lost
/// when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two seed records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::StorageError("user store lock poisoned".into())
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }

    fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        // Length-based ids can collide with a surviving record after a delete.
        let user = User {
            id: users.len() as i64 + 1,
            name: new_user.name,
            password: new_user.password,
        };
        users.push(user.clone());
        tracing::debug!(id = user.id, total = users.len(), "User appended to store");
        Ok(user)
    }

    fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AppError::NotFound { id })?;
        user.apply(patch);
        Ok(user.clone())
    }

    fn delete(&self, id: i64) -> Result<usize, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let before = users.len();
        users.retain(|u| u.id != id);
        let removed = before - users.len();
        tracing::debug!(id, removed, "Users removed from store");
        Ok(removed)
    }

    fn len(&self) -> Result<usize, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.len())
    }
}
