//! Test utilities: stub `UserStore` implementations.
//!
//! Used by the server tests to drive error paths that the in-memory store
//! never takes on its own.

use crate::error::AppError;
use crate::models::{NewUser, User, UserPatch};
use crate::traits::UserStore;

// ---------------------------------------------------------------------------
// FailingStore
// ---------------------------------------------------------------------------

/// Store whose every operation fails with `AppError::StorageError`.
#[derive(Debug, Clone)]
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::StorageError(self.message.clone()))
    }
}

impl UserStore for FailingStore {
    fn list(&self) -> Result<Vec<User>, AppError> {
        self.fail()
    }

    fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        self.fail()
    }

    fn update(&self, _id: i64, _patch: UserPatch) -> Result<User, AppError> {
        self.fail()
    }

    fn delete(&self, _id: i64) -> Result<usize, AppError> {
        self.fail()
    }

    fn len(&self) -> Result<usize, AppError> {
        self.fail()
    }
}
