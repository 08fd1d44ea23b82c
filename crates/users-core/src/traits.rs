use crate::error::AppError;
use crate::models::{NewUser, User, UserPatch};

/// Holds the user collection behind the HTTP layer.
///
/// Handlers receive an `Arc<dyn UserStore>`, so a persistent backend can
/// replace the in-memory one without touching route logic.
pub trait UserStore: Send + Sync {
    /// All users in store order.
    fn list(&self) -> Result<Vec<User>, AppError>;

    /// Append a new user and return it. The id is `len + 1` at call time.
    fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Partially update the first user with `id`.
    ///
    /// Returns `AppError::NotFound` when no user matches.
    fn update(&self, id: i64, patch: UserPatch) -> Result<User, AppError>;

    /// Remove every user with `id`. Returns how many were removed.
    fn delete(&self, id: i64) -> Result<usize, AppError>;

    /// Number of stored users.
    fn len(&self) -> Result<usize, AppError>;

    fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}
