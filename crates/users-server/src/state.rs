use std::sync::Arc;

use users_core::{InMemoryUserStore, UserStore};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// State backed by an in-memory store holding the seed records.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryUserStore::seeded()))
    }
}
