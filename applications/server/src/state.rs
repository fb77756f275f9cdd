/// Shared application state
use std::sync::Arc;
use userbase_core::UserStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}
