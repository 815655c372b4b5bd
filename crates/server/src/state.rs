use std::sync::Arc;

use service::category::CategoryService;
use service::storage::CategoryStore;

/// Shared handler state. Cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService<CategoryStore>>,
}

impl AppState {
    pub fn new(store: Arc<CategoryStore>) -> Self {
        Self { categories: Arc::new(CategoryService::new(store)) }
    }

    /// Fresh, empty store. One per process in production, one per test otherwise.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CategoryStore::new()))
    }
}
