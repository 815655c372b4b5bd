use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use models::category::{Category, CategoryId};

use crate::category::repository::CategoryRepository;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<CategoryId, Category>,
    next_id: CategoryId,
}

/// In-memory category store.
///
/// The record map and the id counter sit behind one `RwLock`: reads share it,
/// every write takes it exclusively. Ids come only from the counter, so they
/// are unique and never reused, even after a delete.
///
/// No critical section can leave `Inner` half-written, so a poisoned lock is
/// recovered instead of propagated.
#[derive(Debug, Default)]
pub struct CategoryStore {
    inner: RwLock<Inner>,
}

impl CategoryStore {
    /// Empty store with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CategoryRepository for CategoryStore {
    fn list_all(&self) -> Vec<Category> {
        self.read().records.values().cloned().collect()
    }

    fn get(&self, id: CategoryId) -> Option<Category> {
        self.read().records.get(&id).cloned()
    }

    fn create(&self, name: String) -> Category {
        let mut inner = self.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let category = Category { id, name };
        inner.records.insert(id, category.clone());
        category
    }

    fn update(&self, id: CategoryId, mut category: Category) -> bool {
        let mut inner = self.write();
        match inner.records.get_mut(&id) {
            Some(slot) => {
                // the key owns the id; a body can never re-key a record
                category.id = id;
                *slot = category;
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: CategoryId) -> bool {
        self.write().records.remove(&id).is_some()
    }
}
