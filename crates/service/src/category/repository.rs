use models::category::{Category, CategoryId};

/// Trait abstraction for category storage.
///
/// Every call is synchronous and short: implementations hold their lock for a
/// single map operation. Absence is reported through `Option`/`bool`, never as
/// an error.
pub trait CategoryRepository: Send + Sync {
    /// All live records, in no particular order.
    fn list_all(&self) -> Vec<Category>;
    fn get(&self, id: CategoryId) -> Option<Category>;
    /// Allocate the next id and insert `{id, name}` as one atomic step.
    fn create(&self, name: String) -> Category;
    /// Replace the record stored under `id`; `false` if there is none.
    fn update(&self, id: CategoryId, category: Category) -> bool;
    /// Remove the record stored under `id`; `false` if there is none.
    fn delete(&self, id: CategoryId) -> bool;
}
