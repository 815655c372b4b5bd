use std::sync::Arc;

use models::category::{Category, CategoryId, CreateCategoryRequest, UpdateCategoryRequest};
use tracing::{debug, instrument};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Application service encapsulating category business rules.
/// Validates payloads and reconciles path/body ids before touching the store.
pub struct CategoryService<R: CategoryRepository> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<Category> { self.repo.list_all() }

    #[instrument(skip(self))]
    pub fn get(&self, id: CategoryId) -> Option<Category> { self.repo.get(id) }

    #[instrument(skip(self, input))]
    pub fn create(&self, input: CreateCategoryRequest) -> Result<Category, ServiceError> {
        input.validate()?;
        let created = self.repo.create(input.name);
        debug!(id = created.id, "category stored");
        Ok(created)
    }

    /// Replace the record at `id`. A body id, when given, has to equal `id`.
    #[instrument(skip(self, input))]
    pub fn update(&self, id: CategoryId, input: UpdateCategoryRequest) -> Result<Category, ServiceError> {
        input.validate()?;
        if let Some(body) = input.id {
            if body != id {
                return Err(ServiceError::IdMismatch { path: id, body });
            }
        }
        let category = Category { id, name: input.name };
        if !self.repo.update(id, category.clone()) {
            return Err(ServiceError::not_found("category"));
        }
        Ok(category)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: CategoryId) -> bool { self.repo.delete(id) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CategoryStore;

    fn svc() -> CategoryService<CategoryStore> {
        CategoryService::new(Arc::new(CategoryStore::new()))
    }

    fn create(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest { name: name.into() }
    }

    #[test]
    fn category_crud_service() -> Result<(), anyhow::Error> {
        let svc = svc();
        assert!(svc.list().is_empty());

        let c = svc.create(create("Books"))?;
        assert_eq!(c, Category { id: 0, name: "Books".into() });
        assert_eq!(svc.get(0), Some(c.clone()));

        let updated = svc.update(0, UpdateCategoryRequest { id: Some(0), name: "Novels".into() })?;
        assert_eq!(updated.name, "Novels");
        assert_eq!(svc.get(0).unwrap().name, "Novels");

        // body without id takes the path id
        let updated = svc.update(0, UpdateCategoryRequest { id: None, name: "Comics".into() })?;
        assert_eq!(updated, Category { id: 0, name: "Comics".into() });

        assert!(svc.delete(0));
        assert!(!svc.delete(0));
        assert_eq!(svc.get(0), None);
        Ok(())
    }

    #[test]
    fn create_rejects_short_or_missing_names() {
        let svc = svc();
        assert!(matches!(svc.create(create("ab")), Err(ServiceError::Model(_))));
        assert!(matches!(svc.create(create("")), Err(ServiceError::Model(_))));
        assert!(svc.list().is_empty());
        // failed creates do not burn ids
        assert_eq!(svc.create(create("Books")).unwrap().id, 0);
    }

    #[test]
    fn update_rejects_mismatched_body_id() {
        let svc = svc();
        svc.create(create("Books")).unwrap();
        svc.create(create("Tools")).unwrap();

        let err = svc
            .update(0, UpdateCategoryRequest { id: Some(1), name: "Hijack".into() })
            .unwrap_err();
        assert!(matches!(err, ServiceError::IdMismatch { path: 0, body: 1 }));
        assert_eq!(svc.get(1).unwrap().name, "Tools");
        assert_eq!(svc.get(0).unwrap().name, "Books");
    }

    #[test]
    fn update_missing_is_not_found() {
        let svc = svc();
        let err = svc
            .update(5, UpdateCategoryRequest { id: Some(5), name: "X-ray".into() })
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(svc.list().is_empty());
    }

    #[test]
    fn update_validates_before_lookup() {
        let svc = svc();
        let err = svc
            .update(5, UpdateCategoryRequest { id: Some(5), name: "X".into() })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
    }
}
