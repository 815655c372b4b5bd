use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Identifier handed out by the category store. Never reused within a process.
pub type CategoryId = u64;

/// Shortest accepted category name, counted in characters.
pub const MIN_NAME_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Body of `POST /categories`. The id is always assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /categories/{id}`. `id` may be omitted; when present it has to
/// match the path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: String,
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ModelError::Validation(format!(
            "name must be at least {MIN_NAME_LEN} characters"
        )));
    }
    Ok(())
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)
    }
}

impl UpdateCategoryRequest {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)
    }
}
