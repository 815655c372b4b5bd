use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Bare `{"status": ...}` acknowledgement returned by mutating endpoints.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
}

impl StatusMessage {
    pub fn deleted() -> Self {
        Self { status: "deleted".into() }
    }
}
