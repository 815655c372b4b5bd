//! Service layer for the categories API.
//! - `storage` holds the in-memory, lock-guarded category store.
//! - `category` defines the repository seam and the validating service on top.
//! - Errors are plain values; only the HTTP boundary turns them into responses.

pub mod errors;
pub mod storage;
pub mod category;
