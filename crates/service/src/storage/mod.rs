//! Storage implementations for the service layer
//!
//! Everything here lives in process memory and is gone on restart.

pub mod category_store;

pub use category_store::CategoryStore;
