pub mod errors;
pub mod category;
