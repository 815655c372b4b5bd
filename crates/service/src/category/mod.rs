pub mod repository;
pub mod service;

pub use repository::CategoryRepository;
pub use service::CategoryService;
