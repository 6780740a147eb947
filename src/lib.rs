pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::repository::Repository;
pub use domain::model::{CatalogueRow, Product, User, GRID_HEADER};
pub use infra::config::Config;
