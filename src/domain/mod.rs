pub mod model;
pub mod synthetic;
