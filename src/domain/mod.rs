// Domain layer: core model and ports (interfaces). No external dependencies
// beyond serde/sqlx derives on the model.

pub mod model;
pub mod ports;

pub use crate::domain::model::Product;
pub use crate::domain::ports::ProductRepository;
