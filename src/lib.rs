pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::postgres::PgProductRepository;
pub use crate::core::{handler::Function, resolver::DependencyResolver};
pub use crate::domain::{model::Product, ports::ProductRepository};
pub use crate::utils::error::{LookupError, Result};
