// Adapters layer: concrete implementations for external systems.

pub mod postgres;

pub use crate::adapters::postgres::PgProductRepository;
