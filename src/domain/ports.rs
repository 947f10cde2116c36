use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-side port for product storage. A missing row is a normal outcome
/// (`Ok(None)`), never an error; `Err` is reserved for connectivity and
/// storage failures, which propagate to the caller uncaught.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_product(&self, id: i32) -> Result<Option<Product>>;
}
