use crate::domain::model::Product;
use crate::domain::ports::ProductRepository;
use crate::utils::error::Result;

/// The invocation handler: parses a string payload as a product id and
/// delegates to the repository. Non-numeric or zero input short-circuits to
/// an absent result without touching storage.
pub struct Function<R> {
    repository: R,
}

impl<R: ProductRepository> Function<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn handle(&self, input: &str) -> Result<Option<Product>> {
        let id = input.trim().parse::<i32>().unwrap_or(0);
        if id == 0 {
            tracing::debug!(input, "input did not parse to a usable id");
            return Ok(None);
        }

        self.repository.get_product(id).await
    }
}
