use crate::domain::model::Product;
use crate::domain::ports::ProductRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use sqlx::PgPool;

/// Product repository backed by a Postgres pool. The pool hands each logical
/// invocation its own connection, so a single repository instance is safe to
/// share across concurrent requests.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `products` table if needed and seeds the one well-known
    /// row (id=1, name="Chai", price=10). Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS products (
                id INT PRIMARY KEY,
                name TEXT NULL,
                unit_price NUMERIC NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"INSERT INTO products (id, name, unit_price)
               VALUES (1, 'Chai', 10)
               ON CONFLICT (id) DO NOTHING"#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_product(&self, id: i32) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, unit_price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
