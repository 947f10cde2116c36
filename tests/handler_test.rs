use async_trait::async_trait;
use product_lookup::utils::error::Result;
use product_lookup::{Function, LookupError, Product, ProductRepository};
use rust_decimal::Decimal;

fn chai() -> Product {
    Product {
        id: 1,
        name: Some("Chai".to_string()),
        unit_price: Decimal::from(10),
    }
}

struct StubRepository {
    product: Option<Product>,
}

#[async_trait]
impl ProductRepository for StubRepository {
    async fn get_product(&self, _id: i32) -> Result<Option<Product>> {
        Ok(self.product.clone())
    }
}

struct PanickingRepository;

#[async_trait]
impl ProductRepository for PanickingRepository {
    async fn get_product(&self, _id: i32) -> Result<Option<Product>> {
        panic!("repository must not be consulted for unusable input");
    }
}

struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn get_product(&self, _id: i32) -> Result<Option<Product>> {
        Err(LookupError::DatabaseError(sqlx::Error::PoolClosed))
    }
}

#[tokio::test]
async fn returns_product_for_known_id() {
    let function = Function::new(StubRepository {
        product: Some(chai()),
    });

    let result = function.handle("1").await.unwrap();
    assert_eq!(result, Some(chai()));
}

#[tokio::test]
async fn trims_surrounding_whitespace() {
    let function = Function::new(StubRepository {
        product: Some(chai()),
    });

    let result = function.handle("  1 ").await.unwrap();
    assert_eq!(result, Some(chai()));
}

#[tokio::test]
async fn returns_none_for_non_numeric_input() {
    let function = Function::new(StubRepository {
        product: Some(chai()),
    });

    for input in ["abc", "", "  ", "1.5", "one", "2147483648"] {
        let result = function.handle(input).await.unwrap();
        assert_eq!(result, None, "input {input:?} should yield an absent result");
    }
}

#[tokio::test]
async fn returns_none_for_zero_input() {
    let function = Function::new(StubRepository {
        product: Some(chai()),
    });

    for input in ["0", "000", "-0"] {
        let result = function.handle(input).await.unwrap();
        assert_eq!(result, None, "input {input:?} should yield an absent result");
    }
}

#[tokio::test]
async fn repository_is_not_consulted_for_unusable_input() {
    let function = Function::new(PanickingRepository);

    assert_eq!(function.handle("abc").await.unwrap(), None);
    assert_eq!(function.handle("0").await.unwrap(), None);
}

#[tokio::test]
async fn returns_none_when_record_is_missing() {
    let function = Function::new(StubRepository { product: None });

    let result = function.handle("42").await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn storage_failure_propagates_as_error() {
    let function = Function::new(FailingRepository);

    let result = function.handle("1").await;
    assert!(matches!(result, Err(LookupError::DatabaseError(_))));
}

#[tokio::test]
async fn product_serializes_with_the_wire_field_names() {
    let value = serde_json::to_value(chai()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "id": 1, "name": "Chai", "price": 10.0 })
    );
}
