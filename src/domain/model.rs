use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single domain entity exposed by this system. Rows are seeded at
/// schema-creation time; only point lookups by id are exercised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    #[serde(rename = "price")]
    pub unit_price: Decimal,
}
