// server/src/models/product.rs

use chrono::{DateTime, Utc};
use marketvoice::Product;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: Uuid,
  pub name: String,
  pub price: Decimal, // NUMERIC(12, 2)
  pub quantity_unit: String,
  pub description: Option<String>,
  pub meeting_point: Option<String>,
  pub seller_id: Uuid,
  pub created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      price: row.price,
      quantity_unit: row.quantity_unit,
      description: row.description,
      meeting_point: row.meeting_point,
      seller_id: row.seller_id,
      created_at: row.created_at,
    }
  }
}
