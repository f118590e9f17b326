// server/src/services/pg_store.rs

//! Postgres-backed product and profile stores (runtime-checked sqlx queries).
//! Table definitions live in `schema.sql` at the crate root.

use anyhow::Context;
use async_trait::async_trait;
use marketvoice::{NewProduct, Product, ProductStore, Profile, ProfileStore};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::models::{ProductRow, ProfileRow};

#[derive(Clone)]
pub struct PgStore {
  pool: PgPool,
}

impl PgStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductStore for PgStore {
  #[instrument(name = "pg_store::fetch_all_products", skip(self))]
  async fn fetch_all_products(&self) -> anyhow::Result<Vec<Product>> {
    // Fixed order so equal-score search results tie-break the same way every time.
    let rows: Vec<ProductRow> = sqlx::query_as(
      "SELECT id, name, price, quantity_unit, description, meeting_point, seller_id, created_at \
       FROM products ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(&self.pool)
    .await
    .context("failed to read products")?;

    debug!("Fetched {} products.", rows.len());
    Ok(rows.into_iter().map(Product::from).collect())
  }

  #[instrument(name = "pg_store::create_product", skip(self, product), fields(name = product.name()))]
  async fn create_product(&self, product: NewProduct, seller_id: Uuid) -> anyhow::Result<Product> {
    let row: ProductRow = sqlx::query_as(
      "INSERT INTO products (name, price, quantity_unit, description, meeting_point, seller_id) \
       VALUES ($1, $2, $3, $4, $5, $6) \
       RETURNING id, name, price, quantity_unit, description, meeting_point, seller_id, created_at",
    )
    .bind(product.name())
    .bind(product.price())
    .bind(product.quantity_unit())
    .bind(product.description())
    .bind(product.meeting_point())
    .bind(seller_id)
    .fetch_one(&self.pool)
    .await
    .context("failed to insert product")?;

    Ok(row.into())
  }

  #[instrument(name = "pg_store::delete_product", skip(self))]
  async fn delete_product(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Product>> {
    // Ownership is part of the predicate; a non-owner deletes nothing.
    let row: Option<ProductRow> = sqlx::query_as(
      "DELETE FROM products WHERE id = $1 AND seller_id = $2 \
       RETURNING id, name, price, quantity_unit, description, meeting_point, seller_id, created_at",
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(&self.pool)
    .await
    .context("failed to delete product")?;

    Ok(row.map(Product::from))
  }

  #[instrument(name = "pg_store::list_products_by_owner", skip(self))]
  async fn list_products_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(
      "SELECT id, name, price, quantity_unit, description, meeting_point, seller_id, created_at \
       FROM products WHERE seller_id = $1 ORDER BY created_at DESC",
    )
    .bind(owner_id)
    .fetch_all(&self.pool)
    .await
    .context("failed to read seller products")?;

    Ok(rows.into_iter().map(Product::from).collect())
  }
}

#[async_trait]
impl ProfileStore for PgStore {
  #[instrument(name = "pg_store::fetch_profile", skip(self))]
  async fn fetch_profile(&self, id: Uuid) -> anyhow::Result<Option<Profile>> {
    let row: Option<ProfileRow> = sqlx::query_as(
      "SELECT id, email, full_name, phone_number, created_at, updated_at FROM profiles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .context("failed to read profile")?;

    Ok(row.map(Profile::from))
  }

  #[instrument(name = "pg_store::update_phone_number", skip(self, phone_number))]
  async fn update_phone_number(&self, id: Uuid, phone_number: Option<String>) -> anyhow::Result<Option<Profile>> {
    let row: Option<ProfileRow> = sqlx::query_as(
      "UPDATE profiles SET phone_number = $2, updated_at = now() WHERE id = $1 \
       RETURNING id, email, full_name, phone_number, created_at, updated_at",
    )
    .bind(id)
    .bind(phone_number)
    .fetch_optional(&self.pool)
    .await
    .context("failed to update profile")?;

    Ok(row.map(Profile::from))
  }
}
