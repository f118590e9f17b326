// core/src/store/mod.rs

//! Persistence collaborators.
//!
//! The core never talks to a database directly. It reads and writes through
//! these traits, and treats any failure as opaque `anyhow::Error` detail that
//! ends up in [`MarketError::DependencyFailure`](crate::MarketError).

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::product::{NewProduct, Product};
use crate::profile::Profile;

pub use memory::MemoryStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product, in the store's natural order. Search relies on this
  /// order being stable between calls for its tie-break.
  async fn fetch_all_products(&self) -> anyhow::Result<Vec<Product>>;

  async fn create_product(&self, product: NewProduct, seller_id: Uuid) -> anyhow::Result<Product>;

  /// Deletes `id` only if it is owned by `owner_id`, returning the removed
  /// row. `None` covers both "no such product" and "not yours".
  async fn delete_product(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Product>>;

  /// Products owned by `owner_id`, newest first.
  async fn list_products_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Product>>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
  async fn fetch_profile(&self, id: Uuid) -> anyhow::Result<Option<Profile>>;

  /// Sets (or clears) the phone number and returns the updated row, or
  /// `None` when no profile exists for `id`.
  async fn update_phone_number(&self, id: Uuid, phone_number: Option<String>) -> anyhow::Result<Option<Profile>>;
}
