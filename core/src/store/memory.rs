// core/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::{ProductStore, ProfileStore};
use crate::product::{NewProduct, Product};
use crate::profile::Profile;

#[derive(Debug, Default)]
struct Tables {
  products: Vec<Product>,
  profiles: Vec<Profile>,
}

/// Process-local store backed by insertion-ordered vectors.
///
/// Cloning shares the same tables. Locks are never held across `.await`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a fully formed product as-is, keeping its id and timestamp.
  pub fn insert_product(&self, product: Product) {
    self.tables.write().products.push(product);
  }

  /// Inserts or replaces a profile row.
  pub fn upsert_profile(&self, profile: Profile) {
    let mut tables = self.tables.write();
    match tables.profiles.iter_mut().find(|p| p.id == profile.id) {
      Some(existing) => *existing = profile,
      None => tables.profiles.push(profile),
    }
  }

  pub fn product_count(&self) -> usize {
    self.tables.read().products.len()
  }
}

#[async_trait]
impl ProductStore for MemoryStore {
  async fn fetch_all_products(&self) -> anyhow::Result<Vec<Product>> {
    Ok(self.tables.read().products.clone())
  }

  async fn create_product(&self, product: NewProduct, seller_id: Uuid) -> anyhow::Result<Product> {
    let product = product.into_product(Uuid::new_v4(), seller_id, Utc::now());
    self.tables.write().products.push(product.clone());
    debug!(product_id = %product.id, "memory store inserted product");
    Ok(product)
  }

  async fn delete_product(&self, id: Uuid, owner_id: Uuid) -> anyhow::Result<Option<Product>> {
    let mut tables = self.tables.write();
    let position = tables
      .products
      .iter()
      .position(|p| p.id == id && p.seller_id == owner_id);
    Ok(position.map(|i| tables.products.remove(i)))
  }

  async fn list_products_by_owner(&self, owner_id: Uuid) -> anyhow::Result<Vec<Product>> {
    // Reverse first so rows sharing a timestamp still come out newest-inserted first.
    let mut owned: Vec<Product> = self
      .tables
      .read()
      .products
      .iter()
      .rev()
      .filter(|p| p.seller_id == owner_id)
      .cloned()
      .collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(owned)
  }
}

#[async_trait]
impl ProfileStore for MemoryStore {
  async fn fetch_profile(&self, id: Uuid) -> anyhow::Result<Option<Profile>> {
    Ok(self.tables.read().profiles.iter().find(|p| p.id == id).cloned())
  }

  async fn update_phone_number(&self, id: Uuid, phone_number: Option<String>) -> anyhow::Result<Option<Profile>> {
    let mut tables = self.tables.write();
    Ok(tables.profiles.iter_mut().find(|p| p.id == id).map(|p| {
      p.phone_number = phone_number;
      p.updated_at = Utc::now();
      p.clone()
    }))
  }
}
