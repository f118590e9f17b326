// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use marketvoice::{NewProduct, Principal, Product, ProductStore, Profile, UserIdentity};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;
use uuid::Uuid;

// --- Product builders ---

/// A product with a deterministic timestamp `minutes` after a fixed epoch.
pub fn product_at(name: &str, unit: &str, price: i64, minutes: i64) -> Product {
  let base = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    price: Decimal::new(price, 0),
    quantity_unit: unit.to_string(),
    description: None,
    meeting_point: None,
    seller_id: Uuid::nil(),
    created_at: base + Duration::minutes(minutes),
  }
}

pub fn product(name: &str, unit: &str, price: i64) -> Product {
  product_at(name, unit, price, 0)
}

pub fn with_description(mut p: Product, description: &str) -> Product {
  p.description = Some(description.to_string());
  p
}

pub fn with_meeting_point(mut p: Product, meeting_point: &str) -> Product {
  p.meeting_point = Some(meeting_point.to_string());
  p
}

/// The two-product catalog used throughout the search examples.
pub fn eggs_and_milk() -> Vec<Product> {
  vec![
    product("Fresh Eggs", "dozen", 2),
    with_description(product("Milk", "gallon", 5), "Organic whole milk"),
  ]
}

pub fn names(products: &[Product]) -> Vec<&str> {
  products.iter().map(|p| p.name.as_str()).collect()
}

pub fn new_product(name: &str, price: f64, unit: Option<&str>) -> NewProduct {
  NewProduct::parse(Some(name), Some(&serde_json::json!(price)), unit, None, None).unwrap()
}

// --- Principals ---

pub fn user(name: &str) -> Principal {
  Principal::User(UserIdentity {
    id: Uuid::new_v4(),
    display_name: name.to_string(),
    email: Some(format!("{}@example.com", name.to_lowercase())),
  })
}

pub fn user_id(p: &Principal) -> Uuid {
  p.user().expect("user principal").id
}

pub fn profile_for(p: &Principal) -> Profile {
  let now = Utc::now();
  Profile {
    id: user_id(p),
    email: p.user().and_then(|u| u.email.clone()),
    full_name: p.user().map(|u| u.display_name.clone()),
    phone_number: None,
    created_at: now,
    updated_at: now,
  }
}

// --- Failing collaborator ---

/// Product store whose every call fails, counting attempts so tests can
/// assert nothing retries.
#[derive(Default)]
pub struct FailingStore {
  pub calls: AtomicUsize,
}

impl FailingStore {
  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn fail<T>(&self) -> anyhow::Result<T> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(anyhow::anyhow!("connection refused").context("products table unavailable"))
  }
}

#[async_trait]
impl ProductStore for FailingStore {
  async fn fetch_all_products(&self) -> anyhow::Result<Vec<Product>> {
    self.fail()
  }

  async fn create_product(&self, _product: NewProduct, _seller_id: Uuid) -> anyhow::Result<Product> {
    self.fail()
  }

  async fn delete_product(&self, _id: Uuid, _owner_id: Uuid) -> anyhow::Result<Option<Product>> {
    self.fail()
  }

  async fn list_products_by_owner(&self, _owner_id: Uuid) -> anyhow::Result<Vec<Product>> {
    self.fail()
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
