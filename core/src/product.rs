// core/src/product.rs

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};

/// Unit used when a listing does not name one.
pub const DEFAULT_QUANTITY_UNIT: &str = "item";

const MISSING_FIELDS: &str = "Missing required fields: name and price are required";
const BAD_PRICE: &str = "Price must be a positive number";

/// Prices are stored as `numeric(12, 2)`: cents precision, ten integer digits.
pub const PRICE_SCALE: u32 = 2;
// 999_999_999_999 (0xE8_D4A5_0FFF) at PRICE_SCALE; `Decimal::new` is not const.
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_0FFF, 0xE8, 0, false, PRICE_SCALE);

/// A stored listing. This is also the exact shape returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub quantity_unit: String,
  pub description: Option<String>,
  pub meeting_point: Option<String>,
  pub seller_id: Uuid,
  pub created_at: DateTime<Utc>,
}

/// Validated input for a new listing.
///
/// Only [`NewProduct::parse`] builds one, so a value of this type always has a
/// trimmed non-empty name, a positive price and a lower-case unit.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  name: String,
  price: Decimal,
  quantity_unit: String,
  description: Option<String>,
  meeting_point: Option<String>,
}

impl NewProduct {
  /// Normalizes raw listing fields.
  ///
  /// `price` accepts a JSON number or a numeric string.
  pub fn parse(
    name: Option<&str>,
    price: Option<&Value>,
    quantity_unit: Option<&str>,
    description: Option<&str>,
    meeting_point: Option<&str>,
  ) -> MarketResult<Self> {
    let name = name.map(str::trim).filter(|n| !n.is_empty());
    let price = price.filter(|p| !p.is_null());
    let (name, price) = match (name, price) {
      (Some(name), Some(price)) => (name, price),
      _ => return Err(MarketError::InvalidInput(MISSING_FIELDS.to_string())),
    };

    let price = parse_price(price)?;

    let quantity_unit = quantity_unit
      .map(str::trim)
      .filter(|u| !u.is_empty())
      .unwrap_or(DEFAULT_QUANTITY_UNIT)
      .to_lowercase();

    Ok(Self {
      name: name.to_string(),
      price,
      quantity_unit,
      description: non_blank(description),
      meeting_point: non_blank(meeting_point),
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn price(&self) -> Decimal {
    self.price
  }

  pub fn quantity_unit(&self) -> &str {
    &self.quantity_unit
  }

  pub fn description(&self) -> Option<&str> {
    self.description.as_deref()
  }

  pub fn meeting_point(&self) -> Option<&str> {
    self.meeting_point.as_deref()
  }

  /// Materializes the listing with store-assigned identity and timestamp.
  pub fn into_product(self, id: Uuid, seller_id: Uuid, created_at: DateTime<Utc>) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      quantity_unit: self.quantity_unit,
      description: self.description,
      meeting_point: self.meeting_point,
      seller_id,
      created_at,
    }
  }
}

fn parse_price(raw: &Value) -> MarketResult<Decimal> {
  let text = match raw {
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.trim().to_string(),
    _ => return Err(MarketError::InvalidInput(BAD_PRICE.to_string())),
  };
  let bad_price = || MarketError::InvalidInput(BAD_PRICE.to_string());
  let exact = Decimal::from_str(&text)
    .or_else(|_| Decimal::from_scientific(&text))
    .map_err(|_| bad_price())?;

  // Round the way the column does so both stores keep the same value.
  let price = exact.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
  if price <= Decimal::ZERO || price > MAX_PRICE {
    return Err(bad_price());
  }
  Ok(price.normalize())
}

fn non_blank(value: Option<&str>) -> Option<String> {
  value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}
