// core/src/profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};

pub const PHONE_MIN_LEN: usize = 7;
pub const PHONE_MAX_LEN: usize = 20;

/// Per-user profile row. `id` equals the identity provider's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub id: Uuid,
  pub email: Option<String>,
  pub full_name: Option<String>,
  pub phone_number: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Normalizes a phone number update. Blank clears the number.
pub fn sanitize_phone_number(raw: Option<&str>) -> MarketResult<Option<String>> {
  let trimmed = match raw.map(str::trim) {
    Some(t) if !t.is_empty() => t,
    _ => return Ok(None),
  };
  let len = trimmed.chars().count();
  if !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len) {
    return Err(MarketError::InvalidInput(format!(
      "Phone number must be between {} and {} characters",
      PHONE_MIN_LEN, PHONE_MAX_LEN
    )));
  }
  Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_clears() {
    assert_eq!(sanitize_phone_number(None).unwrap(), None);
    assert_eq!(sanitize_phone_number(Some("   ")).unwrap(), None);
  }

  #[test]
  fn length_bounds_are_inclusive() {
    assert_eq!(sanitize_phone_number(Some(" 5550100 ")).unwrap().as_deref(), Some("5550100"));
    assert!(sanitize_phone_number(Some("555010")).is_err());
    assert!(sanitize_phone_number(Some(&"1".repeat(20))).is_ok());
    assert!(sanitize_phone_number(Some(&"1".repeat(21))).is_err());
  }
}
