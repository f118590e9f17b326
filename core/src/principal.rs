// core/src/principal.rs

//! The acting identity behind every marketplace operation.
//!
//! Handlers never branch on whether a request body happens to carry a
//! `user_id`. They resolve a [`Principal`] first and hand it to the
//! [`Marketplace`](crate::Marketplace), which decides what that principal may
//! touch.

use serde::Serialize;
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};

/// A signed-in end user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
  pub id: Uuid,
  pub display_name: String,
  pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
  User(UserIdentity),
  /// Elevated server-to-server caller (the voice agent's tool webhook).
  /// Not bound to any user; it must always name the user it acts for.
  TrustedService,
}

impl Principal {
  pub fn user(&self) -> Option<&UserIdentity> {
    match self {
      Principal::User(u) => Some(u),
      Principal::TrustedService => None,
    }
  }

  /// The user this principal is acting as, or `Forbidden` for a service.
  pub fn require_user(&self) -> MarketResult<&UserIdentity> {
    self
      .user()
      .ok_or_else(|| MarketError::Forbidden("This operation requires a signed-in user".to_string()))
  }

  /// Resolves which user an operation applies to.
  ///
  /// A user may only act for themselves; `on_behalf_of` naming anyone else
  /// is rejected rather than silently ignored. A trusted service must always
  /// name its subject.
  pub fn subject(&self, on_behalf_of: Option<Uuid>) -> MarketResult<Uuid> {
    match (self, on_behalf_of) {
      (Principal::User(u), None) => Ok(u.id),
      (Principal::User(u), Some(other)) if other == u.id => Ok(u.id),
      (Principal::User(_), Some(_)) => Err(MarketError::Forbidden(
        "Users may only act on their own account".to_string(),
      )),
      (Principal::TrustedService, Some(subject)) => Ok(subject),
      (Principal::TrustedService, None) => Err(MarketError::InvalidInput(
        "user_id is required for service calls".to_string(),
      )),
    }
  }

  /// Short label for logs; never includes tokens.
  pub fn kind(&self) -> &'static str {
    match self {
      Principal::User(_) => "user",
      Principal::TrustedService => "trusted_service",
    }
  }
}
