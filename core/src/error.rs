// core/src/error.rs
use thiserror::Error;

/// Every way a marketplace operation can fail.
///
/// None of these are retried by the core. The caller decides whether to
/// re-issue the request.
#[derive(Debug, Error)]
pub enum MarketError {
  /// Client-supplied input was malformed or empty after normalization.
  #[error("{0}")]
  InvalidInput(String),

  /// No acceptable principal was presented.
  #[error("{0}")]
  Unauthorized(String),

  /// The principal is known but may not act on the requested subject.
  #[error("{0}")]
  Forbidden(String),

  /// The row does not exist, or exists but belongs to someone else.
  /// The two cases are deliberately indistinguishable to the caller.
  #[error("{0}")]
  NotFoundOrForbidden(String),

  /// A collaborator (store, identity provider, voice provider) failed.
  #[error("Failed to {operation}")]
  DependencyFailure { operation: String, details: String },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl MarketError {
  /// Wraps a collaborator error, keeping its full `{:#}` chain as the detail.
  pub fn dependency(operation: impl Into<String>, source: anyhow::Error) -> Self {
    MarketError::DependencyFailure {
      operation: operation.into(),
      details: format!("{:#}", source),
    }
  }

  /// Detail text for variants that carry one.
  pub fn details(&self) -> Option<&str> {
    match self {
      MarketError::DependencyFailure { details, .. } => Some(details),
      MarketError::Internal(m) => Some(m),
      _ => None,
    }
  }
}

pub type MarketResult<T, E = MarketError> = std::result::Result<T, E>;
