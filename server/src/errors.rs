// server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use marketvoice::MarketError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  /// Failures raised by marketplace operations or request extraction.
  #[error(transparent)]
  Market(#[from] MarketError),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  pub fn invalid_input(message: impl Into<String>) -> Self {
    AppError::Market(MarketError::InvalidInput(message.into()))
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    AppError::Market(MarketError::Unauthorized(message.into()))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Market(MarketError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
      AppError::Market(MarketError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
      AppError::Market(MarketError::Forbidden(_)) => StatusCode::FORBIDDEN,
      AppError::Market(MarketError::NotFoundOrForbidden(_)) => StatusCode::NOT_FOUND,
      AppError::Market(MarketError::DependencyFailure { .. })
      | AppError::Market(MarketError::Internal(_))
      | AppError::Config(_)
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, details = ?self.details(), "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }

    let body = match self {
      AppError::Market(err @ MarketError::DependencyFailure { details, .. }) => {
        json!({"error": err.to_string(), "details": details})
      }
      AppError::Market(MarketError::Internal(m)) | AppError::Internal(m) => {
        json!({"error": "Internal server error", "details": m})
      }
      AppError::Config(m) => json!({"error": "Configuration issue", "details": m}),
      AppError::Market(err) => json!({"error": err.to_string()}),
    };
    HttpResponse::build(status).json(body)
  }
}

impl AppError {
  fn details(&self) -> Option<&str> {
    match self {
      AppError::Market(err) => err.details(),
      AppError::Config(m) | AppError::Internal(m) => Some(m),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
