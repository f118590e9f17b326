// server/src/web/extractors.rs

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use marketvoice::{MarketError, Principal};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::state::AppState;

const SIGN_IN_REQUIRED: &str = "Unauthorized. Please sign in to continue.";

/// The principal a request acts as.
///
/// `Authorization: Bearer <service-role key>` is the trusted service (the
/// voice agent's webhook). Any other bearer token is resolved through the
/// identity provider.
#[derive(Debug, Clone)]
pub struct ActingPrincipal(pub Principal);

impl FromRequest for ActingPrincipal {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let state = req.app_data::<web::Data<AppState>>().cloned();
    let token = bearer_token(req);

    Box::pin(async move {
      let state = state.ok_or_else(|| AppError::Internal("Application state is not configured".to_string()))?;
      let token = token.ok_or_else(|| {
        warn!("ActingPrincipal extractor: missing or malformed Authorization header.");
        AppError::unauthorized(SIGN_IN_REQUIRED)
      })?;

      if is_service_key(&token, &state.config.supabase_service_role_key) {
        debug!("Request authenticated as trusted service.");
        return Ok(ActingPrincipal(Principal::TrustedService));
      }

      match state.identity.resolve(&token).await {
        Ok(Some(user)) => Ok(ActingPrincipal(Principal::User(user))),
        Ok(None) => Err(AppError::unauthorized(SIGN_IN_REQUIRED)),
        Err(e) => Err(MarketError::dependency("verify session", e).into()),
      }
    })
  }
}

/// Compares in constant time for equal-length inputs.
fn is_service_key(token: &str, service_key: &SecretString) -> bool {
  token.as_bytes().ct_eq(service_key.expose_secret().as_bytes()).into()
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
  let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
  let (scheme, token) = value.trim().split_once(' ')?;
  let token = token.trim();
  (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}
