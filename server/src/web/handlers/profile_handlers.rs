// server/src/web/handlers/profile_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::ActingPrincipal;

#[derive(Deserialize, Debug)]
pub struct UpdateProfilePayload {
  /// Blank or absent clears the number.
  pub phone_number: Option<String>,
  /// Only honored for the trusted service.
  pub user_id: Option<Uuid>,
}

#[instrument(name = "handler::get_profile", skip(app_state, principal))]
pub async fn get_profile_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
) -> Result<HttpResponse, AppError> {
  let profile = app_state.marketplace.profile(&principal.0).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true, "profile": profile })))
}

#[instrument(
    name = "handler::update_profile",
    skip(app_state, principal, payload),
    fields(principal = principal.0.kind())
)]
pub async fn update_profile_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
  payload: web::Json<UpdateProfilePayload>,
) -> Result<HttpResponse, AppError> {
  let profile = app_state
    .marketplace
    .update_phone_number(&principal.0, payload.user_id, payload.phone_number.as_deref())
    .await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "profile": profile,
      "message": "Profile updated successfully",
  })))
}
