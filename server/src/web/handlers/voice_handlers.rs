// server/src/web/handlers/voice_handlers.rs

use actix_web::{web, HttpResponse};
use marketvoice::MarketError;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::voice_agent;
use crate::state::AppState;
use crate::web::extractors::ActingPrincipal;

#[instrument(name = "handler::voice_signed_url", skip(app_state, principal))]
pub async fn signed_url_handler(
  app_state: web::Data<AppState>,
  principal: ActingPrincipal,
) -> Result<HttpResponse, AppError> {
  let user = principal.0.require_user()?;
  let agent_id = &app_state.config.elevenlabs_agent_id;
  info!(%agent_id, user_id = %user.id, "Requesting signed voice URL.");

  let signed_url = app_state
    .voice
    .signed_url(agent_id)
    .await
    .map_err(|e| MarketError::dependency("obtain voice session URL", e))?;

  Ok(HttpResponse::Ok().json(json!({
      "signedUrl": signed_url,
      "userId": user.id,
      "userName": user.display_name,
  })))
}

pub async fn agent_config_handler() -> HttpResponse {
  HttpResponse::Ok().json(voice_agent::agent_config())
}
