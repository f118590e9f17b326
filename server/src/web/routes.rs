// server/src/web/routes.rs

use actix_web::web;
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::{product_handlers, profile_handlers, voice_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor config: malformed or mistyped bodies become 400 `{error}`
/// responses instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| {
    warn!(error = %err, "Rejected request body.");
    AppError::invalid_input(format!("Invalid request body: {}", err)).into()
  })
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/products")
          .service(
            web::resource("")
              .route(web::post().to(product_handlers::create_product_handler))
              .route(web::delete().to(product_handlers::delete_product_handler)),
          )
          .route("/search", web::post().to(product_handlers::search_products_handler))
          .route("/mine", web::get().to(product_handlers::list_my_products_handler)),
      )
      .service(
        web::scope("/profile")
          .service(
            web::resource("")
              .route(web::get().to(profile_handlers::get_profile_handler))
              .route(web::patch().to(profile_handlers::update_profile_handler)),
          ),
      )
      .service(
        web::scope("/voice")
          .route("/signed-url", web::post().to(voice_handlers::signed_url_handler))
          .route("/agent-config", web::get().to(voice_handlers::agent_config_handler)),
      ),
  );
}
