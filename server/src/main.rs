// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod services;
mod state;
mod web;

use crate::config::{AppConfig, StoreBackend};
use crate::services::identity::SupabaseIdentity;
use crate::services::pg_store::PgStore;
use crate::services::voice::ElevenLabsVoice;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // `web` is this crate's HTTP module
use marketvoice::{Marketplace, MemoryStore};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting marketplace server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(io::Error::other(e.to_string()));
    }
  };

  let marketplace = match &app_config.store_backend {
    StoreBackend::Postgres { database_url } => {
      let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url.expose_secret())
        .await
        .map_err(|e| {
          tracing::error!(error = %e, "Failed to connect to the database.");
          io::Error::other(e)
        })?;
      tracing::info!("Successfully connected to the database.");
      let store = Arc::new(PgStore::new(pool));
      Marketplace::new(store.clone(), store)
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory store; listings will not survive a restart.");
      let store = Arc::new(MemoryStore::new());
      Marketplace::new(store.clone(), store)
    }
  };

  let identity = SupabaseIdentity::new(&app_config).map_err(|e| io::Error::other(format!("{:#}", e)))?;
  let voice = ElevenLabsVoice::new(&app_config).map_err(|e| io::Error::other(format!("{:#}", e)))?;

  let app_state = actix_data::Data::new(AppState {
    marketplace,
    identity: Arc::new(identity),
    voice: Arc::new(voice),
    config: app_config.clone(),
  });

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(app_state.clone()) // Share AppState with handlers
      .app_data(web::json_config())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
