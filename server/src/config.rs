// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;

pub const DEFAULT_VOICE_API_URL: &str = "https://api.elevenlabs.io";

/// Where products and profiles are persisted.
#[derive(Debug)]
pub enum StoreBackend {
  Postgres { database_url: SecretString },
  /// Process-local tables; contents are lost on restart.
  Memory,
}

/// Everything the server needs from its environment, read once at startup.
#[derive(Debug)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,

  // Hosted identity provider
  pub supabase_url: String,
  pub supabase_anon_key: SecretString,
  pub supabase_service_role_key: SecretString,

  // Conversational voice provider
  pub elevenlabs_api_url: String,
  pub elevenlabs_api_key: SecretString,
  pub elevenlabs_agent_id: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source. Fails on the first missing
  /// or malformed value.
  pub fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let optional = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let required = |name: &str| {
      optional(name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", name)))
    };

    let server_host = optional("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = optional("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let store_backend = match optional("STORE_BACKEND").as_deref().unwrap_or("postgres") {
      "postgres" => StoreBackend::Postgres {
        database_url: SecretString::from(required("DATABASE_URL")?),
      },
      "memory" => StoreBackend::Memory,
      other => {
        return Err(AppError::Config(format!(
          "Invalid STORE_BACKEND '{}': expected 'postgres' or 'memory'",
          other
        )))
      }
    };

    let supabase_url = http_url("SUPABASE_URL", required("SUPABASE_URL")?)?;
    let supabase_anon_key = SecretString::from(required("SUPABASE_ANON_KEY")?);
    let supabase_service_role_key = SecretString::from(required("SUPABASE_SERVICE_ROLE_KEY")?);

    let elevenlabs_api_url = http_url(
      "ELEVENLABS_API_URL",
      optional("ELEVENLABS_API_URL").unwrap_or_else(|| DEFAULT_VOICE_API_URL.to_string()),
    )?;
    let elevenlabs_api_key = SecretString::from(required("ELEVENLABS_API_KEY")?);
    let elevenlabs_agent_id = required("ELEVENLABS_AGENT_ID")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      supabase_url,
      supabase_anon_key,
      supabase_service_role_key,
      elevenlabs_api_url,
      elevenlabs_api_key,
      elevenlabs_agent_id,
    })
  }
}

fn http_url(name: &str, value: String) -> Result<String> {
  if value.starts_with("http://") || value.starts_with("https://") {
    Ok(value.trim_end_matches('/').to_string())
  } else {
    Err(AppError::Config(format!("{} must be an http(s) URL, got '{}'", name, value)))
  }
}
