// server/src/services/voice.rs

//! Signed WebSocket URLs for browser voice sessions.
//!
//! The voice pipeline itself runs at the provider. The browser connects to
//! the signed URL directly; this server only mints it with its API key.

use anyhow::Context;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, instrument};

use crate::config::AppConfig;

#[async_trait]
pub trait VoiceSessionProvider: Send + Sync {
  async fn signed_url(&self, agent_id: &str) -> anyhow::Result<String>;
}

pub struct ElevenLabsVoice {
  http: reqwest::Client,
  signed_url_endpoint: String,
  api_key: SecretString,
}

impl ElevenLabsVoice {
  pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(15))
      .build()
      .context("failed to build voice HTTP client")?;
    Ok(Self {
      http,
      signed_url_endpoint: format!("{}/v1/convai/conversation/get-signed-url", config.elevenlabs_api_url),
      api_key: SecretString::from(config.elevenlabs_api_key.expose_secret().to_string()),
    })
  }
}

#[derive(Deserialize)]
struct SignedUrlResponse {
  signed_url: String,
}

#[async_trait]
impl VoiceSessionProvider for ElevenLabsVoice {
  #[instrument(name = "voice::signed_url", skip(self))]
  async fn signed_url(&self, agent_id: &str) -> anyhow::Result<String> {
    let resp: SignedUrlResponse = self
      .http
      .get(&self.signed_url_endpoint)
      .query(&[("agent_id", agent_id)])
      .header("xi-api-key", self.api_key.expose_secret())
      .send()
      .await
      .context("voice provider unreachable")?
      .error_for_status()
      .context("voice provider refused signed URL request")?
      .json()
      .await
      .context("malformed signed URL response")?;

    // The URL embeds a session token; log only that it was issued.
    info!("Signed voice session URL obtained.");
    Ok(resp.signed_url)
  }
}
