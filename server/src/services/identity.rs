// server/src/services/identity.rs

//! Resolves bearer access tokens to users via the hosted auth provider.

use anyhow::Context;
use async_trait::async_trait;
use marketvoice::UserIdentity;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::AppConfig;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
  /// `Ok(None)` means the token was understood and rejected.
  async fn resolve(&self, access_token: &str) -> anyhow::Result<Option<UserIdentity>>;
}

pub struct SupabaseIdentity {
  http: reqwest::Client,
  user_endpoint: String,
  anon_key: SecretString,
}

impl SupabaseIdentity {
  pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .context("failed to build identity HTTP client")?;
    Ok(Self {
      http,
      user_endpoint: format!("{}/auth/v1/user", config.supabase_url),
      anon_key: SecretString::from(config.supabase_anon_key.expose_secret().to_string()),
    })
  }
}

#[derive(Debug, Deserialize)]
struct AuthUser {
  id: Uuid,
  email: Option<String>,
  #[serde(default)]
  user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
  first_name: Option<String>,
  full_name: Option<String>,
}

impl From<AuthUser> for UserIdentity {
  fn from(user: AuthUser) -> Self {
    let display_name = user
      .user_metadata
      .first_name
      .or(user.user_metadata.full_name)
      .filter(|n| !n.trim().is_empty())
      .unwrap_or_else(|| "User".to_string());
    UserIdentity {
      id: user.id,
      display_name,
      email: user.email,
    }
  }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
  #[instrument(name = "identity::resolve", skip(self, access_token))]
  async fn resolve(&self, access_token: &str) -> anyhow::Result<Option<UserIdentity>> {
    let resp = self
      .http
      .get(&self.user_endpoint)
      .header("apikey", self.anon_key.expose_secret())
      .bearer_auth(access_token)
      .send()
      .await
      .context("identity provider unreachable")?;

    match resp.status() {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        warn!("Access token rejected by identity provider.");
        Ok(None)
      }
      status if status.is_success() => {
        let user: AuthUser = resp.json().await.context("malformed identity provider response")?;
        debug!(user_id = %user.id, "Access token resolved.");
        Ok(Some(user.into()))
      }
      status => Err(anyhow::anyhow!("identity provider returned {}", status)),
    }
  }
}
