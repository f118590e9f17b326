// server/src/state.rs
use crate::config::AppConfig;
use crate::services::identity::IdentityProvider;
use crate::services::voice::VoiceSessionProvider;
use marketvoice::Marketplace;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub marketplace: Marketplace,
  pub identity: Arc<dyn IdentityProvider>,
  pub voice: Arc<dyn VoiceSessionProvider>,
  pub config: Arc<AppConfig>, // Share loaded config
}
