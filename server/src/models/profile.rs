// server/src/models/profile.rs

use chrono::{DateTime, Utc};
use marketvoice::Profile;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
  pub id: Uuid,
  pub email: Option<String>,
  pub full_name: Option<String>,
  pub phone_number: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
  fn from(row: ProfileRow) -> Self {
    Profile {
      id: row.id,
      email: row.email,
      full_name: row.full_name,
      phone_number: row.phone_number,
      created_at: row.created_at,
      updated_at: row.updated_at,
    }
  }
}
