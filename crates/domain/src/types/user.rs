//! User and authentication response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account as returned by `/auth/me`; immutable from the client's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body returned by register and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}
