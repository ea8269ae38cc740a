use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database. Rows are seeded outside the HTTP surface.
/// Serializes as `{id, email}` only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String, // unique, at most 120 chars
    #[serde(skip_serializing)]
    pub password: String, // plaintext, never exposed in JSON
    #[serde(skip_serializing)]
    pub is_active: bool,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User '{}'>", self.email)
    }
}
