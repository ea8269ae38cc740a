use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Planet record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub planet_name: String, // unique, at most 120 chars
    pub population: i64,
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Planet {}>", self.planet_name)
    }
}
