use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Join row between a user and a planet, keyed by the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FavoritePlanet {
    pub user_id: i64,
    pub planet_id: i64,
    pub insertion_date: Date,
}

/// A favorite joined with the names on both ends.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FavoriteDetails {
    pub email: String,
    pub planet_name: String,
    pub insertion_date: Date,
}

impl fmt::Display for FavoriteDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Planet {} likes {} on date {}>",
            self.email, self.planet_name, self.insertion_date
        )
    }
}
