use time::Date;

use crate::db::{with_pool, Db};
use crate::favorites::repo_types::{FavoriteDetails, FavoritePlanet};
use crate::planets::Planet;
use crate::users::User;

impl FavoritePlanet {
    /// Insert a favorite. Existence of the user and planet is left to the
    /// store's foreign keys.
    pub async fn insert(
        db: &Db,
        user_id: i64,
        planet_id: i64,
        insertion_date: Date,
    ) -> Result<FavoritePlanet, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, FavoritePlanet>(
                r#"
                INSERT INTO favorite_planet (user_id, planet_id, insertion_date)
                VALUES ($1, $2, $3)
                RETURNING user_id, planet_id, insertion_date
                "#,
            )
            .bind(user_id)
            .bind(planet_id)
            .bind(insertion_date)
            .fetch_one(pool)
            .await
        })
    }

    /// Look up a favorite by its composite key.
    pub async fn find(
        db: &Db,
        user_id: i64,
        planet_id: i64,
    ) -> Result<Option<FavoritePlanet>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, FavoritePlanet>(
                r#"
                SELECT user_id, planet_id, insertion_date
                FROM favorite_planet
                WHERE user_id = $1 AND planet_id = $2
                "#,
            )
            .bind(user_id)
            .bind(planet_id)
            .fetch_optional(pool)
            .await
        })
    }

    /// Favorites held by a user, ordered by planet name.
    pub async fn list_for_user(db: &Db, user_id: i64) -> Result<Vec<FavoritePlanet>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, FavoritePlanet>(
                r#"
                SELECT f.user_id, f.planet_id, f.insertion_date
                FROM favorite_planet f
                JOIN planet p ON p.id = f.planet_id
                WHERE f.user_id = $1
                ORDER BY p.planet_name
                "#,
            )
            .bind(user_id)
            .fetch_all(pool)
            .await
        })
    }

    /// Users who favorited a planet, ordered by email.
    pub async fn list_for_planet(
        db: &Db,
        planet_id: i64,
    ) -> Result<Vec<FavoritePlanet>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, FavoritePlanet>(
                r#"
                SELECT f.user_id, f.planet_id, f.insertion_date
                FROM favorite_planet f
                JOIN "user" u ON u.id = f.user_id
                WHERE f.planet_id = $1
                ORDER BY u.email
                "#,
            )
            .bind(planet_id)
            .fetch_all(pool)
            .await
        })
    }

    pub async fn user(&self, db: &Db) -> Result<Option<User>, sqlx::Error> {
        User::find_by_id(db, self.user_id).await
    }

    pub async fn planet(&self, db: &Db) -> Result<Option<Planet>, sqlx::Error> {
        Planet::find_by_id(db, self.planet_id).await
    }

    /// Resolve both ends of this favorite in one query. `None` once the row is gone.
    pub async fn describe(&self, db: &Db) -> Result<Option<FavoriteDetails>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, FavoriteDetails>(
                r#"
                SELECT u.email, p.planet_name, f.insertion_date
                FROM favorite_planet f
                JOIN "user" u ON u.id = f.user_id
                JOIN planet p ON p.id = f.planet_id
                WHERE f.user_id = $1 AND f.planet_id = $2
                "#,
            )
            .bind(self.user_id)
            .bind(self.planet_id)
            .fetch_optional(pool)
            .await
        })
    }

    /// Delete this favorite's row.
    pub async fn delete(&self, db: &Db) -> Result<(), sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query("DELETE FROM favorite_planet WHERE user_id = $1 AND planet_id = $2")
                .bind(self.user_id)
                .bind(self.planet_id)
                .execute(pool)
                .await
                .map(|_| ())
        })
    }
}
