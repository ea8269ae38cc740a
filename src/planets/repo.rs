use crate::db::{with_pool, Db};
use crate::planets::repo_types::Planet;

impl Planet {
    /// Insert a planet and return the stored row with its assigned id.
    pub async fn insert(
        db: &Db,
        planet_name: &str,
        population: i64,
    ) -> Result<Planet, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, Planet>(
                r#"
                INSERT INTO planet (planet_name, population)
                VALUES ($1, $2)
                RETURNING id, planet_name, population
                "#,
            )
            .bind(planet_name)
            .bind(population)
            .fetch_one(pool)
            .await
        })
    }

    /// Find a planet by id.
    pub async fn find_by_id(db: &Db, id: i64) -> Result<Option<Planet>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, Planet>(
                r#"
                SELECT id, planet_name, population
                FROM planet
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}
