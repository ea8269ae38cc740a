use crate::db::{with_pool, Db};
use crate::users::repo_types::User;

impl User {
    /// Insert a user. Used by seeding tools; no route creates users.
    pub async fn insert(
        db: &Db,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<User, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO "user" (email, password, is_active)
                VALUES ($1, $2, $3)
                RETURNING id, email, password, is_active
                "#,
            )
            .bind(email)
            .bind(password)
            .bind(is_active)
            .fetch_one(pool)
            .await
        })
    }

    pub async fn find_by_id(db: &Db, id: i64) -> Result<Option<User>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, email, password, is_active
                FROM "user"
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }

    pub async fn find_by_email(db: &Db, email: &str) -> Result<Option<User>, sqlx::Error> {
        with_pool!(db, pool => {
            sqlx::query_as::<_, User>(
                r#"
                SELECT id, email, password, is_active
                FROM "user"
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(pool)
            .await
        })
    }
}
