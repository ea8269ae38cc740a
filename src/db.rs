use std::str::FromStr;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

use crate::config::AppConfig;

/// Connection pool for whichever backend `DATABASE_URL` names.
#[derive(Clone, Debug)]
pub enum Db {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

/// Runs the same query code against the concrete pool behind a [`Db`].
/// Queries use `$N` placeholders, which both drivers accept.
macro_rules! with_pool {
    ($db:expr, $pool:ident => $body:expr) => {
        match $db {
            $crate::db::Db::Sqlite($pool) => $body,
            $crate::db::Db::Postgres($pool) => $body,
        }
    };
}
pub(crate) use with_pool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

/// Picks the backend from the URL scheme. Heroku-style `postgres://` URLs are
/// rewritten to `postgresql://`.
pub fn resolve_url(url: &str) -> anyhow::Result<(Backend, String)> {
    if let Some(rest) = url.strip_prefix("postgres://") {
        Ok((Backend::Postgres, format!("postgresql://{rest}")))
    } else if url.starts_with("postgresql://") {
        Ok((Backend::Postgres, url.to_string()))
    } else if url.starts_with("sqlite:") {
        Ok((Backend::Sqlite, url.to_string()))
    } else {
        anyhow::bail!("unsupported database url scheme: {url}")
    }
}

/// Opens the pool named by `DATABASE_URL`. SQLite files are created when absent.
pub async fn connect(config: &AppConfig) -> anyhow::Result<Db> {
    let (backend, url) = resolve_url(&config.database_url)?;
    let db = match backend {
        Backend::Sqlite => {
            let options = SqliteConnectOptions::from_str(&url)
                .with_context(|| format!("parse database url {url}"))?
                .create_if_missing(true)
                .foreign_keys(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await
                .context("connect to sqlite")?;
            Db::Sqlite(pool)
        }
        Backend::Postgres => {
            let options = PgConnectOptions::from_str(&url)
                .with_context(|| format!("parse database url {url}"))?;
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await
                .context("connect to postgres")?;
            Db::Postgres(pool)
        }
    };
    tracing::info!(backend = ?backend, "database opened");
    Ok(db)
}

/// Applies the embedded migrations for the pool's backend.
pub async fn migrate(db: &Db) -> anyhow::Result<()> {
    match db {
        Db::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await,
        Db::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await,
    }
    .context("run migrations")?;
    Ok(())
}

/// Single-connection in-memory SQLite database with the schema applied.
#[cfg(test)]
pub async fn in_memory() -> anyhow::Result<Db> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    let db = Db::Sqlite(pool);
    migrate(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heroku_postgres_scheme_is_rewritten() {
        let (backend, url) = resolve_url("postgres://u:p@db.example.com:5432/planets").unwrap();
        assert_eq!(backend, Backend::Postgres);
        assert_eq!(url, "postgresql://u:p@db.example.com:5432/planets");
    }

    #[test]
    fn postgresql_and_sqlite_urls_pass_through() {
        assert_eq!(
            resolve_url("postgresql://localhost/planets").unwrap(),
            (Backend::Postgres, "postgresql://localhost/planets".to_string())
        );
        assert_eq!(
            resolve_url("sqlite:///tmp/test.db").unwrap(),
            (Backend::Sqlite, "sqlite:///tmp/test.db".to_string())
        );
    }

    #[test]
    fn unknown_scheme_is_rejected() {
        let err = resolve_url("mysql://localhost/planets").unwrap_err();
        assert!(err.to_string().contains("mysql://"));
    }

    #[tokio::test]
    async fn in_memory_database_has_the_schema() {
        let db = in_memory().await.unwrap();
        let Db::Sqlite(pool) = &db else {
            panic!("in-memory database is sqlite");
        };
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite%' AND name NOT LIKE '%migrations' \
             ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap();
        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, ["favorite_planet", "planet", "user"]);
    }
}
