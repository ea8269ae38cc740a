use crate::{
    config::AppConfig,
    db::{self, Db},
};
use std::sync::Arc;
use time::{Date, OffsetDateTime};

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Arc<AppConfig>,
    /// Date the process came up; stamped on every favorite inserted during its lifetime.
    pub started_on: Date,
}

/// Today's date in local time, falling back to UTC when the local offset
/// cannot be determined. `time` refuses to read the offset once the process
/// has several threads, so call this before starting the runtime.
pub fn process_start_date() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

impl AppState {
    pub async fn init(started_on: Date) -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config).await?;
        db::migrate(&db).await?;

        Ok(Self::from_parts(db, config, started_on))
    }

    pub fn from_parts(db: Db, config: Arc<AppConfig>, started_on: Date) -> Self {
        Self {
            db,
            config,
            started_on,
        }
    }

    #[cfg(test)]
    pub async fn fake() -> Self {
        let db = db::in_memory().await.expect("in-memory database");
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
        });
        Self::from_parts(db, config, time::macros::date!(2024 - 03 - 15))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_date_is_within_a_day_of_utc_today() {
        let utc_today = OffsetDateTime::now_utc().date();
        let started = process_start_date();
        let drift = (started - utc_today).whole_days().abs();
        assert!(drift <= 1, "local date {started} vs utc {utc_today}");
    }
}
