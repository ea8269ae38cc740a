use planet_favorites::{
    app,
    state::{process_start_date, AppState},
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Read the local date while the process is still single-threaded.
    let started_on = process_start_date();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(started_on))
}

async fn run(started_on: time::Date) -> anyhow::Result<()> {
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "planet_favorites=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init(started_on).await?;
    tracing::info!(%started_on, "favorites will be stamped with the process start date");
    let addr = app_state.config.bind_addr();

    app::serve(app::build_app(app_state), &addr).await
}
