mod app;
mod auth;
mod config;
mod error;
mod logs;
mod plans;
mod scores;
mod scoring;
mod state;
mod store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "fitplan=debug,axum=info,tower_http=info".to_string());
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

    let state = state::AppState::init().await?;

    sqlx::migrate!("./migrations").run(&state.db).await?;

    let host = state.config.host.clone();
    let port = state.config.port;
    tracing::info!(day_offset = %state.config.day_offset, "scoring days in fixed offset");

    app::serve(app::build_app(state), &host, port).await
}
