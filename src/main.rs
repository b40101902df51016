use payment_checkout::config::AppConfig;
use payment_checkout::http::routes::create_router;
use payment_checkout::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let app = create_router(AppState::from_config(&cfg));

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        "listening on {} (gateway behavior {}, delay {}ms)",
        cfg.bind_addr,
        cfg.mock_behavior,
        cfg.response_delay_ms
    );
    axum::serve(listener, app).await?;
    Ok(())
}
