use anyhow::Context;
use retail_dashboard_client::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("retail-dashboard-client starting");

    let state = AppState::from_env()?;

    let health = state
        .api
        .health_check()
        .await
        .context("backend health check failed")?;

    tracing::info!(
        "backend reachable: {} v{} ({})",
        health.service,
        health.version,
        health.status
    );

    Ok(())
}
