use anyhow::Context;

use ordergate_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ordergate_observability::init();

    let config = ApiConfig::from_env()?;
    let services = ordergate_api::app::services::build_services(&config)?;
    let app = ordergate_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
