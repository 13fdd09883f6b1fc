use anyhow::Context;

use ruralmarket_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, problems) = ApiConfig::from_env();
    ruralmarket_observability::init(config.log_format);
    for problem in &problems {
        tracing::warn!(error = %problem, "ignoring invalid configuration value");
    }

    let app = ruralmarket_api::app::build_app(config.app_settings());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        generation_delay_ms = config.generation_delay.as_millis() as u64,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
