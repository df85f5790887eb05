use anyhow::Context;
use expense_tracker_backend::config::Config;
use expense_tracker_backend::{create_router, init_tracing, initialize_backend};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, &config)?;

    info!("Starting server on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
