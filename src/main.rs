use predict_server::{app, config::ServerConfig, error::{ServerError, ServerResult}};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| config.default_log_filter().into())))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;
    tracing::info!(addr=%addr, debug=config.debug, "server listening");

    axum::serve(listener, app()).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown signal"),
        Err(err) => {
            // Without a signal handler, keep serving until the process is killed.
            tracing::error!(error=%err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
