//! HTTP server bootstrap

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::core::{Config, ServerState};
use crate::routes;

/// Bind and serve until ctrl-c
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.http_port);
    let state = ServerState::new(config);
    let app = routes::build_app(state.clone());

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        environment = %state.config.environment,
        "Shepherd server listening on {}",
        addr
    );

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_token.cancel();
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_stays_usable_after_app_is_built() {
        let state = ServerState::new(Config::default());
        let _app = routes::build_app(state.clone());
        // The bootstrap logs from `state` after handing a clone to the router
        assert_eq!(state.config.environment, "development");
    }
}
