use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wallet_dashboard::{router, AppState, Config, SessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let session = SessionStore::open(config.session_path.clone()).await;
    let port = config.port;
    let state = AppState::new(config, session);

    // Page initialization: one price fetch, never repeated.
    let initial = state.clone();
    tokio::spawn(async move { initial.refresh_price().await });

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            tracing::error!("cannot listen for shutdown signal: {err}");
            std::future::pending::<()>().await
        }
    }
}
