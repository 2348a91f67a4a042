use clockface::{app, config::ServerConfig, logging};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = ServerConfig::default();

    logging::init(&config.log).expect("Failed to open the application log file");

    info!("Application started");

    let app = app(&config);

    let listener = TcpListener::bind(config.bind_addr).await.unwrap();

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Application stopped");
}

/// Completes once SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    }
}
