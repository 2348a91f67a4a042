#![allow(dead_code)]

use std::sync::Once;

use clockface::config::ServerConfig;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("clockface=debug")
            .with_test_writer()
            .init();
    });
}

/// Minimal clock page template used by the test fixtures. References the
/// request context the handler binds under the `request` key.
pub const TEST_TEMPLATE: &str = "<!DOCTYPE html>\n\
<html><head><title>Clock</title></head>\n\
<body><p>{{ request.method }} {{ request.path }}</p></body></html>\n";

/// A spawned test application together with its backing fixture directories.
///
/// The directories are removed when this is dropped, so tests keep it alive
/// for as long as they issue requests.
pub struct TestApp {
    pub address: String,
    pub static_dir: TempDir,
    pub template_dir: TempDir,
}

/// Spawns the application with a valid `index.html` fixture.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> TestApp {
    let static_dir = tempfile::tempdir().expect("Failed to create static fixture dir");
    let template_dir = tempfile::tempdir().expect("Failed to create template fixture dir");

    std::fs::write(template_dir.path().join("index.html"), TEST_TEMPLATE)
        .expect("Failed to write template fixture");

    spawn_app_with_dirs(static_dir, template_dir).await
}

/// Spawns the application against the given fixture directories and waits
/// until it answers on `/health`.
pub async fn spawn_app_with_dirs(static_dir: TempDir, template_dir: TempDir) -> TestApp {
    init_tracing_once();

    let config = ServerConfig {
        static_dir: static_dir.path().to_path_buf(),
        template_dir: template_dir.path().to_path_buf(),
        ..ServerConfig::default()
    };

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = clockface::app(&config);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    TestApp {
        address,
        static_dir,
        template_dir,
    }
}
