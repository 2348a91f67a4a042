mod common;

use common::spawn_app;

#[tokio::test]
async fn static_asset_is_served_verbatim() {
    let app = spawn_app().await;

    let asset_bytes: &[u8] = b"html, body { margin: 0; }\n.clock { font-size: 6rem; }\n";
    std::fs::write(app.static_dir.path().join("style.css"), asset_bytes)
        .expect("Failed to write asset fixture");

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/static/style.css", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Response should carry a content type")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/css"));

    let body = response.bytes().await.expect("Failed to read body");
    assert_eq!(body.as_ref(), asset_bytes);
}

#[tokio::test]
async fn missing_static_asset_returns_404() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/static/nope.js", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
