use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use ruralmarket_api::app::{AppSettings, build_app};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(generation_delay: Duration) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app(AppSettings { generation_delay });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn instant() -> Self {
        Self::spawn(Duration::ZERO).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn price_value(price: &str) -> u32 {
    price
        .strip_prefix("RM ")
        .and_then(|p| p.strip_suffix(".00"))
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(|| panic!("malformed price: {price}"))
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::instant().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn generates_listing_from_form_fields() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/listings", srv.base_url))
        .json(&json!({
            "productName": "Tomatoes",
            "productDetails": "premium organic handmade large",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["title"],
        "Fresh Handcrafted Premium Tomatoes - Locally Sourced"
    );
    assert!(
        body["description"]
            .as_str()
            .unwrap()
            .starts_with("Discover our tomatoes - ")
    );
    let hashtags = body["hashtags"].as_array().unwrap();
    assert_eq!(hashtags.len(), 8);
    assert!((80..=89).contains(&price_value(body["price"].as_str().unwrap())));
    assert!(body.get("uploadedImage").is_none());
}

#[tokio::test]
async fn uploaded_image_is_echoed_back() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();
    let image = "data:image/png;base64,iVBORw0KGgo=";

    let res = client
        .post(format!("{}/listings", srv.base_url))
        .json(&json!({ "productName": "Pua Kumbu", "uploadedImage": image }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["uploadedImage"], image);
    assert_eq!(body["title"], "Quality Pua Kumbu - Locally Sourced");
}

#[tokio::test]
async fn blank_name_is_rejected_with_message() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/listings", srv.base_url))
        .json(&json!({ "productName": "   ", "productDetails": "organic" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Please enter a product name");
}

#[tokio::test]
async fn export_renders_the_listing_that_was_shown() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();

    for _ in 0..10 {
        let shown: serde_json::Value = client
            .post(format!("{}/listings", srv.base_url))
            .json(&json!({ "productName": "Beras Bario", "productDetails": "5 kg bag" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let res = client
            .post(format!("{}/listings/export", srv.base_url))
            .json(&shown)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()["content-disposition"],
            "attachment; filename=\"product-listing.txt\""
        );
        assert!(
            res.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let text = res.text().await.unwrap();
        let sections: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(sections[0], "Quality Beras Bario - Locally Sourced");
        assert_eq!(
            sections[sections.len() - 2],
            "#handmade #localproduct #ruralmarket #supportlocal"
        );
        assert_eq!(
            sections[sections.len() - 1],
            format!("Price: {}", shown["price"].as_str().unwrap())
        );
        assert!(text.contains(shown["description"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn export_does_not_wait_for_generation_delay() {
    let srv = TestServer::spawn(Duration::from_secs(30)).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/listings/export", srv.base_url))
        .json(&json!({
            "title": "Quality Kopi - Locally Sourced",
            "description": "Roasted weekly.",
            "hashtags": ["#handmade", "#localproduct"],
            "price": "RM 31.00",
        }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "Quality Kopi - Locally Sourced\n\nRoasted weekly.\n\n#handmade #localproduct\n\nPrice: RM 31.00"
    );
}

#[tokio::test]
async fn missing_name_field_is_a_validation_error() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/listings", srv.base_url))
        .json(&json!({ "productDetails": "organic" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Please enter a product name");
}

#[tokio::test]
async fn malformed_body_gets_json_error_shape() {
    let srv = TestServer::instant().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/listings/export", srv.base_url))
        .header("content-type", "application/json")
        .body(r#"{"title": 42}"#)
        .send()
        .await
        .unwrap();

    assert!(res.status().is_client_error());
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn progress_schedule_matches_configured_delay() {
    let srv = TestServer::spawn(Duration::from_millis(2000)).await;

    let body: serde_json::Value = reqwest::get(format!("{}/listings/progress", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["intervalMs"], 400);
    assert_eq!(body["totalMs"], 2000);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[5]["label"], "Almost done!");
    assert_eq!(steps[2]["label"], "Creating description...");
}

#[tokio::test]
async fn configured_delay_holds_the_response() {
    let srv = TestServer::spawn(Duration::from_millis(150)).await;
    let client = reqwest::Client::new();
    let started = std::time::Instant::now();

    let res = client
        .post(format!("{}/listings", srv.base_url))
        .json(&json!({ "productName": "Madu Kelulut" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(150));
}
