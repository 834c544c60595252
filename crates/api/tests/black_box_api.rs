use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::StatusCode;
use serde_json::json;
use tokio::sync::Notify;

use storefront_api::app::{build_app, build_app_with, AppServices};
use storefront_api::Config;
use storefront_assistant::Assistant;
use storefront_catalog::{seed, CatalogError, CatalogSource, Product, StaticCatalogSource};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(source: Arc<dyn CatalogSource>, typing_delay: Duration) -> Self {
        // Same router as prod, seeded RNG, ephemeral port.
        let assistant = Assistant::with_rng(source, StdRng::seed_from_u64(5));
        let app = build_app_with(AppServices::new(Arc::new(assistant), typing_delay)).await;
        Self::serve(app).await
    }

    async fn serve(app: Router) -> Self {
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

    async fn seeded() -> Self {
        Self::spawn(seed_source(), Duration::ZERO).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Source that, once armed, holds each fetch open until released.
#[derive(Default)]
struct GatedSource {
    armed: std::sync::atomic::AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        if self.armed.load(std::sync::atomic::Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        Ok(seed::products())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seed_source() -> Arc<StaticCatalogSource> {
    Arc::new(StaticCatalogSource::new(seed::products()))
}

async fn chat(client: &reqwest::Client, srv: &TestServer, message: &str) -> serde_json::Value {
    let res = client
        .post(srv.url("/chat"))
        .json(&json!({ "message": message }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::seeded().await;
    let res = reqwest::get(srv.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn products_lists_the_loaded_catalog() {
    let srv = TestServer::seeded().await;
    let res = reqwest::get(srv.url("/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["id"], "diary");
    assert_eq!(items[0]["name"], "Diary");
    assert_eq!(items[0]["price"], 35.0);
}

#[tokio::test]
async fn welcome_message_is_rendered() {
    let srv = TestServer::seeded().await;
    let body: serde_json::Value = reqwest::get(srv.url("/chat/welcome"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["reply"].as_str().unwrap().contains("How can I help you today?"));
    assert!(body["html"].as_str().unwrap().starts_with("Hi!"));
}

#[tokio::test]
async fn price_question_names_the_product() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let body = chat(&client, &srv, "How much is a diary?").await;
    assert_eq!(body["intent"], "price");
    assert_eq!(
        body["reply"],
        "**Diary** costs ₹35. High-quality diary for every occasion."
    );
    assert!(body["html"].as_str().unwrap().starts_with("<strong>Diary</strong> costs ₹35."));
    assert_eq!(body["products"][0]["id"], "diary");
}

#[tokio::test]
async fn product_listing_uses_line_breaks_in_html() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let body = chat(&client, &srv, "what do you sell").await;
    assert_eq!(body["intent"], "product_list");
    assert!(body["reply"].as_str().unwrap().contains("• Markers - ₹30"));
    assert!(body["html"].as_str().unwrap().contains("<br>• Diary - ₹35"));
}

#[tokio::test]
async fn off_topic_and_unknown_queries_still_get_a_reply() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let body = chat(&client, &srv, "what's the weather like").await;
    assert_eq!(body["intent"], "off_topic");

    let body = chat(&client, &srv, "zxqv").await;
    assert_eq!(body["intent"], "default");
    assert!(body["reply"].as_str().unwrap().contains("Popular picks:"));
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_message_is_treated_as_empty() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client.post(srv.url("/chat")).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["intent"], "empty");
    assert_eq!(body["reply"], "Type something to get started!");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/chat"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_request");
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn refresh_swaps_in_the_new_catalog() {
    let source = seed_source();
    let srv = TestServer::spawn(source.clone(), Duration::ZERO).await;
    let client = reqwest::Client::new();

    source.set_products(vec![Product::new("stapler", "Stapler", 120.0)]);
    let res = client.post(srv.url("/chat/refresh")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "outcome": "replaced", "count": 1 }));

    let body = chat(&client, &srv, "price of stapler").await;
    assert_eq!(body["reply"], "**Stapler** costs ₹120.");
}

#[tokio::test]
async fn failed_refresh_keeps_serving_previous_catalog() {
    let source = seed_source();
    let srv = TestServer::spawn(source.clone(), Duration::ZERO).await;
    let client = reqwest::Client::new();

    source.set_failure(Some("product service down".to_string()));
    let res = client.post(srv.url("/chat/refresh")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["outcome"], "retained");
    assert_eq!(body["count"], 8);

    let body = chat(&client, &srv, "is the duster available").await;
    assert_eq!(body["intent"], "availability");
    assert!(body["reply"].as_str().unwrap().contains("Duster"));
}

#[tokio::test]
async fn overlapping_refresh_is_a_conflict() {
    let source = Arc::new(GatedSource::default());
    let srv = TestServer::spawn(source.clone(), Duration::ZERO).await;
    let client = reqwest::Client::new();

    source.armed.store(true, std::sync::atomic::Ordering::SeqCst);
    let first = tokio::spawn({
        let client = client.clone();
        let url = srv.url("/chat/refresh");
        async move { client.post(url).send().await.unwrap() }
    });
    source.entered.notified().await;

    let res = client.post(srv.url("/chat/refresh")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "outcome": "in_flight" }));

    source.release.notify_one();
    let res = first.await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn silent_catalog_service_does_not_hold_startup() {
    // Accepts connections and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let silent = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });

    let config = Config {
        catalog_url: Some(format!("http://{addr}")),
        catalog_timeout: Duration::from_millis(100),
        typing_delay: Duration::ZERO,
        ..Config::default()
    };
    let app = tokio::time::timeout(Duration::from_secs(5), build_app(&config))
        .await
        .expect("startup should not wait on a silent catalog service")
        .unwrap();
    let srv = TestServer::serve(app).await;
    let client = reqwest::Client::new();

    let body = chat(&client, &srv, "what products do you have").await;
    assert_eq!(body["reply"], "Loading products... Try again in a moment!");

    silent.abort();
}

#[tokio::test]
async fn catalog_unavailable_at_startup_gives_loading_replies() {
    let source = Arc::new(StaticCatalogSource::default());
    source.set_failure(Some("offline".to_string()));
    let srv = TestServer::spawn(source, Duration::ZERO).await;
    let client = reqwest::Client::new();

    let body = chat(&client, &srv, "what products do you have").await;
    assert_eq!(body["reply"], "Loading products... Try again in a moment!");
}

#[tokio::test]
async fn chat_reply_waits_for_typing_delay() {
    let srv = TestServer::spawn(seed_source(), Duration::from_millis(150)).await;
    let client = reqwest::Client::new();

    let started = Instant::now();
    let body = chat(&client, &srv, "hello").await;
    assert!(started.elapsed() >= Duration::from_millis(150));
    assert_eq!(body["intent"], "greeting");
}
