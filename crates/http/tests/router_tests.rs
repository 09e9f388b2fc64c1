use std::sync::Arc;

use linkbio_core::{FallbackPolicy, ProfileConfig, ViewsConfig};
use linkbio_http::{AppState, ViewsResponse, create_router};
use linkbio_service::{ImageProxy, PresenceClient, ViewCounterService};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApp {
    base: String,
    client: reqwest::Client,
    _dir: TempDir,
}

impl TestApp {
    async fn views(&self, method: reqwest::Method) -> u64 {
        let response = self
            .client
            .request(method, format!("{}/api/views", self.base))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json::<ViewsResponse>().await.unwrap().views
    }
}

async fn spawn_app(views: ViewsConfig, presence_url: &str, dir: TempDir) -> TestApp {
    let profile = ProfileConfig { discord_id: "42".to_owned(), ..ProfileConfig::default() };
    let state = AppState {
        views: Arc::new(ViewCounterService::from_config(&views).unwrap()),
        image_proxy: ImageProxy::new().unwrap(),
        presence: PresenceClient::new(presence_url).unwrap(),
        profile,
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(Arc::new(state))).await.unwrap();
    });

    TestApp { base: format!("http://{addr}"), client: reqwest::Client::new(), _dir: dir }
}

async fn file_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewsConfig::file(dir.path().join("views.json"));
    spawn_app(config, "http://127.0.0.1:1", dir).await
}

#[tokio::test]
async fn views_fresh_deployment_scenario() {
    let app = file_app().await;

    assert_eq!(app.views(reqwest::Method::GET).await, 0);
    assert_eq!(app.views(reqwest::Method::POST).await, 1);
    assert_eq!(app.views(reqwest::Method::POST).await, 2);
    assert_eq!(app.views(reqwest::Method::GET).await, 2);
}

#[tokio::test]
async fn views_body_is_plain_json_object() {
    let app = file_app().await;
    let body: serde_json::Value =
        app.client.post(format!("{}/api/views", app.base)).send().await.unwrap().json().await.unwrap();
    assert_eq!(body, serde_json::json!({"views": 1}));
}

#[tokio::test]
async fn views_survive_unwritable_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = ViewsConfig::file(dir.path().join("missing-dir").join("views.json"));
    let app = spawn_app(config, "http://127.0.0.1:1", dir).await;

    assert_eq!(app.views(reqwest::Method::POST).await, 1);
    assert_eq!(app.views(reqwest::Method::POST).await, 2);
    assert_eq!(app.views(reqwest::Method::GET).await, 2);
}

#[tokio::test]
async fn views_remote_unreachable_degrade_to_constants() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        ViewsConfig::remote("http://127.0.0.1:1", "42").with_fallback(FallbackPolicy::Constant);
    let app = spawn_app(config, "http://127.0.0.1:1", dir).await;

    assert_eq!(app.views(reqwest::Method::POST).await, 1);
    assert_eq!(app.views(reqwest::Method::POST).await, 1);
    assert_eq!(app.views(reqwest::Method::GET).await, 0);
}

#[tokio::test]
async fn image_proxy_without_url_is_bad_request() {
    let app = file_app().await;
    for query in ["", "?url="] {
        let response =
            app.client.get(format!("{}/api/image-proxy{query}", app.base)).send().await.unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(response.text().await.unwrap(), "Missing URL");
    }
}

#[tokio::test]
async fn image_proxy_streams_upstream_image() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cover.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/jpeg")
                .set_body_bytes(vec![0xff, 0xd8, 0xff]),
        )
        .mount(&upstream)
        .await;
    let app = file_app().await;

    let response = app
        .client
        .get(format!("{}/api/image-proxy", app.base))
        .query(&[("url", format!("{}/cover.jpg", upstream.uri()))])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/jpeg");
    assert_eq!(response.headers()["cache-control"], "public, max-age=31536000, immutable");
    assert_eq!(response.bytes().await.unwrap().as_ref(), [0xff, 0xd8, 0xff]);
}

#[tokio::test]
async fn image_proxy_passes_through_upstream_status() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&upstream).await;
    let app = file_app().await;

    let response = app
        .client
        .get(format!("{}/api/image-proxy", app.base))
        .query(&[("url", upstream.uri())])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "Failed to fetch image: 404");
}

#[tokio::test]
async fn image_proxy_unexpected_error_is_500() {
    let app = file_app().await;

    let response = app
        .client
        .get(format!("{}/api/image-proxy", app.base))
        .query(&[("url", "http://127.0.0.1:1/nothing.png")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.unwrap(), "Internal Server Error");
}

#[tokio::test]
async fn profile_includes_theme_rgb_and_icons() {
    let app = file_app().await;
    let body: serde_json::Value = app
        .client
        .get(format!("{}/api/profile", app.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["discord_id"], "42");
    assert_eq!(body["theme_rgb"], "111, 0, 255");
    assert_eq!(body["socials"][0]["icon"], "github");
    assert_eq!(body["background"]["type"], "video");
    assert_eq!(body["audio"]["url"], "/asset/audio.mp3");
    assert_eq!(body["custom_badges"], serde_json::json!([]));
}

#[tokio::test]
async fn presence_is_proxied_and_unwrapped() {
    let presence = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"username": "neko", "status": "dnd"}
        })))
        .mount(&presence)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config = ViewsConfig::file(dir.path().join("views.json"));
    let app = spawn_app(config, &format!("{}/api", presence.uri()), dir).await;

    let body: serde_json::Value = app
        .client
        .get(format!("{}/api/presence", app.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({"username": "neko", "status": "dnd"}));
}

#[tokio::test]
async fn presence_upstream_failure_is_bad_gateway() {
    let app = file_app().await;
    let response = app.client.get(format!("{}/api/presence", app.base)).send().await.unwrap();
    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_version_and_page() {
    let app = file_app().await;

    let health = app.client.get(format!("{}/health", app.base)).send().await.unwrap();
    assert_eq!(health.text().await.unwrap(), "ok");

    let version: serde_json::Value = app
        .client
        .get(format!("{}/api/version", app.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));

    let page = app.client.get(format!("{}/", app.base)).send().await.unwrap();
    assert_eq!(page.headers()["content-type"], "text/html; charset=utf-8");
    assert_eq!(page.headers().get_all("content-type").iter().count(), 1);
    let html = page.text().await.unwrap();
    assert!(html.contains("profile.custom_badges"));
    assert!(html.contains("new Audio(profile.audio.url)"));
    assert!(html.contains("/api/views"));
}
