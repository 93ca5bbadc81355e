#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::sync::Arc;

use amtrak_live_api::{
    content::{ContentSource, Unavailable, UNAVAILABLE_NOTICE},
    render::{PageRenderer, StaticPrefix, VariantKind},
    routes::create_router,
    AppState,
};
use amtrak_live_shared::CanonicalDomainSet;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

struct OneTrain;

impl ContentSource for OneTrain {
    fn index(&self) -> String {
        r#"<ul id="trains"><li><a href="/trains/42">42</a></li></ul>"#.to_string()
    }

    fn train(&self, train_number: &str) -> Option<String> {
        (train_number == "42").then(|| r#"<article id="train-42">Cardinal</article>"#.to_string())
    }

    fn trains_json(&self) -> Value {
        json!({ "42": [{ "routeName": "Cardinal", "trainNum": "42" }] })
    }

    fn train_json(&self, train_number: &str) -> Option<Value> {
        (train_number == "42").then(|| json!([{ "routeName": "Cardinal", "trainNum": "42" }]))
    }
}

fn app_with(content: Arc<dyn ContentSource>, variant: VariantKind, static_dir: &Path) -> Router {
    let domains = CanonicalDomainSet::new(vec![
        "amtrack.live".to_string(),
        "amtrak.live".to_string(),
        "trains.durbin.ee".to_string(),
    ]);
    let renderer = PageRenderer::new(Arc::new(domains), Arc::new(StaticPrefix::new("/static/")))
        .with_blocked_domain(Some("amtrak.live".to_string()));
    create_router(AppState::new(renderer, content, variant), static_dir)
}

fn app() -> Router {
    app_with(Arc::new(OneTrain), VariantKind::Standard, Path::new("static"))
}

async fn get(app: Router, host: Option<&str>, uri: &str) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(host) = host {
        request = request.header("host", host);
    }
    app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_is_rendered_for_host() {
    let response = get(app(), Some("amtrak.live"), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("vary").unwrap(), "Host");
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("<title>amtrak.live</title>"));
    assert!(html.contains(r#"<ul id="trains">"#));
    assert!(html.contains(
        r#"<a href="https://amtrack.live/">amtrack.live</a> or <a href="https://trains.durbin.ee/">trains.durbin.ee</a>"#
    ));
}

#[tokio::test]
async fn test_train_page() {
    let response = get(app(), Some("trains.durbin.ee"), "/trains/42").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"<article id="train-42">Cardinal</article>"#));
    assert!(html.contains(
        r#"<meta property="og:url" content="https://trains.durbin.ee/trains/42">"#
    ));
    assert!(html.contains(r#"<script src="/static/train.js" data-train="42" defer></script>"#));
    assert!(html.contains(
        r#"<a href="https://amtrack.live/">amtrack.live</a> or <a href="https://amtrak.live/">amtrak.live</a>"#
    ));
}

#[tokio::test]
async fn test_unknown_train_renders_not_found_page() {
    let response = get(app(), Some("amtrak.live"), "/trains/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains(r#"<section class="not-found">"#));
    assert!(html.contains("<title>amtrak.live</title>"));
    assert!(html.contains(r#"class="disclaimer""#));
}

#[tokio::test]
async fn test_unrouted_path_is_not_found_and_escaped() {
    let response = get(app(), Some("amtrak.live"), "/%3Cb%3E").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let html = body_text(response).await;
    assert!(html.contains("<code>/%3Cb%3E</code>"));
}

#[tokio::test]
async fn test_train_partial() {
    let response = get(app(), Some("amtrak.live"), "/trains/42/_partial").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_text(response).await,
        r#"<article id="train-42">Cardinal</article>"#
    );

    let response = get(app(), Some("amtrak.live"), "/trains/1/_partial").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_outage_variant_replaces_disclaimer() {
    let app = app_with(Arc::new(OneTrain), VariantKind::Outage, Path::new("static"));
    let html = body_text(get(app, Some("amtrack.live"), "/").await).await;

    assert!(html.contains(r#"class="outage-banner""#));
    assert!(!html.contains(r#"class="disclaimer""#));
    assert!(html.contains("amtrak.live is currently blocked on some networks."));
    assert!(html.contains(
        r#"<a href="https://amtrak.live/">amtrak.live</a> or <a href="https://trains.durbin.ee/">trains.durbin.ee</a>"#
    ));
}

#[tokio::test]
async fn test_hostile_host_header_is_escaped() {
    let html = body_text(get(app(), Some("<script>x</script>"), "/").await).await;
    assert!(!html.contains("<script>x</script>"));
    assert!(html.contains("&lt;script&gt;x&lt;"));
}

#[tokio::test]
async fn test_missing_host_lists_every_mirror() {
    let response = get(app(), None, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<title></title>"));
    assert!(html.contains(
        r#"<a href="https://amtrack.live/">amtrack.live</a>, <a href="https://amtrak.live/">amtrak.live</a> or <a href="https://trains.durbin.ee/">trains.durbin.ee</a>"#
    ));
}

#[tokio::test]
async fn test_concurrent_hosts_do_not_interfere() {
    let app = app();
    let (a, b) = tokio::join!(
        get(app.clone(), Some("amtrak.live"), "/"),
        get(app.clone(), Some("amtrack.live"), "/"),
    );
    let (a, b) = (body_text(a).await, body_text(b).await);

    assert!(a.contains("<title>amtrak.live</title>"));
    assert!(!a.contains(r#"<a href="https://amtrak.live/">"#));
    assert!(b.contains("<title>amtrack.live</title>"));
    assert!(!b.contains(r#"<a href="https://amtrack.live/">"#));

    let again = body_text(get(app, Some("amtrak.live"), "/").await).await;
    assert_eq!(a, again);
}

#[tokio::test]
async fn test_unavailable_content_source() {
    let app = app_with(Arc::new(Unavailable), VariantKind::Standard, Path::new("static"));
    let html = body_text(get(app.clone(), Some("amtrak.live"), "/").await).await;
    assert!(html.contains(UNAVAILABLE_NOTICE));

    let response = get(app, Some("amtrak.live"), "/trains/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trains_json() {
    let response = get(app(), Some("amtrak.live"), "/trains/json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["42"][0]["routeName"], "Cardinal");
}

#[tokio::test]
async fn test_train_json() {
    let response = get(app(), Some("amtrak.live"), "/trains/42/json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, json!([{ "routeName": "Cardinal", "trainNum": "42" }]));
}

#[tokio::test]
async fn test_unknown_train_json_is_not_found() {
    let response = get(app(), Some("amtrak.live"), "/trains/1/json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, json!({ "message": "Train not found" }));
}

#[tokio::test]
async fn test_unavailable_trains_json_is_empty() {
    let app = app_with(Arc::new(Unavailable), VariantKind::Standard, Path::new("static"));
    let response = get(app.clone(), Some("amtrak.live"), "/trains/json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "{}");

    let response = get(app, Some("amtrak.live"), "/trains/42/json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("opengraph.png"), b"png").unwrap();

    let app = app_with(Arc::new(OneTrain), VariantKind::Standard, dir.path());
    let response = get(app, Some("amtrak.live"), "/static/opengraph.png").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "png");
}

#[tokio::test]
async fn test_health() {
    let response = get(app(), Some("amtrak.live"), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["variant"], "standard");
    assert_eq!(
        json["mirrors"],
        json!(["amtrack.live", "amtrak.live", "trains.durbin.ee"])
    );

    let response = get(app(), None, "/health/live").await;
    assert_eq!(response.status(), StatusCode::OK);
}
