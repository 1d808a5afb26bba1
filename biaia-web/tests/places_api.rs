//! Router-level tests for the places proxy and shell-rendered pages.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use biaia_core::PlacesConfig;
use biaia_places::PlacesProxy;
use biaia_places::providers::MockPlacesProvider;
use biaia_web::{AppState, ApplicationShell, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

fn app_with(config: &PlacesConfig, provider: Arc<MockPlacesProvider>) -> Router {
    let places = PlacesProxy::new(config, provider);
    build_router(
        AppState::new(places, ApplicationShell::standard()),
        &static_dir(),
    )
}

fn credentialed_app(provider: Arc<MockPlacesProvider>) -> Router {
    app_with(&PlacesConfig::with_api_key("fsq3-router-key"), provider)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_missing_credential_answers_500_without_upstream_call() {
    let provider = Arc::new(MockPlacesProvider::new());
    let app = app_with(&PlacesConfig::default(), provider.clone());

    let (status, body) = get_json(app, "/api/foursquare?ll=40.7,-74.0&categories=13065").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "Missing Foursquare API key (Check .env file and server restart)" })
    );
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_missing_parameters_answer_400_without_upstream_call() {
    for uri in [
        "/api/foursquare",
        "/api/foursquare?ll=40.7,-74.0",
        "/api/foursquare?categories=13065",
        "/api/foursquare?ll=&categories=13065",
    ] {
        let provider = Arc::new(MockPlacesProvider::new());
        let (status, body) = get_json(credentialed_app(provider.clone()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            body,
            json!({ "message": "Missing required parameters: 'll' or 'categories'" })
        );
        assert_eq!(provider.call_count(), 0, "{uri}");
    }
}

#[tokio::test]
async fn test_success_passes_upstream_body_through() {
    let provider = Arc::new(MockPlacesProvider::new());

    let (status, body) = get_json(
        credentialed_app(provider.clone()),
        "/api/foursquare?ll=40.7,-74.0&categories=13065",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": [] }));

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].credential, "fsq3-router-key");
    assert_eq!(calls[0].query.location, "40.7,-74.0");
    assert_eq!(calls[0].query.categories, "13065");
    assert_eq!(calls[0].query.radius, "5000");
    assert_eq!(calls[0].query.limit, "10");
}

#[tokio::test]
async fn test_explicit_radius_and_limit_forwarded() {
    let provider = Arc::new(MockPlacesProvider::new());

    let (status, _) = get_json(
        credentialed_app(provider.clone()),
        "/api/foursquare?ll=40.7,-74.0&categories=13065,13032&radius=250&limit=3",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let query = &provider.calls()[0].query;
    assert_eq!(query.categories, "13065,13032");
    assert_eq!(query.radius, "250");
    assert_eq!(query.limit, "3");
}

#[tokio::test]
async fn test_repeated_keys_use_first_value() {
    let provider = Arc::new(MockPlacesProvider::new());

    let (status, body) = get_json(
        credentialed_app(provider.clone()),
        "/api/foursquare?ll=1,2&ll=3,4&categories=13065&categories=13032",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": [] }));

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query.location, "1,2");
    assert_eq!(calls[0].query.categories, "13065");
}

#[tokio::test]
async fn test_stray_query_fragments_still_answer_json() {
    let provider = Arc::new(MockPlacesProvider::new());

    let (status, body) = get_json(
        credentialed_app(provider.clone()),
        "/api/foursquare?ll=40.7,-74.0&&=13065&categories",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Missing required parameters: 'll' or 'categories'" })
    );
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_quota_exhaustion_answers_403_with_upstream_body() {
    let provider = Arc::new(MockPlacesProvider::with_json(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "message": "no API credits remaining" }),
    ));

    let (status, body) = get_json(
        credentialed_app(provider),
        "/api/foursquare?ll=40.7,-74.0&categories=13065",
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "no API credits remaining" }));
}

#[tokio::test]
async fn test_upstream_error_status_forwarded() {
    let provider = Arc::new(MockPlacesProvider::with_json(
        StatusCode::BAD_REQUEST,
        json!({ "message": "Invalid ll parameter" }),
    ));

    let (status, body) = get_json(
        credentialed_app(provider),
        "/api/foursquare?ll=north&categories=13065",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid ll parameter" }));
}

#[tokio::test]
async fn test_unparseable_upstream_body_replaced() {
    let provider = Arc::new(MockPlacesProvider::with_reply(
        StatusCode::SERVICE_UNAVAILABLE,
        "upstream maintenance",
    ));

    let (status, body) = get_json(
        credentialed_app(provider),
        "/api/foursquare?ll=40.7,-74.0&categories=13065",
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({ "message": "Could not parse JSON response from Foursquare" })
    );
}

#[tokio::test]
async fn test_transport_failure_answers_500() {
    let provider = Arc::new(MockPlacesProvider::failing("connection refused"));

    let (status, body) = get_json(
        credentialed_app(provider.clone()),
        "/api/foursquare?ll=40.7,-74.0&categories=13065",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "Foursquare request failed: connection refused" })
    );
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_home_page_rendered_through_shell() {
    let app = credentialed_app(Arc::new(MockPlacesProvider::new()));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains("<title>BIAIA - Pregnancy Support Platform</title>"));
    assert!(html.contains(r#"class="light""#));
    assert!(html.contains(r#"data-scope="session" data-session-state="anonymous""#));
    assert!(html.contains(r#"data-places-endpoint="/api/foursquare""#));
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = credentialed_app(Arc::new(MockPlacesProvider::new()));

    let (status, css) = get(app.clone(), "/static/globals.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(css).unwrap().contains(".font-inter"));

    let request = Request::builder()
        .uri("/favicon.png")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
}

#[tokio::test]
async fn test_unknown_route_answers_json_404() {
    let app = credentialed_app(Arc::new(MockPlacesProvider::new()));

    let (status, body) = get_json(app, "/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No route for /api/unknown" }));
}
