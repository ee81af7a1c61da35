//! End-to-end access gate behavior over real HTTP.

use std::time::Duration;

use lead_intel_web::config::WebConfig;
use reqwest::header::COOKIE;
use reqwest::StatusCode;

mod common;

use common::{client, location, start_server};

const AUTH: &str = "auth-token=session-abc";

#[tokio::test]
async fn test_protected_page_redirects_to_login() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;

    let res = client().get(server.url("/dashboard")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), Some("/auth/login"));
}

#[tokio::test]
async fn test_login_page_is_public() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;

    let res = client().get(server.url("/auth/login")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await.unwrap();
    assert!(body.contains("Sign In"));
}

#[tokio::test]
async fn test_authenticated_visitors_skip_auth_pages() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;
    let client = client();

    for path in ["/auth/login", "/auth/register"] {
        let res = client
            .get(server.url(path))
            .header(COOKIE, AUTH)
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&res), Some("/dashboard"), "{path}");
    }
}

#[tokio::test]
async fn test_authenticated_dashboard_is_served() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;

    let res = client()
        .get(server.url("/dashboard"))
        .header(COOKIE, AUTH)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert!(res.text().await.unwrap().contains(r#"data-view="dashboard""#));
}

#[tokio::test]
async fn test_image_route_bypasses_gate() {
    let images = tempfile::tempdir().unwrap();
    std::fs::write(images.path().join("ai-brain.svg"), "<svg/>").unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;
    let client = client();

    let anonymous = client
        .get(server.url("/api/images/ai-brain"))
        .send()
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::OK);
    assert_eq!(anonymous.headers()["content-type"], "image/svg+xml");
    assert_eq!(anonymous.text().await.unwrap(), "<svg/>");

    let authenticated = client
        .get(server.url("/api/images/ai-brain"))
        .header(COOKIE, AUTH)
        .send()
        .await
        .unwrap();
    assert_eq!(authenticated.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_excluded_asset_paths_never_redirect() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;
    let client = client();

    for path in ["/api/images/missing", "/_next/static/app.js", "/favicon.ico"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert!(location(&res).is_none(), "{path} was redirected");
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_placeholder_route() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;
    let client = client();

    let res = client.get(server.url("/api/placeholder/64/32")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("64x32"));

    let res = client.get(server.url("/api/placeholder/0/32")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_cookie_is_unauthenticated() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;

    let res = client()
        .get(server.url("/search"))
        .header(COOKIE, "auth-token=")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&res), Some("/auth/login"));
}

#[tokio::test]
async fn test_custom_gate_config() {
    let images = tempfile::tempdir().unwrap();
    let mut config = WebConfig::default();
    config.gate.public_routes = vec!["/auth/login".into(), "/auth/register".into(), "/search".into()];
    config.gate.landing_path = "/searches/recent".into();
    config.gate.auth_cookie = "session".into();
    config.gate.redirect_status = 302;
    let server = start_server(config, images.path()).await;
    let client = client();

    let res = client.get(server.url("/search")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(server.url("/auth/login"))
        .header(COOKIE, "session=1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), Some("/searches/recent"));

    // The default cookie name no longer counts.
    let res = client
        .get(server.url("/dashboard"))
        .header(COOKIE, AUTH)
        .send()
        .await
        .unwrap();
    assert_eq!(location(&res), Some("/auth/login"));
}

#[tokio::test]
async fn test_hot_reload_changes_landing_page() {
    let images = tempfile::tempdir().unwrap();
    let server = start_server(WebConfig::default(), images.path()).await;
    let client = client();

    let mut config = WebConfig::default();
    config.gate.landing_path = "/search".into();
    server.config_tx.send(config).unwrap();

    let mut last = None;
    for _ in 0..50 {
        let res = client
            .get(server.url("/auth/login"))
            .header(COOKIE, AUTH)
            .send()
            .await
            .unwrap();
        last = location(&res).map(str::to_string);
        if last.as_deref() == Some("/search") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(last.as_deref(), Some("/search"));
}
