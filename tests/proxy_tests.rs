// tests/proxy_tests.rs - /api forwarding and server configuration (ssr only)

use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use actix_web::{web, App};
use pentest_lab_web::server::config::{DEFAULT_BACKEND_URL, DEFAULT_PROXY_TIMEOUT_SECS};
use pentest_lab_web::server::proxy::{self, upstream_url, FORWARDED_REQUEST_HEADERS};
use pentest_lab_web::server::{ServerConfig, ServerConfigError};

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_upstream_url_keeps_tail_and_query() {
    assert_eq!(
        upstream_url("http://127.0.0.1:5000", "login", ""),
        "http://127.0.0.1:5000/api/login"
    );
    assert_eq!(
        upstream_url("http://backend:5000/", "products", "category=Electronics&page=2"),
        "http://backend:5000/api/products?category=Electronics&page=2"
    );
    assert_eq!(
        upstream_url("http://backend:5000", "/products/7/reviews", ""),
        "http://backend:5000/api/products/7/reviews"
    );
}

#[test]
fn test_auth_headers_are_forwarded() {
    for header in ["authorization", "cookie", "content-type"] {
        assert!(FORWARDED_REQUEST_HEADERS.contains(&header), "{}", header);
    }
}

#[test]
fn test_server_config_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_server_config_overrides() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", " https://api.pentest.lab/ "),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.backend_url, "https://api.pentest.lab");
    assert_eq!(config.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn test_server_config_blank_values_use_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "   "), ("PROXY_TIMEOUT_SECS", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_server_config_rejects_bad_values() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "backend:5000")])),
        Err(ServerConfigError::InvalidBackendUrl("backend:5000".to_string()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])),
        Err(ServerConfigError::InvalidTimeout("0".to_string()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "soon")])),
        Err(ServerConfigError::InvalidTimeout("soon".to_string()))
    );
}

#[actix_web::test]
async fn test_unreachable_backend_yields_bad_gateway() {
    // Nothing listens on the discard port
    let config = ServerConfig {
        backend_url: "http://127.0.0.1:9".to_string(),
        proxy_timeout: Duration::from_secs(2),
    };
    let client = proxy::build_client(&config).unwrap();

    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(client))
            .route("/api/{tail:.*}", web::to(proxy::forward)),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"username":"neo","password":"x","remember":false}"#)
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
