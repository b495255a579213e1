// server/proxy.rs - Forwards /api/* to the REST backend
//
// The browser only ever talks to this origin. Each request under /api is
// replayed against BACKEND_URL with the same method, query and body plus the
// headers the backend needs for auth; status, body and cookies are relayed
// back unchanged. An unreachable backend yields 502 with an empty body.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use reqwest::Client;

use super::config::ServerConfig;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Request headers copied onto the backend call
pub const FORWARDED_REQUEST_HEADERS: &[&str] = &["accept", "authorization", "content-type", "cookie"];

/// Backend response headers copied onto the reply
pub const RELAYED_RESPONSE_HEADERS: &[&str] = &["content-type", "set-cookie", "cache-control"];

/// HTTP client shared by all workers
pub fn build_client(config: &ServerConfig) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(config.proxy_timeout)
        .build()
}

/// Backend URL for `/api/{tail}?{query}`
pub fn upstream_url(backend_url: &str, tail: &str, query: &str) -> String {
    let mut url = format!(
        "{}/api/{}",
        backend_url.trim_end_matches('/'),
        tail.trim_start_matches('/')
    );
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// Actix handler mounted at `/api/{tail:.*}`
pub async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    client: web::Data<Client>,
    config: web::Data<ServerConfig>,
) -> HttpResponse {
    let tail = req.match_info().get("tail").unwrap_or_default();
    let url = upstream_url(&config.backend_url, tail, req.query_string());

    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return HttpResponse::MethodNotAllowed().finish(),
    };

    tracing::debug!(%method, %url, "proxying api request");

    let mut upstream = client.request(method, &url);
    for name in FORWARDED_REQUEST_HEADERS {
        for value in req.headers().get_all(*name) {
            if let Ok(value) = value.to_str() {
                upstream = upstream.header(*name, value);
            }
        }
    }

    match upstream.body(body.to_vec()).send().await {
        Ok(response) => relay(response, &url).await,
        Err(err) => {
            tracing::error!(%url, error = %err, "backend request failed");
            HttpResponse::BadGateway().finish()
        }
    }
}

async fn relay(response: reqwest::Response, url: &str) -> HttpResponse {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut reply = HttpResponse::build(status);

    for name in RELAYED_RESPONSE_HEADERS {
        for value in response.headers().get_all(*name) {
            if let Ok(value) = value.to_str() {
                reply.append_header((*name, value.to_string()));
            }
        }
    }

    match response.bytes().await {
        Ok(bytes) => {
            tracing::debug!(%url, status = status.as_u16(), "backend replied");
            reply.body(bytes.to_vec())
        }
        Err(err) => {
            tracing::error!(%url, error = %err, "failed to read backend response");
            HttpResponse::BadGateway().finish()
        }
    }
}
