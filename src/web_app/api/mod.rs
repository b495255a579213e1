// web_app/api/mod.rs - Backend REST API seam
//
// The views never talk HTTP directly. They go through `MarketplaceApi`, which
// the browser build implements with gloo-net (see http.rs) and tests
// implement with in-memory fakes.
//
// Structure:
// - mod.rs: the trait plus URL / error-body helpers shared by all clients
// - http.rs: fetch-based client with an abort timeout

pub mod http;

pub use http::HttpApi;

use crate::web_app::error::ApiError;
use crate::web_app::model::{
    ErrorBody, LoginForm, LoginResponse, Product, RegisterRequest, RegisterResponse,
};

/// The three calls the views make against the backend
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single JS thread via `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait MarketplaceApi {
    /// `POST /api/login`
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError>;

    /// `POST /api/register`
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// `GET /api/products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
}

/// Builds a URL from the configured API base URL and the provided path
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Turns a non-2xx response body into `ApiError::Http`
///
/// Only a JSON body with a string `error` field carries a message; any other
/// body leaves the caller's fallback in charge.
pub fn http_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error);
    ApiError::Http { status, message }
}
