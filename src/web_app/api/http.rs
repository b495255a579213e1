// web_app/api/http.rs - Browser HTTP client for the backend API
//
// Requests go out through the Fetch API (gloo-net) and are aborted by an
// AbortController once the configured timeout elapses.
// Outside the browser the client has no transport and every call fails
// with `ApiError::Config`; the views only issue requests after hydration.

use crate::web_app::api::MarketplaceApi;
use crate::web_app::config::AppConfig;
use crate::web_app::error::ApiError;
use crate::web_app::model::{LoginForm, LoginResponse, Product, RegisterRequest, RegisterResponse};
use crate::web_app::paths;

/// Fetch-backed `MarketplaceApi`
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
    timeout_ms: u32,
}

impl HttpApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn url(&self, path: &str) -> String {
        super::build_url(&self.base_url, path)
    }
}

impl MarketplaceApi for HttpApi {
    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        transport::post_json(&self.url(paths::api::LOGIN), form, self.timeout_ms).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        transport::post_json(&self.url(paths::api::REGISTER), request, self.timeout_ms).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        transport::get_json(&self.url(paths::api::PRODUCTS), self.timeout_ms).await
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use serde::{de::DeserializeOwned, Serialize};
    use web_sys::{AbortController, AbortSignal, RequestCredentials};

    use crate::web_app::error::ApiError;

    pub async fn get_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, ApiError> {
        let response = send_with_timeout(timeout_ms, |signal| {
            Request::get(url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        url: &str,
        body: &B,
        timeout_ms: u32,
    ) -> Result<T, ApiError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;
        let response = send_with_timeout(timeout_ms, move |signal| {
            Request::post(url)
                .header("Content-Type", "application/json")
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .body(payload)
                .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        handle_json_response(response).await
    }

    /// Sends a request and aborts it once `timeout_ms` elapses
    async fn send_with_timeout(
        timeout_ms: u32,
        build_request: impl FnOnce(&AbortSignal) -> Result<Request, ApiError>,
    ) -> Result<Response, ApiError> {
        let controller = AbortController::new()
            .map_err(|_| ApiError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        // Dropping the handle cancels the timer once the response is in
        let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    fn map_request_error(err: gloo_net::Error) -> ApiError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            ApiError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            ApiError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(crate::web_app::api::http_error(status, &body))
        }
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use serde::{de::DeserializeOwned, Serialize};

    use crate::web_app::error::ApiError;

    fn unavailable() -> ApiError {
        ApiError::Config("HTTP transport is only available in the browser".to_string())
    }

    pub async fn get_json<T: DeserializeOwned>(url: &str, _timeout_ms: u32) -> Result<T, ApiError> {
        tracing::warn!(url, "HTTP request attempted outside the browser");
        Err(unavailable())
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        url: &str,
        _body: &B,
        _timeout_ms: u32,
    ) -> Result<T, ApiError> {
        tracing::warn!(url, "HTTP request attempted outside the browser");
        Err(unavailable())
    }
}
