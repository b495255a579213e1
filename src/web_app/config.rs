// web_app/config.rs - Client configuration
//
// Values come from build-time environment variables and can be overridden at
// runtime through a `window.PENTEST_LAB_CONFIG` object, so a static deployment
// can point at another API without rebuilding. Nothing in here is secret.

use std::time::Duration;

use crate::web_app::paths;

/// Default abort timeout for every browser request
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Pause between the registration success message and the jump to login
pub const DEFAULT_REGISTER_REDIRECT_MS: u32 = 1_500;

/// Frontend configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base_url: String,
    /// Route a successful login lands on when no `redirect` is given
    pub landing_route: String,
    /// Route a successful registration forwards to
    pub login_route: String,
    pub register_redirect_ms: u32,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            landing_route: paths::LANDING.to_string(),
            login_route: paths::LOGIN.to_string(),
            register_redirect_ms: DEFAULT_REGISTER_REDIRECT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(base) = option_env!("PENTEST_LAB_API_BASE_URL").and_then(normalize_runtime_value) {
            config.api_base_url = base;
        }
        if let Some(ms) = option_env!("PENTEST_LAB_REQUEST_TIMEOUT_MS").and_then(parse_millis) {
            config.request_timeout_ms = ms;
        }

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    pub fn register_redirect_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.register_redirect_ms))
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
}

#[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PENTEST_LAB_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_millis),
    })
}

#[cfg(not(all(target_arch = "wasm32", feature = "hydrate")))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(all(target_arch = "wasm32", feature = "hydrate"))]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_millis(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}
