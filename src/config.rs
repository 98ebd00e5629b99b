//! Build-time configuration for the API base URL with an optional runtime
//! override. The override is read from `window.PORTICO_CONFIG` when present
//! so a static deployment can repoint the API without rebuilding. Values
//! here are public; never store secrets in this config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Frontend configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL prepended to API paths. Empty means same-origin requests.
    pub api_base: String,
}

impl AppConfig {
    /// Load config from build-time environment, then apply any runtime
    /// override from the hosting page.
    #[must_use]
    pub fn load() -> Self {
        let api_base = option_env!("PORTICO_API_BASE").unwrap_or("");
        let mut config = Self {
            api_base: api_base.to_owned(),
        };
        if let Some(value) = runtime_api_base() {
            config.api_base = value;
        }
        config
    }
}

#[cfg(feature = "csr")]
fn runtime_api_base() -> Option<String> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PORTICO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);
    let value = Reflect::get(&object, &JsValue::from_str("api_base"))
        .ok()?
        .as_string()?;
    normalize(&value)
}

#[cfg(not(feature = "csr"))]
fn runtime_api_base() -> Option<String> {
    None
}

/// Trim and strip trailing slashes; blank values mean "no override".
#[cfg(any(test, feature = "csr"))]
fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
