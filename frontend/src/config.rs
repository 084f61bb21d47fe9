use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &JsValue::from_str(global)).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&any, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
    })
}

// window.__TALENTRACK_ENV = { API_BASE_URL: "..." } (env.js)
fn get_from_env_js() -> Option<String> {
    read_global_key("__TALENTRACK_ENV", &["API_BASE_URL", "api_base_url"])
}

// window.__TALENTRACK_CONFIG = { api_base_url: "..." }
fn get_from_window_config() -> Option<String> {
    read_global_key("__TALENTRACK_CONFIG", &["api_base_url", "API_BASE_URL"])
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js()
        .or_else(get_from_window_config)
        .and_then(|url| normalize_base_url(&url))
}

/// Trims whitespace and trailing slashes; blank values count as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    if API_BASE_URL.set(value.clone()).is_err() {
        log::debug!("api base url already cached; keeping first value");
    }
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn write_window_config(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("api_base_url"),
        &JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__TALENTRACK_CONFIG"), &obj);
}

fn config_json_url() -> Option<reqwest::Url> {
    let href = web_sys::window()?.location().href().ok()?;
    reqwest::Url::parse(&href).ok()?.join("config.json").ok()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json answered {}", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once per page load.
///
/// Lookup order: `window.__TALENTRACK_ENV`, `window.__TALENTRACK_CONFIG`,
/// `./config.json`, then [`DEFAULT_API_BASE_URL`].
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize_base_url(&url))
    {
        write_window_config(&url);
        return cache_base_url(&url);
    }
    log::warn!("no runtime config found; using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("api base url: {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_base_urls() {
        assert_eq!(
            normalize_base_url(" http://127.0.0.1:8000/api/ ").as_deref(),
            Some("http://127.0.0.1:8000/api")
        );
        assert_eq!(normalize_base_url("   "), None);
        assert_eq!(normalize_base_url("/"), None);
    }

    #[test]
    fn runtime_config_accepts_both_key_spellings() {
        let lower: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://hr.example.com/api"}"#).unwrap();
        assert_eq!(lower.api_base_url.as_deref(), Some("https://hr.example.com/api"));

        let upper: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"https://hr.example.com/api"}"#).unwrap();
        assert_eq!(upper.api_base_url.as_deref(), Some("https://hr.example.com/api"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
