use chrono_tz::Tz;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_ATTENDANCE_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_AUTH_API_BASE_URL: &str = "http://localhost:3000";

/// Which backend a client talks to. Each one has its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Attendance,
    Auth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub attendance_api_base_url: Option<String>,
    #[serde(default)]
    pub auth_api_base_url: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown time zone `{0}`")]
    UnknownTimeZone(String),
}

impl RuntimeConfig {
    /// Fills every unset field from `fallback`; values already present win.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            attendance_api_base_url: non_empty(self.attendance_api_base_url)
                .or_else(|| non_empty(fallback.attendance_api_base_url)),
            auth_api_base_url: non_empty(self.auth_api_base_url)
                .or_else(|| non_empty(fallback.auth_api_base_url)),
            time_zone: non_empty(self.time_zone).or_else(|| non_empty(fallback.time_zone)),
        }
    }

    pub fn base_url(&self, backend: Backend) -> String {
        let (configured, default) = match backend {
            Backend::Attendance => (
                self.attendance_api_base_url.as_deref(),
                DEFAULT_ATTENDANCE_API_BASE_URL,
            ),
            Backend::Auth => (self.auth_api_base_url.as_deref(), DEFAULT_AUTH_API_BASE_URL),
        };
        configured
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn display_time_zone(&self) -> Result<Option<Tz>, ConfigError> {
        match self.time_zone.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| ConfigError::UnknownTimeZone(name.to_string())),
        }
    }

    fn compiled() -> RuntimeConfig {
        RuntimeConfig {
            attendance_api_base_url: option_env!("WFH_ATTENDANCE_API_BASE_URL").map(String::from),
            auth_api_base_url: option_env!("WFH_AUTH_API_BASE_URL").map(String::from),
            time_zone: option_env!("WFH_TIME_ZONE").map(String::from),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, Context};
    use wasm_bindgen::JsValue;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// Reads the optional `window.__WFH_ENV` object written by `env.js`.
    pub fn from_env_js() -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &"__WFH_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            attendance_api_base_url: read_key(
                &obj,
                &["ATTENDANCE_API_BASE_URL", "attendance_api_base_url"],
            ),
            auth_api_base_url: read_key(&obj, &["AUTH_API_BASE_URL", "auth_api_base_url"]),
            time_zone: read_key(&obj, &["TIME_ZONE", "time_zone"]),
        })
    }

    pub async fn fetch_config_json() -> anyhow::Result<RuntimeConfig> {
        let resp = reqwest::get("./config.json")
            .await
            .context("config.json request failed")?;
        if !resp.status().is_success() {
            return Err(anyhow!("config.json returned {}", resp.status()));
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("config.json is not valid")
    }
}

async fn load_runtime_config() -> RuntimeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let from_globals = browser::from_env_js().unwrap_or_default();
        let from_file = match browser::fetch_config_json().await {
            Ok(cfg) => cfg,
            Err(err) => {
                log::debug!("No runtime config file: {:#}", err);
                RuntimeConfig::default()
            }
        };
        from_globals.or(from_file).or(RuntimeConfig::compiled())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RuntimeConfig::compiled()
    }
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = load_runtime_config().await;
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_base_url(backend: Backend) -> String {
    await_runtime_config().await.base_url(backend)
}

/// Display zone for timestamps; `None` means the browser's local zone.
pub fn display_time_zone() -> Option<Tz> {
    let cfg = RUNTIME_CONFIG.get()?;
    match cfg.display_time_zone() {
        Ok(tz) => tz,
        Err(err) => {
            warn!("{}; falling back to local time", err);
            None
        }
    }
}

pub async fn init() {
    let cfg = await_runtime_config().await;
    info!(
        "Runtime config: attendance={} auth={} time_zone={}",
        cfg.base_url(Backend::Attendance),
        cfg.base_url(Backend::Auth),
        cfg.time_zone.as_deref().unwrap_or("local")
    );
}
