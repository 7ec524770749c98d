use serde::Deserialize;
use thiserror::Error;

// Optional page override: window.__NULL_BLOG_BANNER = { hidden_class: "..." }
pub const GLOBAL_KEY: &str = "__NULL_BLOG_BANNER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a single non-empty token, got {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    pub wrapper_id: String,
    pub close_button_id: String,
    pub close_icon_id: String,
    pub hidden_class: String,
    pub body_class: String,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            wrapper_id: "error-wrapper".into(),
            close_button_id: "error-close-btn".into(),
            close_icon_id: "error-close".into(),
            hidden_class: "hidden".into(),
            body_class: "error-body".into(),
        }
    }
}

impl BannerConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    // classList rejects empty tokens and tokens containing whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wrapper_id", &self.wrapper_id),
            ("close_button_id", &self.close_button_id),
            ("close_icon_id", &self.close_icon_id),
            ("hidden_class", &self.hidden_class),
            ("body_class", &self.body_class),
        ];
        for (field, value) in fields {
            if value.is_empty() || value.chars().any(|c| c.is_ascii_whitespace()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &GLOBAL_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

fn resolve(snapshot: Option<String>) -> BannerConfig {
    match snapshot {
        Some(raw) => BannerConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring invalid window.{GLOBAL_KEY}: {err}");
            BannerConfig::default()
        }),
        None => BannerConfig::default(),
    }
}

pub fn load() -> BannerConfig {
    resolve(snapshot_from_globals())
}
