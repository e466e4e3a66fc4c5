use std::str::FromStr;

use log::Level;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_LOG_LEVEL: Level = Level::Info;
/// Local storage key holding the serialized [Identity][clinic_common::Identity]
pub const IDENTITY_STORAGE_KEY: &str = "clinic_identity";

/// Settings baked into the bundle at build time. Trunk forwards `CLINIC_API_URL` and
/// `CLINIC_LOG_LEVEL` from the build environment.
#[derive(Debug, Clone, Copy)]
pub struct ClientConfig {
    pub api_url: &'static str,
    pub log_level: Level,
    pub storage_key: &'static str,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self {
            api_url: api_url(option_env!("CLINIC_API_URL")),
            log_level: log_level(option_env!("CLINIC_LOG_LEVEL")),
            storage_key: IDENTITY_STORAGE_KEY,
        }
    }
}

fn api_url(value: Option<&'static str>) -> &'static str {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
        _ => DEFAULT_API_URL,
    }
}

fn log_level(value: Option<&str>) -> Level {
    value
        .and_then(|level| Level::from_str(level.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
