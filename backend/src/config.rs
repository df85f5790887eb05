//! Process configuration, read from the environment and an optional
//! `.env` file.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::prompt::DEFAULT_LANGUAGE;
use crate::genai::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub cors_origin: String,
    pub log_format: LogFormat,
    /// `None` when no API key is set; the advisor then answers 503
    pub gemini: Option<GeminiConfig>,
    pub advisor_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let raw_addr = get_or("EXPENSE_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let listen_addr: SocketAddr = raw_addr.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                key: "EXPENSE_LISTEN_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            }
        })?;

        let log_format = match get("EXPENSE_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "EXPENSE_LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected text or json".to_string(),
                })
            }
        };

        let gemini = get("GEMINI_API_KEY").map(|api_key| GeminiConfig {
            api_key,
            model: get_or("GEMINI_MODEL", DEFAULT_MODEL),
            base_url: get_or("GEMINI_BASE_URL", DEFAULT_BASE_URL),
        });

        Ok(Self {
            listen_addr,
            data_dir: PathBuf::from(get_or("EXPENSE_DATA_DIR", DEFAULT_DATA_DIR)),
            cors_origin: get_or("EXPENSE_CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            log_format,
            gemini,
            advisor_language: get_or("ADVISOR_LANGUAGE", DEFAULT_LANGUAGE),
        })
    }
}
