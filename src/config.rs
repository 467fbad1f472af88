//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub coach: CoachConfig,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8092".to_string(),
                "http://127.0.0.1:8092".to_string(),
            ],
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Coach chat model configuration
///
/// Points at any OpenAI-compatible chat completions endpoint.
/// The API key is only read from the OPENAI_API_KEY environment
/// variable; when absent, the rule-based fallback answers all chat.
#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    #[serde(default = "default_coach_url")]
    pub base_url: String,

    #[serde(default = "default_coach_model")]
    pub model: String,

    #[serde(default = "default_coach_temperature")]
    pub temperature: f64,

    #[serde(default = "default_coach_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_coach_timeout")]
    pub request_timeout_ms: u64,

    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_coach_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_coach_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_coach_temperature() -> f64 {
    0.7
}

fn default_coach_max_tokens() -> u32 {
    500
}

fn default_coach_timeout() -> u64 {
    30_000
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            base_url: default_coach_url(),
            model: default_coach_model(),
            temperature: default_coach_temperature(),
            max_tokens: default_coach_max_tokens(),
            request_timeout_ms: default_coach_timeout(),
            api_key: None,
        }
    }
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_url")]
    pub base_url: String,

    #[serde(default = "default_speech_language")]
    pub language: String,

    #[serde(default = "default_speech_timeout")]
    pub request_timeout_ms: u64,
}

fn default_speech_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_speech_language() -> String {
    "en".to_string()
}

fn default_speech_timeout() -> u64 {
    10_000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_speech_url(),
            language: default_speech_language(),
            request_timeout_ms: default_speech_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.coach.api_key = read_api_key();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("regimen").join("config.toml")),
            Some(PathBuf::from("/etc/regimen/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("REGIMEN_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("REGIMEN_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Coach overrides
        if let Ok(url) = std::env::var("REGIMEN_COACH_URL") {
            self.coach.base_url = url;
        }
        if let Ok(model) = std::env::var("REGIMEN_COACH_MODEL") {
            self.coach.model = model;
        }
        if let Some(key) = read_api_key() {
            self.coach.api_key = Some(key);
        }

        // Speech overrides
        if let Ok(url) = std::env::var("REGIMEN_SPEECH_URL") {
            self.speech.base_url = url;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("REGIMEN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("REGIMEN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn read_api_key() -> Option<String> {
    std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            coach: CoachConfig::default(),
            speech: SpeechConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Regimen Configuration
#
# Environment variables override these settings:
# - REGIMEN_API_HOST
# - REGIMEN_API_PORT
# - REGIMEN_COACH_URL
# - REGIMEN_COACH_MODEL
# - REGIMEN_SPEECH_URL
# - REGIMEN_LOG_LEVEL
# - REGIMEN_LOG_FORMAT
# - OPENAI_API_KEY (never stored in this file)

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins
cors_origins = ["http://localhost:8092", "http://127.0.0.1:8092"]

# Request timeout in seconds
request_timeout_secs = 30

[coach]
# OpenAI-compatible chat completions endpoint
base_url = "https://api.openai.com"

# Chat model name
model = "gpt-3.5-turbo"

# Sampling temperature
temperature = 0.7

# Reply length cap
max_tokens = 500

# Request timeout in milliseconds
request_timeout_ms = 30000

[speech]
# Speech synthesis endpoint
base_url = "https://translate.google.com"

# Speech language
language = "en"

# Per-chunk request timeout in milliseconds
request_timeout_ms = 10000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/regimen/regimen.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.coach.model, "gpt-3.5-turbo");
        assert_eq!(config.coach.max_tokens, 500);
        assert_eq!(config.speech.language, "en");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
port = 9000

[coach]
model = "local-llama"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.coach.model, "local-llama");
        // Unset sections keep their defaults
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.speech.base_url, "https://translate.google.com");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not valid toml [[[").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_generated_config_parses() {
        let content = generate_default_config();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.api.port, default_port());
        assert_eq!(config.coach.model, default_coach_model());
    }
}
