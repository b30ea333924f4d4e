use std::{env, path::PathBuf, time::Duration};

use secrecy::SecretString;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origin: String,
    /// Absent keys are tolerated at startup; generation fails until one is set.
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub generation_timeout_seconds: u64,
    pub validation_message_ms: u64,
    pub storage_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            generation_timeout_seconds: env::var("GENERATION_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            validation_message_ms: env::var("VALIDATION_MESSAGE_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(3000),
            storage_path: env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/local_storage.json")),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_seconds)
    }

    pub fn validation_message_ttl(&self) -> Duration {
        Duration::from_millis(self.validation_message_ms)
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            allowed_origin: "http://localhost:5173".to_string(),
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            generation_timeout_seconds: 5,
            validation_message_ms: 50,
            storage_path: env::temp_dir().join("study-companion-test.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.web_server_host.is_empty());
        assert!(!config.gemini_model.is_empty());
        assert!(config.validation_message_ms > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert!(config.has_api_key());
        assert_eq!(config.validation_message_ttl(), Duration::from_millis(50));
        assert_eq!(config.generation_timeout(), Duration::from_secs(5));
    }
}
