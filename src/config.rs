use std::env;
use std::fmt;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY not found in environment")]
    MissingApiKey,

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig {
                port,
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            llm: LLMConfig {
                api_key,
                model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: lookup("GROQ_API_BASE").unwrap_or_else(|| GROQ_API_BASE.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk-test")])).unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.api_base, GROQ_API_BASE);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(err.to_string(), "GROQ_API_KEY not found in environment");

        // Blank keys count as missing
        let err = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_port_override_and_invalid_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);

        let err = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk-secret")])).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("gsk-secret"));
        assert!(rendered.contains("***"));
    }
}
