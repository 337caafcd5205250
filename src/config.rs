use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
pub const DEFAULT_BIND: &str = "127.0.0.1:3001";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Backend location plus the relay's own listening settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub ollama_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub bind: String,
    pub allowed_origin: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            bind: DEFAULT_BIND.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl RelayConfig {
    /// Reads `OLLAMA_URL`, `OLLAMA_MODEL`, `OLLAMA_TIMEOUT_SECONDS`,
    /// `DOCSMITH_BIND` and `DOCSMITH_ALLOWED_ORIGIN`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            ollama_url: lookup("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            model: lookup("OLLAMA_MODEL").unwrap_or(defaults.model),
            timeout_seconds: lookup("OLLAMA_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
            bind: lookup("DOCSMITH_BIND").unwrap_or(defaults.bind),
            allowed_origin: lookup("DOCSMITH_ALLOWED_ORIGIN").unwrap_or(defaults.allowed_origin),
        }
    }

    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.ollama_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_point_at_local_ollama() {
        let config = RelayConfig::default();
        assert_eq!(config.generate_url(), "http://localhost:11434/api/generate");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn lookup_overrides_and_ignores_bad_timeout() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("OLLAMA_URL", "http://gpu-box:11434/"),
            ("OLLAMA_MODEL", "mistral"),
            ("OLLAMA_TIMEOUT_SECONDS", "soon"),
            ("DOCSMITH_ALLOWED_ORIGIN", "http://localhost:3000"),
        ]);
        let config = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.generate_url(), "http://gpu-box:11434/api/generate");
        assert_eq!(config.model, "mistral");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.bind, DEFAULT_BIND);
    }

    #[test]
    fn rejects_malformed_bind() {
        let config = RelayConfig {
            bind: "localhost".into(),
            ..RelayConfig::default()
        };
        assert!(matches!(
            config.bind_addr(),
            Err(ConfigError::InvalidBindAddress(_))
        ));
    }
}
