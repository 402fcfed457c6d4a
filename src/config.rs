use std::env;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        let anthropic_base_url = lookup("ANTHROPIC_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string());

        Self {
            port,
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url,
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").unwrap_or_default(),
            anthropic_base_url,
        }
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
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.anthropic_base_url, DEFAULT_ANTHROPIC_BASE_URL);
        assert!(config.openai_api_key.is_empty());
        assert!(config.anthropic_api_key.is_empty());
    }

    #[test]
    fn reads_overrides_and_ignores_bad_port() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("OPENAI_API_KEY", "sk-test"),
            ("ANTHROPIC_API_KEY", "ak-test"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9000/v1"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.anthropic_api_key, "ak-test");
        assert_eq!(config.openai_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.anthropic_base_url, DEFAULT_ANTHROPIC_BASE_URL);
    }
}
