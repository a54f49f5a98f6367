use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};

/// Environment variable that overrides `api_base_url` (also read from `.env`)
pub const BASE_URL_ENV: &str = "POKEAPI_BASE_URL";

/// Application configuration loaded from pokedex-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// How many entries to request for the catalog
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Upper bound on parallel card requests for one page
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

fn default_api_base_url() -> String {
    pokeapi_client::PokeApiClient::DEFAULT_BASE_URL.to_string()
}

fn default_list_limit() -> usize {
    1000
}

fn default_page_size() -> usize {
    pokedex_pager::DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_concurrent_requests() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            list_limit: default_list_limit(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "pokedex-tui.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = Self::parse(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = Self::parse(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        if config.page_size == 0 {
            config.page_size = default_page_size();
        }
        if config.max_concurrent_requests == 0 {
            config.max_concurrent_requests = 1;
        }
        Ok(config)
    }

    /// Base URL with the environment override applied
    pub fn effective_base_url(&self) -> String {
        self.base_url_with_override(env::var(BASE_URL_ENV).ok())
    }

    fn base_url_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.list_limit, 1000);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::parse("page_size = 12\n").unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.list_limit, 1000);
        assert_eq!(config.max_concurrent_requests, 8);
    }

    #[test]
    fn test_zero_values_are_corrected() {
        let config = Config::parse("page_size = 0\nmax_concurrent_requests = 0\n").unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.max_concurrent_requests, 1);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::parse("page_size = \"twenty\"").is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::default();
        assert_eq!(
            config.base_url_with_override(Some("http://localhost:9000".into())),
            "http://localhost:9000"
        );
        assert_eq!(
            config.base_url_with_override(Some("   ".into())),
            config.api_base_url
        );
        assert_eq!(config.base_url_with_override(None), config.api_base_url);
    }
}
