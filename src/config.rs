// src/config.rs
use anyhow::{anyhow, Context};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::utils::validation::normalize_origin;

// moka refuses expirations longer than 1000 years
const MAX_PAGE_CACHE_TTL_SECS: u64 = 1000 * 365 * 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Origin used for server-rendered referral links; derived from the
    /// request when unset.
    pub public_origin: Option<String>,
    pub static_dir: PathBuf,
    pub enable_hsts: bool,
    /// Take the client id for rate limiting from `X-Forwarded-For` /
    /// `X-Real-IP`. Only safe behind a proxy that overwrites them.
    pub trust_proxy: bool,
    pub rate_limit_max: usize,
    pub rate_limit_window: Duration,
    pub page_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let public_origin = match lookup("PUBLIC_ORIGIN").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(
                normalize_origin(&raw)
                    .map_err(|e| anyhow!("{}", e))
                    .with_context(|| format!("Invalid PUBLIC_ORIGIN: {}", raw))?,
            ),
            None => None,
        };

        let rate_limit_max: usize = var("RATE_LIMIT_MAX", "300")
            .parse()
            .context("RATE_LIMIT_MAX must be a positive integer")?;
        if rate_limit_max == 0 {
            return Err(anyhow!("RATE_LIMIT_MAX must be greater than zero"));
        }

        let page_cache_ttl_secs: u64 = var("PAGE_CACHE_TTL_SECS", "300")
            .parse()
            .context("PAGE_CACHE_TTL_SECS must be a number of seconds")?;
        if page_cache_ttl_secs > MAX_PAGE_CACHE_TTL_SECS {
            return Err(anyhow!(
                "PAGE_CACHE_TTL_SECS must not exceed {} (1000 years)",
                MAX_PAGE_CACHE_TTL_SECS
            ));
        }

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "3000")
                .parse()
                .context("PORT must be a number between 0 and 65535")?,
            public_origin,
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            enable_hsts: var("ENABLE_HSTS", "false") == "true",
            trust_proxy: var("TRUST_PROXY", "false") == "true",
            rate_limit_max,
            rate_limit_window: Duration::from_secs(
                var("RATE_LIMIT_WINDOW_SECS", "60")
                    .parse()
                    .context("RATE_LIMIT_WINDOW_SECS must be a number of seconds")?,
            ),
            page_cache_ttl: Duration::from_secs(page_cache_ttl_secs),
        })
    }

    pub fn server_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.public_origin, None);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(!config.enable_hsts);
        assert!(!config.trust_proxy);
        assert_eq!(config.rate_limit_max, 300);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
        assert_eq!(config.page_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.server_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PUBLIC_ORIGIN", "https://rublemining.example/"),
            ("ENABLE_HSTS", "true"),
            ("TRUST_PROXY", "true"),
            ("RATE_LIMIT_MAX", "10"),
        ])
        .unwrap();
        assert_eq!(config.server_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.public_origin.as_deref(), Some("https://rublemining.example"));
        assert!(config.enable_hsts);
        assert!(config.trust_proxy);
        assert_eq!(config.rate_limit_max, 10);
    }

    #[test]
    fn test_blank_public_origin_is_unset() {
        let config = config_from(&[("PUBLIC_ORIGIN", "  ")]).unwrap();
        assert_eq!(config.public_origin, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("PORT", "http")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("PUBLIC_ORIGIN", "example.com/path")]).is_err());
        assert!(config_from(&[("RATE_LIMIT_MAX", "0")]).is_err());
        assert!(config_from(&[("PAGE_CACHE_TTL_SECS", "99999999999")]).is_err());
        assert!(config_from(&[("PAGE_CACHE_TTL_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_largest_cache_ttl_still_builds_state() {
        let max = MAX_PAGE_CACHE_TTL_SECS.to_string();
        let config = config_from(&[("PAGE_CACHE_TTL_SECS", max.as_str())]).unwrap();
        let _state = crate::AppState::new(config);
    }
}
