use anyhow::{Context, Result};
use std::env;

/// Environment variable that selects the backend base URL.
pub const API_URL_VAR: &str = "API_URL";

/// Base URL used when `API_URL` is not set (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Client configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Resolve the configuration from the process environment.
    ///
    /// `API_URL` selects the backend base URL; unset or empty falls back to
    /// [`DEFAULT_API_URL`]. The value must be an absolute URL. Trailing
    /// slashes are trimmed so that composing with endpoint paths (which all
    /// begin with `/`) never produces a double slash.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::with_base_url(&base_url)
    }

    /// Build a configuration from an explicit base URL, applying the same
    /// normalization as [`Config::from_env`].
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();

        reqwest::Url::parse(&base_url)
            .with_context(|| format!("{API_URL_VAR} must be an absolute URL, got '{base_url}'"))?;

        Ok(Config { base_url })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Backend base URL: {}", self.base_url);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    // from_env reads the process environment, so tests that touch API_URL
    // serialize on a lock to keep them deterministic under the parallel
    // test runner.
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_default_when_unset() {
        let _guard = lock_env();
        unsafe {
            env::remove_var(API_URL_VAR);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_env_var_overrides_default() {
        let _guard = lock_env();
        unsafe {
            env::set_var(API_URL_VAR, "https://example.test/api");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://example.test/api");

        unsafe {
            env::remove_var(API_URL_VAR);
        }
    }

    #[test]
    fn test_empty_env_var_falls_back_to_default() {
        let _guard = lock_env();
        unsafe {
            env::set_var(API_URL_VAR, "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);

        unsafe {
            env::remove_var(API_URL_VAR);
        }
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let _guard = lock_env();
        unsafe {
            env::set_var(API_URL_VAR, "https://example.test/api/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "https://example.test/api");

        unsafe {
            env::remove_var(API_URL_VAR);
        }
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let result = Config::with_base_url("not a url");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains(API_URL_VAR));
    }

    #[test]
    fn test_with_base_url_trims_repeated_slashes() {
        let config = Config::with_base_url("http://localhost:5000/api///").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_default_impl_matches_local_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_env_base_url_flows_into_download_urls() {
        let _guard = lock_env();
        unsafe {
            env::set_var(API_URL_VAR, "https://example.test/api");
        }

        let state = AppState::from_env().unwrap();
        assert_eq!(
            state.api.csv_download_url("q.csv"),
            "https://example.test/api/reports/csv/q.csv"
        );
        assert_eq!(
            state.api.image_url("a.png"),
            "https://example.test/api/reports/images/a.png"
        );

        unsafe {
            env::remove_var(API_URL_VAR);
        }
    }
}
