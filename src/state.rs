use crate::api::ApiClient;
use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and cloned into every view; all clones talk to the
/// same backend through the same client.
#[derive(Debug, Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub config: Arc<Config>,
}

impl AppState {
    /// Assemble the state from an already-loaded configuration.
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::from_config(&config)?;

        Ok(AppState {
            api,
            config: Arc::new(config),
        })
    }

    /// Assemble the state from the process environment.
    ///
    /// Resolves the configuration, logs it, and constructs the shared
    /// client; this is the whole bootstrap a host shell needs.
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        config.log_startup();

        AppState::new(config)
    }
}
