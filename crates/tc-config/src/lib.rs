//! # tc-config
//!
//! Layered configuration loading for ThreadCatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`THREADCATCH_*` prefix, `__` as separator)
//! 2. Project-level `.threadcatch/config.toml`
//! 3. User-level `~/.config/threadcatch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `THREADCATCH_API__BASE_URL` -> `api.base_url`,
//! `THREADCATCH_SESSION__ACCESS_TOKEN` -> `session.access_token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tc_config::ThreadCatchConfig;
//!
//! let config = ThreadCatchConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod review;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use review::{MAX_PAGE_SIZE, ReviewConfig};
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThreadCatchConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

impl ThreadCatchConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if any) before building the
    /// figment.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers can layer extra providers (e.g. CLI overrides) on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".threadcatch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("THREADCATCH_").split("__"))
    }

    /// Reject values no request could succeed with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.normalized_base_url().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.review.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "review.page_size".into(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("threadcatch").join("config.toml"))
    }
}
