//! Server configuration
//!
//! Defaults first, then `AGROSAKHI_*` environment variables. The conventional
//! `OPENAI_API_KEY` is honoured when `AGROSAKHI_OPENAI_API_KEY` is unset.

use agrosakhi_core::EntityId;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "AGROSAKHI";

#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Env: `AGROSAKHI_BIND_ADDRESS`
    pub bind_address: String,
    /// User whose devices and tasks the dashboard shows.
    /// Env: `AGROSAKHI_DEMO_USER_ID`
    pub demo_user_id: EntityId,
    /// Built dashboard client to serve at `/`.
    /// Env: `AGROSAKHI_STATIC_DIR`
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    /// Env: `AGROSAKHI_OPENAI_API_KEY` or `OPENAI_API_KEY`
    #[serde(default)]
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub ai_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            demo_user_id: 1,
            static_dir: None,
            openai_api_key: None,
            openai_model: "gpt-4o".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            ai_timeout_secs: 20,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Environment::with_prefix(ENV_PREFIX),
            std::env::var("OPENAI_API_KEY").ok(),
        )
    }

    pub fn load_from(
        env: Environment,
        fallback_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("demo_user_id", i64::from(defaults.demo_user_id))?
            .set_default("openai_model", defaults.openai_model)?
            .set_default("openai_base_url", defaults.openai_base_url)?
            .set_default("ai_timeout_secs", defaults.ai_timeout_secs)?;
        if let Some(key) = fallback_api_key.filter(|k| !k.is_empty()) {
            builder = builder.set_default("openai_api_key", key)?;
        }

        let mut config: Self = builder.add_source(env).build()?.try_deserialize()?;
        config.openai_api_key = config.openai_api_key.filter(|k| !k.trim().is_empty());
        Ok(config)
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_address", &self.bind_address)
            .field("demo_user_id", &self.demo_user_id)
            .field("static_dir", &self.static_dir)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("ai_timeout_secs", &self.ai_timeout_secs)
            .finish()
    }
}
