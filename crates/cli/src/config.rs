// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command line configuration
//!
//! Settings are merged from several sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults (public Hypixel and Mojang endpoints)
//! 2. An optional `hypixel.{json,toml,yaml}` file in the working directory, or
//!    the file passed with `--config` (which must exist)
//! 3. Environment variables with the `HYPIXEL_` prefix, e.g. `HYPIXEL_API_KEY`
//! 4. The `--key` flag

use std::{fmt, path::Path};

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, Environment, File};
use external_apis::{
    DEFAULT_HYPIXEL_BASE_URL, DEFAULT_MOJANG_BASE_URL, DEFAULT_USER_AGENT, HypixelClient,
    HypixelConfig, MojangClient, MojangConfig,
};
use serde::Deserialize;

/// Prefix of the environment variables read by [`CliConfig::load`]
pub const ENV_PREFIX: &str = "HYPIXEL";

/// Name of the configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "hypixel";

/// Resolved command line configuration
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Hypixel API key, required before any request is sent
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the Hypixel API
    pub base_url: String,
    /// Base URL of the Mojang profile API used for name lookups
    pub mojang_url: String,
    /// User agent sent to both services
    pub user_agent: String,
}

impl CliConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the wrong type
    pub fn load(file: Option<&Path>, key: Option<String>) -> Result<Self, ConfigError> {
        Self::load_from(file, Environment::with_prefix(ENV_PREFIX), key)
    }

    /// Load configuration with an explicit environment source
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value has the wrong type
    pub fn load_from(
        file: Option<&Path>,
        env: Environment,
        key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Config::builder()
            .set_default("base_url", DEFAULT_HYPIXEL_BASE_URL)?
            .set_default("mojang_url", DEFAULT_MOJANG_BASE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(file)
            .add_source(env)
            .set_override_option("api_key", key)?
            .build()?
            .try_deserialize()
    }

    /// Hypixel client settings
    ///
    /// # Errors
    ///
    /// Returns an error if no API key was configured
    pub fn hypixel_config(&self) -> Result<HypixelConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!("no API key configured, set {ENV_PREFIX}_API_KEY or pass --key")
            })?;

        Ok(HypixelConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.to_string(),
            user_agent: self.user_agent.clone(),
        })
    }

    /// Mojang client settings
    pub fn mojang_config(&self) -> MojangConfig {
        MojangConfig {
            base_url: self.mojang_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }

    /// Build a Hypixel client that resolves names through the configured Mojang service
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or either base URL is invalid
    pub fn client(&self) -> Result<HypixelClient<MojangClient>> {
        ensure!(!self.user_agent.trim().is_empty(), "user agent cannot be empty");

        let mojang = MojangClient::new(self.mojang_config())?;
        Ok(HypixelClient::with_resolver(self.hypixel_config()?, mojang)?)
    }
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("mojang_url", &self.mojang_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
