// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Hypixel statistics API integration
//!
//! This module provides [`HypixelClient`], which exposes one method per Hypixel
//! endpoint. Every method performs a single authenticated GET request and
//! returns the parsed JSON body when the service flags it as successful.

use std::fmt;

use api_client::{ApiFailure, ApiResponse, NameResolver, ResolveError};
use reqwest::Client;
use serde_json::Value;
use shared_types::{Endpoint, GuildLookup, Target};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::{
    identifier::IdentifierResolver,
    mojang::{MojangClient, MojangConfig},
};

/// Default base URL of the Hypixel API
pub const DEFAULT_HYPIXEL_BASE_URL: &str = "https://api.hypixel.net";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("hypixel-api/", env!("CARGO_PKG_VERSION"));

/// Configuration for the Hypixel API client
#[derive(Clone)]
pub struct HypixelConfig {
    /// Base URL for the Hypixel API
    pub base_url: String,
    /// API key for authentication, sent as the `key` query parameter
    pub api_key: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl HypixelConfig {
    /// Create a configuration for the public API with the given key
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

impl Default for HypixelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HYPIXEL_BASE_URL.to_string(),
            api_key: String::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for HypixelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HypixelConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Errors returned by the Hypixel API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HypixelError {
    /// A player name could not be resolved to a UUID
    #[error("Name resolution failed: {0}")]
    Resolution(#[from] ResolveError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was parsed but reported `success: false`
    #[error("API error: {0}")]
    Api(#[from] ApiFailure),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HypixelError {
    /// Get the failure reported by the service, if the request got that far
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            HypixelError::Api(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Hypixel API client implementation
///
/// The client never mutates itself after construction, so a single instance
/// can serve concurrent calls from many tasks.
#[derive(Clone)]
pub struct HypixelClient<R = MojangClient> {
    client: Client,
    base_url: String,
    api_key: String,
    identifiers: IdentifierResolver<R>,
}

impl HypixelClient<MojangClient> {
    /// Create a new Hypixel API client that resolves names through Mojang
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created
    pub fn new(config: HypixelConfig) -> Result<Self, HypixelError> {
        let mojang = MojangClient::new(MojangConfig {
            user_agent: config.user_agent.clone(),
            ..Default::default()
        })
        .map_err(|e| HypixelError::Config(format!("Mojang client: {e}")))?;

        Self::with_resolver(config, mojang)
    }
}

impl<R: NameResolver> HypixelClient<R> {
    /// Create a new Hypixel API client with a custom name resolver
    ///
    /// The API key is not validated here; an invalid key is reported by the
    /// service on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created
    pub fn with_resolver(config: HypixelConfig, resolver: R) -> Result<Self, HypixelError> {
        let base_url = config.base_url.trim();
        let parsed = Url::parse(base_url)
            .map_err(|e| HypixelError::Config(format!("Invalid base URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(HypixelError::Config(format!(
                "Base URL cannot be used for requests: {parsed}"
            )));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(HypixelError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            identifiers: IdentifierResolver::new(resolver),
        })
    }

    /// Get the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the identifier resolver used for player targets
    pub fn identifier_resolver(&self) -> &IdentifierResolver<R> {
        &self.identifiers
    }

    /// Get a player's data
    ///
    /// # Errors
    ///
    /// Returns an error if the name cannot be resolved, the request fails, or
    /// the service reports the request as unsuccessful
    pub async fn get_player(&self, target: &Target) -> Result<ApiResponse, HypixelError> {
        self.get_for_player(Endpoint::Player, target).await
    }

    /// Get a player's current session
    ///
    /// # Errors
    ///
    /// Returns an error if the name cannot be resolved, the request fails, or
    /// the service reports the request as unsuccessful
    pub async fn get_session(&self, target: &Target) -> Result<ApiResponse, HypixelError> {
        self.get_for_player(Endpoint::Session, target).await
    }

    /// Get a player's friends
    ///
    /// # Errors
    ///
    /// Returns an error if the name cannot be resolved, the request fails, or
    /// the service reports the request as unsuccessful
    pub async fn get_friends(&self, target: &Target) -> Result<ApiResponse, HypixelError> {
        self.get_for_player(Endpoint::Friends, target).await
    }

    /// Get a guild's data by guild id
    ///
    /// Guild ids can be found with [`HypixelClient::find_guild`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports the
    /// request as unsuccessful
    pub async fn get_guild(&self, guild_id: &str) -> Result<ApiResponse, HypixelError> {
        self.get(Endpoint::Guild, &[("id", guild_id)]).await
    }

    /// Find a guild's id by guild name or by one of its members
    ///
    /// A guild name and a member UUID are sent verbatim; a member name is
    /// resolved to a UUID first.
    ///
    /// # Errors
    ///
    /// Returns an error if the member name cannot be resolved, the request
    /// fails, or the service reports the request as unsuccessful
    pub async fn find_guild(&self, lookup: &GuildLookup) -> Result<ApiResponse, HypixelError> {
        let value = match lookup.member() {
            Some(member) => self.identifiers.resolve(&member).await?,
            None => lookup.identifier().to_string(),
        };

        self.get(Endpoint::FindGuild, &[(lookup.query_param(), value.as_str())])
            .await
    }

    /// Get Watchdog statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports the
    /// request as unsuccessful
    pub async fn get_watchdog_stats(&self) -> Result<ApiResponse, HypixelError> {
        self.get(Endpoint::WatchdogStats, &[]).await
    }

    /// Get leaderboards
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports the
    /// request as unsuccessful
    pub async fn get_leaderboards(&self) -> Result<ApiResponse, HypixelError> {
        self.get(Endpoint::Leaderboards, &[]).await
    }

    /// Get information about the API key in use
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports the
    /// request as unsuccessful
    pub async fn get_key(&self) -> Result<ApiResponse, HypixelError> {
        self.get(Endpoint::Key, &[]).await
    }

    /// Get active network boosters
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service reports the
    /// request as unsuccessful
    pub async fn get_boosters(&self) -> Result<ApiResponse, HypixelError> {
        self.get(Endpoint::Boosters, &[]).await
    }

    async fn get_for_player(
        &self,
        endpoint: Endpoint,
        target: &Target,
    ) -> Result<ApiResponse, HypixelError> {
        let uuid = self.identifiers.resolve(target).await?;
        self.get(endpoint, &[("uuid", uuid.as_str())]).await
    }

    /// Send `GET {base}/{endpoint}?{params}&key={key}` and check the `success` flag
    async fn get(
        &self,
        endpoint: Endpoint,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, HypixelError> {
        debug_assert_eq!(
            endpoint.takes_target(),
            !params.is_empty(),
            "{endpoint} called with unexpected parameters"
        );

        let url = format!("{}/{}", self.base_url, endpoint.path());

        debug!(%url, ?params, "requesting Hypixel endpoint");

        let mut query = params.to_vec();
        query.push(("key", self.api_key.as_str()));

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| HypixelError::Http(e.without_url()))?;

        // The service reports failures in the body, so the status is only logged
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HypixelError::Http(e.without_url()))?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            warn!(
                "Hypixel API returned a non-JSON body for {} (status {}): {}",
                endpoint,
                status.as_u16(),
                e
            );
            e
        })?;

        ApiResponse::from_value(value).map_err(|failure| {
            warn!(
                "Hypixel API request to {} unsuccessful (status {}): {}",
                endpoint,
                status.as_u16(),
                failure
            );
            HypixelError::Api(failure)
        })
    }
}

impl<R: fmt::Debug> fmt::Debug for HypixelClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HypixelClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("identifiers", &self.identifiers)
            .finish_non_exhaustive()
    }
}
