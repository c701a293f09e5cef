// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Mojang profile API integration
//!
//! This module provides the production [`NameResolver`]: it looks up a
//! Minecraft player by name through the Mojang profile API and returns the
//! player's UUID.

use api_client::{NameResolver, ResolveError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::hypixel::DEFAULT_USER_AGENT;

/// Default base URL of the Mojang profile API
pub const DEFAULT_MOJANG_BASE_URL: &str = "https://api.mojang.com";

/// Configuration for the Mojang API client
#[derive(Debug, Clone)]
pub struct MojangConfig {
    /// Base URL for the Mojang API
    pub base_url: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for MojangConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MOJANG_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Mojang API client implementation
#[derive(Debug, Clone)]
pub struct MojangClient {
    client: Client,
    base_url: Url,
}

/// Errors specific to the Mojang API client
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum MojangError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Name cannot be looked up
    #[error("Invalid player name: {0:?}")]
    InvalidName(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<MojangError> for ResolveError {
    fn from(value: MojangError) -> Self {
        match value {
            MojangError::Http(error) => ResolveError::Http {
                message: error.to_string(),
            },
            MojangError::Json(error) => ResolveError::InvalidResponse {
                message: error.to_string(),
            },
            MojangError::ApiError { status, message } => ResolveError::Service { status, message },
            MojangError::InvalidName(name) => ResolveError::InvalidName { name },
            MojangError::Config(message) => ResolveError::Config { message },
        }
    }
}

/// Player profile returned by the Mojang profile lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MojangProfile {
    /// Player UUID, without dashes
    pub id: String,
    /// Player name with its canonical capitalization
    pub name: String,
}

impl MojangClient {
    /// Create a new Mojang API client
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created
    pub fn new(config: MojangConfig) -> Result<Self, MojangError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| MojangError::Config(format!("Invalid base URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(MojangError::Config(format!(
                "Base URL cannot be used for requests: {base_url}"
            )));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(MojangError::Http)?;

        Ok(Self { client, base_url })
    }

    /// Look up a player profile by name
    ///
    /// # Returns
    ///
    /// * `Ok(Some(profile))` if a player with this name exists
    /// * `Ok(None)` if no player has this name
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed
    pub async fn lookup_profile(&self, name: &str) -> Result<Option<MojangProfile>, MojangError> {
        if name.trim().is_empty() {
            return Err(MojangError::InvalidName(name.to_string()));
        }

        let url = self.profile_url(name)?;

        debug!(%url, name, "looking up player profile on Mojang");

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                let profile: MojangProfile = serde_json::from_str(&body)?;
                Ok(Some(profile))
            }
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => {
                debug!("No Mojang profile found for name: {}", name);
                Ok(None)
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                warn!("Mojang API error: {} - {}", status.as_u16(), error_text);
                Err(MojangError::ApiError {
                    status: status.as_u16(),
                    message: error_text,
                })
            }
        }
    }

    /// Build `{base}/users/profiles/minecraft/{name}` with the name as one encoded segment
    fn profile_url(&self, name: &str) -> Result<Url, MojangError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                MojangError::Config(format!(
                    "Base URL cannot be used for requests: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["users", "profiles", "minecraft", name]);
        Ok(url)
    }
}

impl NameResolver for MojangClient {
    async fn resolve_name(&self, name: &str) -> Result<String, ResolveError> {
        match self.lookup_profile(name).await? {
            Some(profile) => Ok(profile.id),
            None => Err(ResolveError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}
