// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared abstractions for the Hypixel API client
//!
//! This crate provides the pieces of the client that do not depend on a
//! particular HTTP backend.
//!
//! # Core Abstractions
//!
//! - **`NameResolver` Trait**: capability that turns a player name into a UUID
//! - **Error Handling**: `ResolveError` for failed lookups, `ApiFailure` for
//!   responses the service reports as unsuccessful
//! - **Data Types**: `ApiResponse`, the verbatim JSON body of a successful call

use std::sync::Arc;

use thiserror::Error;

pub mod types;

pub use types::*;

/// Capability that resolves a player name to the player's UUID
///
/// The Hypixel API only accepts UUIDs, so every name supplied by a caller goes
/// through an implementation of this trait before a request is built.
/// Implementations perform exactly one lookup per call and never retry.
pub trait NameResolver: Send + Sync {
    /// Resolve `name` to a UUID
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if no player has this name, or another
    /// variant if the lookup itself failed
    fn resolve_name(&self, name: &str)
    -> impl Future<Output = Result<String, ResolveError>> + Send;
}

impl<R: NameResolver> NameResolver for &R {
    fn resolve_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).resolve_name(name)
    }
}

impl<R: NameResolver> NameResolver for Arc<R> {
    fn resolve_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<String, ResolveError>> + Send {
        (**self).resolve_name(name)
    }
}

/// Errors that can occur while resolving a player name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ResolveError {
    /// No player exists with this name
    #[error("no player named {name}")]
    NotFound { name: String },

    /// The name cannot be looked up at all
    #[error("invalid player name: {name:?}")]
    InvalidName { name: String },

    /// HTTP request failed
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    /// Lookup service answered with an unexpected status
    #[error("name lookup service error: {status} - {message}")]
    Service { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },

    /// The lookup service is misconfigured
    #[error("name lookup configuration error: {message}")]
    Config { message: String },
}

impl ResolveError {
    /// Check if this error means the player does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
