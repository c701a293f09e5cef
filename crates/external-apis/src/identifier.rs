// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Identifier resolution for player targets

use api_client::{NameResolver, ResolveError};
use shared_types::Target;
use tracing::{debug, warn};

/// Turns a [`Target`] into the UUID the Hypixel API expects
///
/// UUID targets are returned unchanged without touching the network. Name
/// targets go through the wrapped [`NameResolver`] exactly once; a failed
/// lookup is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct IdentifierResolver<R> {
    resolver: R,
}

impl<R: NameResolver> IdentifierResolver<R> {
    /// Create a resolver backed by the given name lookup
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Get the underlying name lookup
    pub fn name_resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolve a target to a UUID
    ///
    /// # Errors
    ///
    /// Returns the [`ResolveError`] of the name lookup when a name cannot be resolved
    pub async fn resolve(&self, target: &Target) -> Result<String, ResolveError> {
        match target {
            Target::Uuid(uuid) => Ok(uuid.clone()),
            Target::Name(name) => {
                debug!(%name, "resolving player name");
                let uuid = self.resolver.resolve_name(name).await.map_err(|e| {
                    warn!("Failed to resolve player name {}: {}", name, e);
                    e
                })?;
                debug!(%name, %uuid, "resolved player name");
                Ok(uuid)
            }
        }
    }
}
