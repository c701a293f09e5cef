// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared types for the Hypixel API client
//!
//! This crate provides the request-side vocabulary that is shared across the
//! workspace: which endpoint is being called and how a player or guild is
//! identified, avoiding circular dependencies between the client crates.

pub mod endpoint;
pub mod target;

pub use endpoint::Endpoint;
pub use target::{GuildLookup, Target, TargetParseError, TargetType};
