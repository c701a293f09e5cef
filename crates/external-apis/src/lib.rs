// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Hypixel statistics API client
//!
//! This crate provides the HTTP side of the workspace: the Hypixel endpoint
//! client and the Mojang profile lookup it uses to turn player names into
//! UUIDs.
//!
//! # Architecture
//!
//! - **Endpoint Client**: [`hypixel::HypixelClient`] - one method per Hypixel endpoint
//! - **Name Lookup**: [`mojang::MojangClient`] - production `NameResolver`
//! - **Identifier Resolution**: [`identifier::IdentifierResolver`] - decides when a lookup is needed
//!
//! # Behavior
//!
//! - **One Request Per Call**: no retries, caching, or rate limiting
//! - **Body Driven Errors**: the `success` flag of the JSON body decides the outcome
//! - **Shareable**: clients hold no mutable state and can be used from many tasks
//!
//! ```rust,no_run
//! use external_apis::{HypixelClient, HypixelConfig};
//! use shared_types::Target;
//!
//! # async fn example() -> Result<(), external_apis::HypixelError> {
//! let client = HypixelClient::new(HypixelConfig::with_key("your-api-key"))?;
//! let player = client.get_player(&Target::name("Notch")).await?;
//! println!("{}", player.as_value());
//! # Ok(())
//! # }
//! ```

pub mod hypixel;
pub mod identifier;
pub mod mojang;

pub use hypixel::*;
pub use identifier::IdentifierResolver;
pub use mojang::*;
