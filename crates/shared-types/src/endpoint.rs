// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Hypixel API endpoint identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Endpoints exposed by the Hypixel statistics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// Player profile data, queried by `uuid`
    #[serde(rename = "player")]
    Player,
    /// Current session of a player, queried by `uuid`
    #[serde(rename = "session")]
    Session,
    /// Friend list of a player, queried by `uuid`
    #[serde(rename = "friends")]
    Friends,
    /// Guild data, queried by guild `id`
    #[serde(rename = "guild")]
    Guild,
    /// Guild id lookup, queried by `byName` or `byUuid`
    #[serde(rename = "findGuild")]
    FindGuild,
    /// Watchdog anti-cheat statistics
    #[serde(rename = "watchdogstats")]
    WatchdogStats,
    /// Network leaderboards
    #[serde(rename = "leaderboards")]
    Leaderboards,
    /// Information about the API key in use
    #[serde(rename = "key")]
    Key,
    /// Active network boosters
    #[serde(rename = "boosters")]
    Boosters,
}

impl Endpoint {
    /// Returns the URL path segment of the endpoint, relative to the API base
    pub const fn path(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Session => "session",
            Self::Friends => "friends",
            Self::Guild => "guild",
            Self::FindGuild => "findGuild",
            Self::WatchdogStats => "watchdogstats",
            Self::Leaderboards => "leaderboards",
            Self::Key => "key",
            Self::Boosters => "boosters",
        }
    }

    /// Returns whether requests to this endpoint identify a player or guild
    ///
    /// Endpoints without a target only carry the API key in their query string.
    pub const fn takes_target(self) -> bool {
        matches!(
            self,
            Self::Player | Self::Session | Self::Friends | Self::Guild | Self::FindGuild
        )
    }

    /// Returns all endpoints
    pub const fn all() -> &'static [Self] {
        &[
            Self::Player,
            Self::Session,
            Self::Friends,
            Self::Guild,
            Self::FindGuild,
            Self::WatchdogStats,
            Self::Leaderboards,
            Self::Key,
            Self::Boosters,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
