// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments and their dispatch to [`HypixelClient`]

use std::path::PathBuf;

use api_client::{ApiResponse, NameResolver};
use clap::{Args, Parser, Subcommand};
use external_apis::{HypixelClient, HypixelError};
use shared_types::{GuildLookup, Target, TargetType};
use tracing::debug;

/// Query the Hypixel statistics API
#[derive(Debug, Parser)]
#[command(name = "hypixel", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file, replaces the default `hypixel.*` lookup
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API key, overrides the configuration file and `HYPIXEL_API_KEY`
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// API call to make
    #[command(subcommand)]
    pub command: Command,
}

/// API calls exposed on the command line
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Player profile and statistics
    Player(PlayerArgs),
    /// Current session of a player
    Session(PlayerArgs),
    /// Friend list of a player
    Friends(PlayerArgs),
    /// Guild by id
    Guild {
        /// Guild id
        id: String,
    },
    /// Find a guild id by name or by member
    FindGuild {
        /// How to interpret the identifier: name, member, memberName
        #[arg(long = "by", default_value_t = TargetType::Name)]
        by: TargetType,
        /// Guild name, member UUID or member name
        identifier: String,
    },
    /// Watchdog ban statistics
    Watchdog,
    /// Game leaderboards
    Leaderboards,
    /// Information about the configured API key
    Key,
    /// Active network boosters
    Boosters,
}

/// Arguments shared by the per-player commands
#[derive(Debug, Clone, Args)]
pub struct PlayerArgs {
    /// How to interpret the identifier: uuid or name
    #[arg(long = "by", default_value_t = TargetType::Uuid)]
    pub by: TargetType,
    /// Player UUID or name
    pub identifier: String,
}

impl PlayerArgs {
    /// The player target described by these arguments
    pub fn target(&self) -> Target {
        Target::from_type(self.by, self.identifier.clone())
    }
}

impl Command {
    /// Run the command against `client`
    pub async fn run<R: NameResolver>(
        &self,
        client: &HypixelClient<R>,
    ) -> Result<ApiResponse, HypixelError> {
        debug!(command = ?self, "dispatching command");

        match self {
            Self::Player(args) => client.get_player(&args.target()).await,
            Self::Session(args) => client.get_session(&args.target()).await,
            Self::Friends(args) => client.get_friends(&args.target()).await,
            Self::Guild { id } => client.get_guild(id).await,
            Self::FindGuild { by, identifier } => {
                client
                    .find_guild(&GuildLookup::from_type(*by, identifier.clone()))
                    .await
            }
            Self::Watchdog => client.get_watchdog_stats().await,
            Self::Leaderboards => client.get_leaderboards().await,
            Self::Key => client.get_key().await,
            Self::Boosters => client.get_boosters().await,
        }
    }
}
