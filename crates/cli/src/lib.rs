// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Hypixel command line client
//!
//! Thin wrapper around [`external_apis::HypixelClient`] that maps each API call
//! to a subcommand and prints the raw JSON response.
//!
//! # Module Structure
//!
//! - [`config`]: Layered configuration from defaults, file, environment and flags
//! - [`commands`]: Argument parsing and dispatch to the client

pub mod commands;
pub mod config;

use ::config::Environment;
use anyhow::Result;
use api_client::ApiResponse;

pub use commands::{Cli, Command, PlayerArgs};
pub use config::CliConfig;

/// Run a parsed command line and return the successful response
///
/// # Errors
///
/// Returns an error if configuration is invalid or the API call fails
pub async fn run(cli: &Cli) -> Result<ApiResponse> {
    run_with_env(cli, Environment::with_prefix(crate::config::ENV_PREFIX)).await
}

/// Run a parsed command line, reading `HYPIXEL_*` settings from `env`
///
/// # Errors
///
/// Returns an error if configuration is invalid or the API call fails
pub async fn run_with_env(cli: &Cli, env: Environment) -> Result<ApiResponse> {
    let config = CliConfig::load_from(cli.config.as_deref(), env, cli.key.clone())?;
    let client = config.client()?;

    Ok(cli.command.run(&client).await?)
}

/// Render a response the way the binary prints it
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized
pub fn render(response: &ApiResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response.as_value())?)
}
