// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Target identification for player and guild lookups
//!
//! The Hypixel API addresses players by UUID only, while callers usually know a
//! player by name. [`Target`] records which of the two a caller supplied so the
//! client can decide whether a name lookup is needed before building the
//! request. [`GuildLookup`] plays the same role for the `findGuild` endpoint,
//! which can search by guild name or by a member.
//!
//! Both types can be built from the string tags used by the public API
//! documentation (`uuid`, `name`, `member`, `memberName`) through their
//! `from_tag` constructors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Tag describing the shape of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetType {
    /// Identifier is a player UUID
    #[default]
    #[serde(rename = "uuid")]
    Uuid,
    /// Identifier is a player name (or a guild name for guild lookups)
    #[serde(rename = "name")]
    Name,
    /// Identifier is the UUID of a guild member
    #[serde(rename = "member")]
    Member,
    /// Identifier is the name of a guild member
    #[serde(rename = "memberName")]
    MemberName,
}

impl TargetType {
    /// Returns the tag string for this target type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "uuid",
            Self::Name => "name",
            Self::Member => "member",
            Self::MemberName => "memberName",
        }
    }

    /// Returns all target types
    pub const fn all() -> &'static [Self] {
        &[Self::Uuid, Self::Name, Self::Member, Self::MemberName]
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid" => Ok(Self::Uuid),
            "name" => Ok(Self::Name),
            "member" => Ok(Self::Member),
            "memberName" => Ok(Self::MemberName),
            _ => Err(TargetParseError::UnknownTargetType(s.to_string())),
        }
    }
}

/// Error type for target tag parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetParseError {
    /// The tag is not one of the supported target types
    #[error("unknown target type: {0}. Supported target types are: uuid, name, member, memberName")]
    UnknownTargetType(String),
}

/// A player, identified either by UUID or by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Target {
    /// A player UUID, sent to the API verbatim
    Uuid(String),
    /// A player name, resolved to a UUID before any request is sent
    Name(String),
}

impl Target {
    /// Create a target from a player UUID
    pub fn uuid(uuid: impl Into<String>) -> Self {
        Self::Uuid(uuid.into())
    }

    /// Create a target from a player name
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Create a target from an optional tag
    ///
    /// A missing tag means the identifier is already a UUID. `member` is
    /// accepted as an alias of `uuid` and `memberName` as an alias of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TargetParseError::UnknownTargetType`] if the tag is not recognized
    pub fn from_tag(
        target_type: Option<&str>,
        identifier: impl Into<String>,
    ) -> Result<Self, TargetParseError> {
        let target_type = target_type
            .map(TargetType::from_str)
            .transpose()?
            .unwrap_or_default();
        Ok(Self::from_type(target_type, identifier))
    }

    /// Create a target from an already parsed [`TargetType`]
    pub fn from_type(target_type: TargetType, identifier: impl Into<String>) -> Self {
        match target_type {
            TargetType::Uuid | TargetType::Member => Self::Uuid(identifier.into()),
            TargetType::Name | TargetType::MemberName => Self::Name(identifier.into()),
        }
    }

    /// Returns the identifier as supplied by the caller
    pub fn identifier(&self) -> &str {
        match self {
            Self::Uuid(value) | Self::Name(value) => value,
        }
    }

    /// Returns the target type matching this target
    pub const fn target_type(&self) -> TargetType {
        match self {
            Self::Uuid(_) => TargetType::Uuid,
            Self::Name(_) => TargetType::Name,
        }
    }

    /// Returns whether the identifier has to be resolved through a name lookup
    pub const fn needs_resolution(&self) -> bool {
        matches!(self, Self::Name(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target_type(), self.identifier())
    }
}

/// How to search for a guild through the `findGuild` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GuildLookup {
    /// Search by guild name, sent verbatim as `byName`
    ByName(String),
    /// Search by the UUID of a member, sent verbatim as `byUuid`
    ByMemberUuid(String),
    /// Search by the name of a member, resolved to a UUID and sent as `byUuid`
    ByMemberName(String),
}

impl GuildLookup {
    /// Create a lookup from a tag
    ///
    /// `name` searches by guild name and `memberName` by member name. Every
    /// other tag, including unrecognized ones, searches by member UUID.
    pub fn from_tag(target_type: &str, identifier: impl Into<String>) -> Self {
        match target_type.parse::<TargetType>() {
            Ok(target_type) => Self::from_type(target_type, identifier),
            Err(_) => Self::ByMemberUuid(identifier.into()),
        }
    }

    /// Create a lookup from an already parsed [`TargetType`]
    pub fn from_type(target_type: TargetType, identifier: impl Into<String>) -> Self {
        match target_type {
            TargetType::Name => Self::ByName(identifier.into()),
            TargetType::MemberName => Self::ByMemberName(identifier.into()),
            TargetType::Uuid | TargetType::Member => Self::ByMemberUuid(identifier.into()),
        }
    }

    /// Returns the query parameter name used by the `findGuild` endpoint
    pub const fn query_param(&self) -> &'static str {
        match self {
            Self::ByName(_) => "byName",
            Self::ByMemberUuid(_) | Self::ByMemberName(_) => "byUuid",
        }
    }

    /// Returns the identifier as supplied by the caller
    pub fn identifier(&self) -> &str {
        match self {
            Self::ByName(value) | Self::ByMemberUuid(value) | Self::ByMemberName(value) => value,
        }
    }

    /// Returns the member target that must be resolved, if any
    pub fn member(&self) -> Option<Target> {
        match self {
            Self::ByName(_) => None,
            Self::ByMemberUuid(uuid) => Some(Target::Uuid(uuid.clone())),
            Self::ByMemberName(name) => Some(Target::Name(name.clone())),
        }
    }
}
