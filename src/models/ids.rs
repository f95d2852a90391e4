//! Strongly-typed ID wrappers for all entity types
//!
//! The remote service assigns integer IDs. Entries created optimistically get
//! a temporary client-side ID until the server confirms them. On the wire a
//! server ID is a JSON integer and a temporary ID is the string `temp-<uuid>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used for temporary IDs on the wire
pub const TEMP_PREFIX: &str = "temp-";

/// The shared representation behind every typed ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawId {
    /// Assigned by the remote service
    Server(i64),
    /// Assigned locally while a create is in flight
    Temp(Uuid),
}

/// Error returned when an ID string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(pub String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid ID: {}", self.0)
    }
}

impl std::error::Error for IdParseError {}

impl FromStr for RawId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::Server(n));
        }
        s.strip_prefix(TEMP_PREFIX)
            .and_then(|rest| Uuid::parse_str(rest).ok())
            .map(Self::Temp)
            .ok_or_else(|| IdParseError(s.to_string()))
    }
}

impl Serialize for RawId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Server(n) => serializer.serialize_i64(*n),
            Self::Temp(uuid) => serializer.serialize_str(&format!("{}{}", TEMP_PREFIX, uuid)),
        }
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(Self::Server(n)),
            Wire::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(RawId);

        impl $name {
            /// Wrap an ID assigned by the server
            pub const fn server(id: i64) -> Self {
                Self(RawId::Server(id))
            }

            /// Create a new temporary ID for an unconfirmed record
            pub fn temporary() -> Self {
                Self(RawId::Temp(Uuid::new_v4()))
            }

            /// Whether this ID was assigned locally
            pub fn is_temporary(&self) -> bool {
                matches!(self.0, RawId::Temp(_))
            }

            /// The server-assigned value, if any
            pub fn as_server(&self) -> Option<i64> {
                match self.0 {
                    RawId::Server(n) => Some(n),
                    RawId::Temp(_) => None,
                }
            }

            /// Get the underlying representation
            pub fn raw(&self) -> RawId {
                self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                s.parse()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.0 {
                    RawId::Server(n) => write!(f, "{}", n),
                    RawId::Temp(uuid) => {
                        write!(f, "{}{}", $display_prefix, &uuid.to_string()[..8])
                    }
                }
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self::server(id)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept "#12" as typed in the CLI
                let s = s.trim();
                let s = s.strip_prefix('#').unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(BoardId, "tmp-board-");
define_id!(EntryId, "tmp-entry-");
define_id!(CategoryId, "tmp-cat-");
define_id!(GoalId, "tmp-goal-");
