//! ID types for FIFA Online 4.

use crate::error::{Fo4Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player identifiers pack the season into the leading digits.
const PID_MODULUS: u32 = 1_000_000;

/// Type-safe wrapper for FIFA Online 4 player identifiers (`spId`).
///
/// An `spId` is a three-digit season id followed by a six-digit player id,
/// so the same footballer has one `spId` per card season.
///
/// # Examples
///
/// ```rust
/// use fo4_stats::SpId;
///
/// let sp_id = SpId::new(101000001);
/// assert_eq!(sp_id.season_id(), 101);
/// assert_eq!(sp_id.pid(), 1);
/// assert_eq!(sp_id.to_string(), "101000001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpId(pub u32);

impl SpId {
    /// Create a new SpId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Season (card class) part of the identifier.
    pub fn season_id(&self) -> u32 {
        self.0 / PID_MODULUS
    }

    /// Season-independent player id.
    pub fn pid(&self) -> u32 {
        self.0 % PID_MODULUS
    }
}

impl fmt::Display for SpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpId {
    type Err = Fo4Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Opaque user account identifier returned by the nickname lookup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessId(pub String);

impl AccessId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccessId {
    type Err = Fo4Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Opaque match identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MatchId {
    type Err = Fo4Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.to_string()))
    }
}

/// Match type code (see the `matchtype.json` metadata).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchType(pub u16);

impl MatchType {
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

/// Official 1:1 ranked matches.
impl Default for MatchType {
    fn default() -> Self {
        Self(50)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchType {
    type Err = Fo4Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
