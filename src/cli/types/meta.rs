//! Metadata table selection for the `meta` command.

use std::fmt;

/// The static metadata tables published alongside the Open API.
///
/// # Examples
///
/// ```rust
/// use fo4_stats::cli::types::meta::MetaKind;
///
/// assert_eq!(MetaKind::Spid.file_name(), "spid.json");
/// assert_eq!(MetaKind::Divisions.to_string(), "divisions");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum MetaKind {
    /// Match type codes (`matchtype.json`)
    MatchTypes,
    /// Player identifiers and names (`spid.json`)
    Spid,
    /// Season / card class ids (`seasonid.json`)
    Seasons,
    /// On-pitch positions (`spposition.json`)
    Positions,
    /// Ranked divisions (`division.json`)
    Divisions,
}

impl MetaKind {
    /// File name under the static metadata base URL.
    pub fn file_name(&self) -> &'static str {
        match self {
            MetaKind::MatchTypes => "matchtype.json",
            MetaKind::Spid => "spid.json",
            MetaKind::Seasons => "seasonid.json",
            MetaKind::Positions => "spposition.json",
            MetaKind::Divisions => "division.json",
        }
    }
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaKind::MatchTypes => write!(f, "match-types"),
            MetaKind::Spid => write!(f, "spid"),
            MetaKind::Seasons => write!(f, "seasons"),
            MetaKind::Positions => write!(f, "positions"),
            MetaKind::Divisions => write!(f, "divisions"),
        }
    }
}
