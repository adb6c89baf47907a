//! Error types for the FIFA Online 4 statistics client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, Fo4Error>;

#[derive(Error, Debug)]
pub enum Fo4Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("Ranking depth must be a positive multiple of 10, got {n}")]
    InvalidRankDepth { n: usize },

    #[error("Match list limit must be between 1 and 100, got {limit}")]
    InvalidLimit { limit: u32 },

    #[error("Invalid CSS selector: {message}")]
    Selector { message: String },

    #[error("Unknown player identifier {sp_id} in match {match_id}")]
    UnknownPlayerId { sp_id: u32, match_id: String },

    #[error("Match {match_id} has a side without a `{section}` section")]
    MissingSection {
        section: &'static str,
        match_id: String,
    },

    #[error("Nexon API returned no data")]
    NoData,
}

impl Fo4Error {
    /// Whether this error is a data-integrity fault raised while flattening
    /// a single match, as opposed to a transport or configuration failure.
    pub fn is_match_fault(&self) -> bool {
        matches!(
            self,
            Fo4Error::UnknownPlayerId { .. } | Fo4Error::MissingSection { .. }
        )
    }
}
