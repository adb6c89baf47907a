//! FIFA Online 4 statistics client library
//!
//! A Rust client for the Nexon FIFA Online 4 Open API and its companion
//! websites, plus the tooling to turn match details into analysis-ready rows.
//!
//! ## Features
//!
//! - **Metadata**: match types, player identifiers, seasons, positions and
//!   divisions as forward/reverse lookup tables
//! - **Rankers**: scrape the top-N owner nicknames from the ranking page
//! - **Users & Matches**: resolve nicknames to access ids, list recent match
//!   ids and fetch match details
//! - **Images**: download a player's action shot
//! - **Datasets**: flatten match details into one row per side, flagged by
//!   whether the side fields a Korea national team squad
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fo4_stats::{dataset::{flatten, PlayerDirectory}, Fo4Client, MatchId};
//!
//! # async fn example() -> fo4_stats::Result<()> {
//! let client = Fo4Client::new(Some("my-api-key".to_string()))?;
//!
//! let details = client
//!     .match_details(&[MatchId::new("6274cc931a6484c5cdaa76d0")])
//!     .await?;
//! let directory = PlayerDirectory::from(client.spid_meta().await?);
//!
//! let table = flatten(&details, &directory)?;
//! println!("{} rows", table.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Open API key to avoid passing it in every command:
//! ```bash
//! export FO4_API_KEY=...
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod nexon;

// Re-export commonly used types
pub use cli::types::ids::{AccessId, MatchId, MatchType, SpId};
pub use dataset::{FlatRow, FlatTable, PlayerDirectory};
pub use error::{Fo4Error, Result};
pub use nexon::{types::RawMatch, Endpoints, Fo4Client};

pub const API_KEY_ENV_VAR: &str = "FO4_API_KEY";
