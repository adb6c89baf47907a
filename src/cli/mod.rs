//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    ids::{AccessId, MatchId, MatchType, SpId},
    meta::MetaKind,
};

use crate::API_KEY_ENV_VAR;

/// Paging arguments of the match list endpoint
#[derive(Debug, Args)]
pub struct MatchPaging {
    /// Match type code (50 = official match; see `meta match-types`).
    #[clap(long, default_value_t = MatchType::default())]
    pub match_type: MatchType,

    /// Position in each user's history to start from (0 = most recent).
    #[clap(long, default_value_t = 0)]
    pub offset: u32,

    /// Number of matches per user (1-100).
    #[clap(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch a static metadata table (no API key needed)
    Meta {
        /// Which table to fetch.
        #[clap(value_enum)]
        kind: MetaKind,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Scrape the official ranking page for the top N owner nicknames
    TopRankers {
        /// Ranking depth; must be a multiple of 10.
        #[clap(short, default_value_t = 100)]
        n: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Resolve owner nicknames to access ids
    NickToId {
        /// Nicknames to resolve.
        #[clap(required = true)]
        nicknames: Vec<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List recent match ids of one or more users
    MatchIds {
        /// Access ids (repeatable): `-a id1 -a id2`.
        #[clap(short = 'a', long = "access-id", required = true)]
        access_ids: Vec<AccessId>,

        #[clap(flatten)]
        paging: MatchPaging,
    },

    /// Dump the raw detail of one or more matches as JSON
    MatchDetail {
        /// Match ids to fetch.
        #[clap(required = true)]
        match_ids: Vec<MatchId>,

        /// Write to this file instead of stdout.
        #[clap(long, short)]
        out: Option<PathBuf>,
    },

    /// Download a player's action shot (falls back to the portrait)
    PlayerImage {
        /// Player identifier (season id + player id).
        sp_id: SpId,

        /// Destination file (default `p<SPID>.png`).
        #[clap(long, short)]
        out: Option<PathBuf>,
    },

    /// Flatten match details into one row per side with the `korea` flag
    Dataset {
        /// Match ids (repeatable): `-m id1 -m id2`.
        #[clap(short = 'm', long = "match-id")]
        match_ids: Vec<MatchId>,

        /// Also include the recent matches of these users.
        #[clap(short = 'a', long = "access-id")]
        access_ids: Vec<AccessId>,

        #[clap(flatten)]
        paging: MatchPaging,

        /// Leave out faulty matches instead of aborting.
        #[clap(long)]
        skip_faults: bool,

        /// Flatten matches on all cores.
        #[clap(long)]
        parallel: bool,

        /// Write to this file instead of stdout.
        #[clap(long, short)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fo4-stats", about = "FIFA Online 4 statistics CLI")]
pub struct Fo4 {
    /// Open API key (or set `FO4_API_KEY` env var).
    #[clap(long, global = true, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from FIFA Online 4
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
