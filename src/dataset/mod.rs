//! Flattening of match details into one tabular row per side.
//!
//! Each side of a two-sided match becomes a [`FlatRow`] holding the match id,
//! every stat of its `matchDetail`, `shoot`, `pass` and `defence` sections,
//! and a `korea` flag telling whether the side fields more than five players
//! from the Korea national team pool.
//!
//! ```rust
//! use fo4_stats::dataset::{flatten, PlayerDirectory};
//!
//! let table = flatten(&[], &PlayerDirectory::new()).unwrap();
//! assert!(table.is_empty());
//! ```

pub mod directory;
pub mod roster;
pub mod row;


use rayon::prelude::*;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::{
    cli::types::ids::MatchId,
    nexon::types::{RawMatch, SideRecord, StatMap},
    Fo4Error, Result,
};

pub use directory::PlayerDirectory;
pub use roster::{korea_flag, roster_member_count, KOREA_THRESHOLD, NATIONAL_ROSTER};
pub use row::{FlatRow, FlatTable, KOREA_COLUMN, MATCH_ID_COLUMN};

/// Only head-to-head matches with both sides recorded are kept.
pub const SIDES_PER_MATCH: usize = 2;

/// The stat sections of a side, in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatSection {
    MatchDetail,
    Shoot,
    Pass,
    Defence,
}

impl StatSection {
    /// Later sections overwrite same-named stats of earlier ones.
    pub const ORDER: [StatSection; 4] = [
        StatSection::MatchDetail,
        StatSection::Shoot,
        StatSection::Pass,
        StatSection::Defence,
    ];

    /// Field name in the match detail payload.
    pub fn key(&self) -> &'static str {
        match self {
            StatSection::MatchDetail => "matchDetail",
            StatSection::Shoot => "shoot",
            StatSection::Pass => "pass",
            StatSection::Defence => "defence",
        }
    }

    pub fn of<'a>(&self, side: &'a SideRecord) -> Option<&'a StatMap> {
        match self {
            StatSection::MatchDetail => side.match_detail.as_ref(),
            StatSection::Shoot => side.shoot.as_ref(),
            StatSection::Pass => side.pass.as_ref(),
            StatSection::Defence => side.defence.as_ref(),
        }
    }
}

/// Flatten every two-sided match into two rows, stopping at the first fault.
///
/// Matches without exactly two sides are skipped silently. An unknown `spId`
/// or a missing section fails the whole call.
pub fn flatten(matches: &[RawMatch], directory: &PlayerDirectory) -> Result<FlatTable> {
    let mut table = FlatTable::with_capacity(matches.len() * SIDES_PER_MATCH);
    for raw in matches {
        if let Some(rows) = flatten_match(raw, directory)? {
            table.extend(rows);
        }
    }
    Ok(table)
}

/// Like [`flatten`], but a faulting match is logged, collected and left out
/// (both of its sides) while the remaining matches are still processed.
pub fn flatten_skipping(
    matches: &[RawMatch],
    directory: &PlayerDirectory,
) -> (FlatTable, Vec<Fo4Error>) {
    let mut table = FlatTable::with_capacity(matches.len() * SIDES_PER_MATCH);
    let mut faults = Vec::new();

    for raw in matches {
        match flatten_match(raw, directory) {
            Ok(Some(rows)) => table.extend(rows),
            Ok(None) => {}
            Err(e) => {
                warn!(match_id = %raw.match_id, error = %e, "skipping match");
                faults.push(e);
            }
        }
    }

    (table, faults)
}

/// Parallel [`flatten`] over matches. Rows come out in input order; when
/// several matches fault, which fault is reported is unspecified.
pub fn flatten_par(matches: &[RawMatch], directory: &PlayerDirectory) -> Result<FlatTable> {
    let per_match = matches
        .par_iter()
        .map(|raw| flatten_match(raw, directory))
        .collect::<Result<Vec<_>>>()?;

    Ok(per_match.into_iter().flatten().flatten().collect())
}

/// Both rows of a match, or `None` when it does not have exactly two sides.
pub fn flatten_match(
    raw: &RawMatch,
    directory: &PlayerDirectory,
) -> Result<Option<[FlatRow; SIDES_PER_MATCH]>> {
    let [home, away] = raw.match_info.as_slice() else {
        debug!(
            match_id = %raw.match_id,
            sides = raw.match_info.len(),
            "skipping match without two sides"
        );
        return Ok(None);
    };

    Ok(Some([
        flatten_side(&raw.match_id, home, directory)?,
        flatten_side(&raw.match_id, away, directory)?,
    ]))
}

/// Build the row of one side.
pub fn flatten_side(
    match_id: &MatchId,
    side: &SideRecord,
    directory: &PlayerDirectory,
) -> Result<FlatRow> {
    let sections = StatSection::ORDER.map(|section| {
        section.of(side).ok_or_else(|| Fo4Error::MissingSection {
            section: section.key(),
            match_id: match_id.to_string(),
        })
    });
    let players = side.player.as_ref().ok_or_else(|| Fo4Error::MissingSection {
        section: "player",
        match_id: match_id.to_string(),
    })?;

    let mut row = FlatRow::default();
    row.set(MATCH_ID_COLUMN, Value::String(match_id.to_string()));
    for section in sections {
        for (column, value) in section? {
            row.set(column.as_str(), value.clone());
        }
    }

    let names = players
        .iter()
        .map(|p| {
            directory
                .name(p.sp_id)
                .ok_or_else(|| Fo4Error::UnknownPlayerId {
                    sp_id: p.sp_id.as_u32(),
                    match_id: match_id.to_string(),
                })
        })
        .collect::<Result<HashSet<&str>>>()?;

    let members = roster_member_count(names);
    row.set(KOREA_COLUMN, Value::from(korea_flag(members)));

    Ok(row)
}
