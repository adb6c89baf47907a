//! Dataset command: fetch match details and flatten them into rows.

use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::types::ids::{AccessId, MatchId, MatchType},
    dataset::{flatten, flatten_par, flatten_skipping, FlatTable, PlayerDirectory},
    nexon::{types::RawMatch, Fo4Client},
    Fo4Error, Result,
};

use super::common::write_json;

/// What to flatten and how to treat faulty matches.
#[derive(Debug, Clone)]
pub struct DatasetParams {
    /// Explicit match ids.
    pub match_ids: Vec<MatchId>,
    /// Users whose recent matches are added after `match_ids`.
    pub access_ids: Vec<AccessId>,
    pub match_type: MatchType,
    pub offset: u32,
    pub limit: u32,
    /// Leave out matches with unknown players or missing sections instead of failing.
    pub skip_faults: bool,
    /// Flatten matches in parallel (ignored with `skip_faults`).
    pub parallel: bool,
    pub out: Option<PathBuf>,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            match_ids: Vec::new(),
            access_ids: Vec::new(),
            match_type: MatchType::default(),
            offset: 0,
            limit: 10,
            skip_faults: false,
            parallel: false,
            out: None,
        }
    }
}

/// Outcome of a dataset build.
#[derive(Debug)]
pub struct DatasetReport {
    pub table: FlatTable,
    /// Faults of skipped matches; always empty unless `skip_faults` is set.
    pub faults: Vec<Fo4Error>,
    pub matches: usize,
}

/// Flatten already fetched matches according to the fault policy.
pub fn flatten_with_policy(
    matches: &[RawMatch],
    directory: &PlayerDirectory,
    skip_faults: bool,
    parallel: bool,
) -> Result<(FlatTable, Vec<Fo4Error>)> {
    if skip_faults {
        Ok(flatten_skipping(matches, directory))
    } else if parallel {
        Ok((flatten_par(matches, directory)?, Vec::new()))
    } else {
        Ok((flatten(matches, directory)?, Vec::new()))
    }
}

/// Resolve the match ids, fetch details and the player directory, then flatten.
pub async fn build_dataset(client: &Fo4Client, params: &DatasetParams) -> Result<DatasetReport> {
    let mut match_ids = params.match_ids.clone();
    if !params.access_ids.is_empty() {
        let recent = client
            .match_ids(
                &params.access_ids,
                params.match_type,
                params.offset,
                params.limit,
            )
            .await?;
        match_ids.extend(recent);
    }
    if match_ids.is_empty() {
        return Err(Fo4Error::NoData);
    }

    let details = client.match_details(&match_ids).await?;
    let directory = PlayerDirectory::from(client.spid_meta().await?);

    let (table, faults) =
        flatten_with_policy(&details, &directory, params.skip_faults, params.parallel)?;
    info!(
        matches = details.len(),
        rows = table.len(),
        skipped = faults.len(),
        "flattened match details"
    );

    Ok(DatasetReport {
        table,
        faults,
        matches: details.len(),
    })
}

/// Build the dataset and write it as a JSON array of rows.
pub async fn handle_dataset(client: &Fo4Client, params: DatasetParams) -> Result<()> {
    let report = build_dataset(client, &params).await?;

    // stdout carries the JSON table
    for fault in &report.faults {
        eprintln!("⚠ skipped: {fault}");
    }
    write_json(&report.table, params.out.as_deref())
}
