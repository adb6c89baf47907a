//! Match list and match detail commands

use std::path::PathBuf;

use crate::{
    cli::types::ids::{AccessId, MatchId, MatchType},
    nexon::Fo4Client,
    Result,
};

use super::common::write_json;

/// Parameters for the match id listing.
#[derive(Debug, Clone)]
pub struct MatchIdsParams {
    pub access_ids: Vec<AccessId>,
    pub match_type: MatchType,
    pub offset: u32,
    pub limit: u32,
}

/// Print the recent match ids of every user, one per line.
pub async fn handle_match_ids(client: &Fo4Client, params: MatchIdsParams) -> Result<()> {
    let ids = client
        .match_ids(
            &params.access_ids,
            params.match_type,
            params.offset,
            params.limit,
        )
        .await?;

    for id in ids {
        println!("{id}");
    }
    Ok(())
}

/// Dump the raw match details as JSON.
pub async fn handle_match_detail(
    client: &Fo4Client,
    match_ids: &[MatchId],
    out: Option<PathBuf>,
) -> Result<()> {
    let details = client.match_details(match_ids).await?;
    write_json(&details, out.as_deref())
}
