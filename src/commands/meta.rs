//! Metadata command implementation

use crate::{cli::types::meta::MetaKind, nexon::Fo4Client, Result};

use super::common::print_lookup;

/// Fetch one static metadata table and print it.
pub async fn handle_meta(client: &Fo4Client, kind: MetaKind, as_json: bool) -> Result<()> {
    match kind {
        MetaKind::MatchTypes => print_lookup(&client.match_types().await?, as_json),
        MetaKind::Spid => print_lookup(&client.spid_meta().await?, as_json),
        MetaKind::Seasons => print_lookup(&client.season_ids().await?, as_json),
        MetaKind::Positions => print_lookup(&client.positions().await?, as_json),
        MetaKind::Divisions => print_lookup(&client.divisions().await?, as_json),
    }
}
