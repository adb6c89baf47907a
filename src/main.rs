//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use fo4_stats::{
    cli::{Commands, Fo4, GetCmd},
    commands::{
        dataset::{handle_dataset, DatasetParams},
        image::handle_player_image,
        matches::{handle_match_detail, handle_match_ids, MatchIdsParams},
        meta::handle_meta,
        resolve_api_key,
        users::{handle_nick_to_id, handle_top_rankers},
    },
    logging, Fo4Client,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let app = Fo4::parse();

    // Metadata, ranking and image commands work without a key.
    let api_key = resolve_api_key(app.api_key).ok();
    let client = Fo4Client::new(api_key).context("failed to build HTTP client")?;

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Meta { kind, json } => handle_meta(&client, kind, json)
                .await
                .with_context(|| format!("failed to fetch {kind} metadata"))?,

            GetCmd::TopRankers { n, json } => handle_top_rankers(&client, n, json)
                .await
                .context("failed to collect top rankers")?,

            GetCmd::NickToId { nicknames, json } => handle_nick_to_id(&client, &nicknames, json)
                .await
                .context("failed to resolve nicknames")?,

            GetCmd::MatchIds { access_ids, paging } => handle_match_ids(
                &client,
                MatchIdsParams {
                    access_ids,
                    match_type: paging.match_type,
                    offset: paging.offset,
                    limit: paging.limit,
                },
            )
            .await
            .context("failed to list match ids")?,

            GetCmd::MatchDetail { match_ids, out } => handle_match_detail(&client, &match_ids, out)
                .await
                .context("failed to fetch match details")?,

            GetCmd::PlayerImage { sp_id, out } => {
                handle_player_image(&client, sp_id, out)
                    .await
                    .with_context(|| format!("failed to download image of player {sp_id}"))?;
            }

            GetCmd::Dataset {
                match_ids,
                access_ids,
                paging,
                skip_faults,
                parallel,
                out,
            } => handle_dataset(
                &client,
                DatasetParams {
                    match_ids,
                    access_ids,
                    match_type: paging.match_type,
                    offset: paging.offset,
                    limit: paging.limit,
                    skip_faults,
                    parallel,
                    out,
                },
            )
            .await
            .context("failed to build dataset")?,
        },
    }

    Ok(())
}
