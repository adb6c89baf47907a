//! Ranking and nickname lookup commands

use crate::{nexon::Fo4Client, Result};

use super::common::write_json;

/// Print the nicknames of the top `n` ranked owners, one per line.
pub async fn handle_top_rankers(client: &Fo4Client, n: usize, as_json: bool) -> Result<()> {
    let rankers = client.top_rankers(n).await?;

    if as_json {
        return write_json(&rankers, None);
    }
    for (rank, nickname) in rankers.iter().enumerate() {
        println!("{}\t{}", rank + 1, nickname);
    }
    Ok(())
}

/// Resolve nicknames to access ids and print the mapping.
pub async fn handle_nick_to_id(
    client: &Fo4Client,
    nicknames: &[String],
    as_json: bool,
) -> Result<()> {
    let lookup = client.nick_to_id(nicknames).await?;

    if as_json {
        return write_json(&lookup, None);
    }
    for (nickname, access_id) in &lookup.by_nickname {
        println!("{access_id}\t{nickname}");
    }
    Ok(())
}
