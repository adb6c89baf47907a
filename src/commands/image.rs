//! Player image command implementation

use std::{fs, path::PathBuf};

use crate::{cli::types::ids::SpId, nexon::Fo4Client, Result};

/// Default file name for a player's image.
pub fn default_image_path(sp_id: SpId) -> PathBuf {
    PathBuf::from(format!("p{sp_id}.png"))
}

/// Download the player's action shot. Returns where it was written, or
/// `None` when the player has no artwork.
pub async fn handle_player_image(
    client: &Fo4Client,
    sp_id: SpId,
    out: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let Some(bytes) = client.player_action_image(sp_id).await? else {
        println!("⚠ No image exists for player {sp_id}");
        return Ok(None);
    };

    let path = out.unwrap_or_else(|| default_image_path(sp_id));
    fs::write(&path, bytes)?;
    println!("✓ Saved image of player {} to {}", sp_id, path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_path() {
        assert_eq!(
            default_image_path(SpId::new(101000001)),
            PathBuf::from("p101000001.png")
        );
    }
}
