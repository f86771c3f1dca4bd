use anyhow::{Context, Result};
use songbook_core::songlist;
use std::path::PathBuf;

/// Print a LaTeX `\input` command for each song in `song_dir`.
pub fn make_song_list(song_dir: PathBuf) -> Result<()> {
    let songs = songlist::list_songs(&song_dir)
        .with_context(|| format!("Failed to list songs in {}", song_dir.display()))?;

    if songs.is_empty() {
        log::warn!("No .tex files in {}", song_dir.display());
        return Ok(());
    }

    println!("{}", songlist::input_commands(&songs));
    Ok(())
}
