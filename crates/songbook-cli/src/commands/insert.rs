use anyhow::{Context, Result};
use songbook_core::song;
use std::path::PathBuf;

/// Print `song_file` with a row of diagrams for its chords under the title.
/// The file itself is left untouched.
pub fn insert_chords(song_file: PathBuf, chords_per_line: usize) -> Result<()> {
    let text = std::fs::read_to_string(&song_file)
        .with_context(|| format!("Failed to read {}", song_file.display()))?;

    let result = song::insert_chord_row(&text, chords_per_line)
        .with_context(|| format!("Failed to insert chords into {}", song_file.display()))?;

    println!("{}", result);
    Ok(())
}
