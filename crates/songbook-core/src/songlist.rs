//! Index of the song files making up a songbook.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The `.tex` files directly inside `dir`, sorted by file name.
pub fn list_songs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut songs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_song_file(&path) {
            songs.push(path);
        }
    }
    songs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    log::debug!("Found {} songs in {}", songs.len(), dir.display());
    Ok(songs)
}

fn is_song_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tex")
}

/// One `\input{…}` line per song.
pub fn input_commands(songs: &[PathBuf]) -> String {
    songs
        .iter()
        .map(|path| format!(r"\input{{{}}}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
