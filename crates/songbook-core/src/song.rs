//! Chord markers inside song sources.
//!
//! Songs mark chords inline with `\[Am7]`. The scanner collects the distinct
//! chords of a song so a row of their diagrams can be spliced in under the
//! song title.

use std::io::Read;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::latex;
use crate::model::Chord;

static CHORD_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\\[([\w#]+)\]").expect("chord marker is a valid regex"));

/// The line opening a song, e.g. `\beginsong{Title}[by={Author}]`.
pub static BEGIN_SONG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)\\beginsong.*\n").expect("beginsong pattern is a valid regex"));

/// Distinct chords mentioned in `text`, in order of first appearance.
pub fn find_chords(text: &str) -> Result<Vec<Chord>> {
    let mut found = IndexSet::new();
    for marker in CHORD_MARKER.captures_iter(text) {
        found.insert(Chord::parse(&marker[1])?);
    }
    Ok(found.into_iter().collect())
}

/// Read `reader` to the end, then [`find_chords`].
pub fn read_chords<R: Read>(mut reader: R) -> Result<Vec<Chord>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    find_chords(&text)
}

/// Insert `text` on its own line after the first match of `pattern`.
pub fn insert_after(song: &str, text: &str, pattern: &Regex) -> Result<String> {
    let end = pattern
        .find(song)
        .ok_or_else(|| Error::MarkerNotFound(pattern.as_str().to_string()))?
        .end();
    Ok([&song[..end], text, &song[end..]].join("\n"))
}

/// The song with a row of diagrams for every chord it uses, placed right
/// after the `\beginsong` line.
pub fn insert_chord_row(song: &str, per_line: usize) -> Result<String> {
    let chords = find_chords(song)?;
    log::debug!("Found {} distinct chords", chords.len());
    let row = latex::emit_chord_row(&chords, per_line)?;
    insert_after(song, &row, &BEGIN_SONG_LINE)
}
