use anyhow::{Context, Result};
use songbook_core::{latex, ChordCatalog};
use std::path::PathBuf;

/// Print a `\newcommand` showing the finger positions of each chord in
/// `instrument_file`.
pub fn make_chords(instrument_file: PathBuf, expand_aliases: bool) -> Result<()> {
    log::info!("Reading chords from {}", instrument_file.display());

    let catalog = ChordCatalog::load_path(&instrument_file, expand_aliases)
        .with_context(|| format!("Failed to load {}", instrument_file.display()))?;

    let definitions = latex::emit_definitions(&catalog)
        .with_context(|| format!("Failed to name a chord from {}", instrument_file.display()))?;

    if !definitions.is_empty() {
        println!("{}", definitions);
    }

    log::info!("Defined {} chords", catalog.len());
    Ok(())
}
