//! Chord fingering catalog, loaded from an instrument definition file.
//!
//! An instrument file has one section per root note and one entry per chord,
//! keyed by the chord suffix. Each value gives the fret to press on every
//! string, one digit per string:
//!
//! ```ini
//! [A]
//! m = 002210
//! 7 = 020200
//!
//! [G#]
//! m = 466444
//! ```
//!
//! # Example
//!
//! ```
//! use songbook_core::{Chord, ChordCatalog};
//!
//! let catalog = ChordCatalog::parse("[G#]\nm = 466444\n", true).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(
//!     catalog.get(&Chord::parse("Abm").unwrap()),
//!     Some(&[4, 6, 6, 4, 4, 4][..])
//! );
//! ```

mod ini;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::model::{Chord, NoteName};

/// Finger positions of every known chord, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordCatalog {
    chords: IndexMap<Chord, Vec<u8>>,
}

impl ChordCatalog {
    /// Parse an instrument file.
    ///
    /// With `expand_aliases`, every chord rooted on a sharp is also stored
    /// under its flat twin (`G#m` gives `Abm` as well).
    pub fn parse(source: &str, expand_aliases: bool) -> Result<Self> {
        let mut catalog = Self::default();
        let mut seen: HashMap<u8, NoteName> = HashMap::new();

        for section in ini::read_sections(source)? {
            let note = NoteName::normalize(&section.name)?;
            if let Some(&first) = seen.get(&note.pitch_class()) {
                return Err(Error::DuplicateSection {
                    section: section.name,
                    first,
                    line: section.line,
                });
            }
            seen.insert(note.pitch_class(), note);

            for entry in &section.entries {
                let chord = Chord::parse(&format!("{}{}", section.name, entry.key))?;
                let fingers = parse_fingers(&entry.value).ok_or_else(|| {
                    Error::InvalidFingering {
                        chord: chord.to_string(),
                        value: entry.value.clone(),
                        line: entry.line,
                    }
                })?;

                let twin = note.enharmonic_flat();
                catalog.insert(chord, fingers.clone());
                if expand_aliases && twin != note {
                    catalog.insert(chord.with_root(twin), fingers);
                }
            }
        }

        log::debug!("Loaded {} chords", catalog.len());
        Ok(catalog)
    }

    /// Read `reader` to the end, then parse it.
    pub fn load<R: Read>(mut reader: R, expand_aliases: bool) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source, expand_aliases)
    }

    pub fn load_path(path: &Path, expand_aliases: bool) -> Result<Self> {
        log::debug!("Loading instrument file {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, expand_aliases)
    }

    fn insert(&mut self, chord: Chord, fingers: Vec<u8>) {
        if self.chords.insert(chord, fingers).is_some() {
            log::warn!("Fingering for {} defined more than once, keeping the last", chord);
        }
    }

    pub fn get(&self, chord: &Chord) -> Option<&[u8]> {
        self.chords.get(chord).map(Vec::as_slice)
    }

    pub fn contains(&self, chord: &Chord) -> bool {
        self.chords.contains_key(chord)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Chord, &[u8])> {
        self.chords.iter().map(|(chord, fingers)| (chord, fingers.as_slice()))
    }
}

/// `"x32010"` is rejected: muted strings are not representable.
fn parse_fingers(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() {
        return None;
    }
    value
        .chars()
        .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
        .collect()
}
