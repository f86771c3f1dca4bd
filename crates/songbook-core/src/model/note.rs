use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A pitch-class spelling.
///
/// Black keys have two spellings that are distinct values (`G#` and `Ab`),
/// linked through [`NoteName::enharmonic_flat`]. This lets a single fingering
/// be published under both names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteName {
    A,
    ASharp,
    BFlat,
    B,
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
}

// ---------------------------------------------------------------------------
// Spelling ↔ enum mapping
// ---------------------------------------------------------------------------

/// Written spelling and pitch class (C = 0) of every [`NoteName`].
const SPELLINGS: &[(NoteName, &str, u8)] = &[
    (NoteName::A, "A", 9),
    (NoteName::ASharp, "A#", 10),
    (NoteName::BFlat, "Bb", 10),
    (NoteName::B, "B", 11),
    (NoteName::C, "C", 0),
    (NoteName::CSharp, "C#", 1),
    (NoteName::DFlat, "Db", 1),
    (NoteName::D, "D", 2),
    (NoteName::DSharp, "D#", 3),
    (NoteName::EFlat, "Eb", 3),
    (NoteName::E, "E", 4),
    (NoteName::F, "F", 5),
    (NoteName::FSharp, "F#", 6),
    (NoteName::GFlat, "Gb", 6),
    (NoteName::G, "G", 7),
    (NoteName::GSharp, "G#", 8),
    (NoteName::AFlat, "Ab", 8),
];

/// Sharp spelling → flat twin.
const FLAT_TWINS: &[(NoteName, NoteName)] = &[
    (NoteName::ASharp, NoteName::BFlat),
    (NoteName::CSharp, NoteName::DFlat),
    (NoteName::DSharp, NoteName::EFlat),
    (NoteName::FSharp, NoteName::GFlat),
    (NoteName::GSharp, NoteName::AFlat),
];

impl NoteName {
    /// Every spelling, in the order of the chromatic scale starting on A.
    pub const ALL: [Self; 17] = [
        Self::A,
        Self::ASharp,
        Self::BFlat,
        Self::B,
        Self::C,
        Self::CSharp,
        Self::DFlat,
        Self::D,
        Self::DSharp,
        Self::EFlat,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::GFlat,
        Self::G,
        Self::GSharp,
        Self::AFlat,
    ];

    /// Resolve a raw root token (`"C"`, `"F#"`, `"Bb"`). Case-sensitive.
    pub fn normalize(raw: &str) -> Result<Self> {
        SPELLINGS
            .iter()
            .find(|&&(_, spelling, _)| spelling == raw)
            .map(|&(note, _, _)| note)
            .ok_or_else(|| Error::parse(raw, "unknown root note"))
    }

    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Pitch class in `0..12`, C being 0. Enharmonic twins share it.
    pub fn pitch_class(self) -> u8 {
        self.entry().2
    }

    /// The flat spelling of a sharp note; any other note is returned as is.
    pub fn enharmonic_flat(self) -> Self {
        FLAT_TWINS
            .iter()
            .find(|&&(sharp, _)| sharp == self)
            .map(|&(_, flat)| flat)
            .unwrap_or(self)
    }

    fn entry(self) -> &'static (NoteName, &'static str, u8) {
        // SPELLINGS lists every variant in declaration order.
        &SPELLINGS[self as usize]
    }
}

impl FromStr for NoteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::normalize(s)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
