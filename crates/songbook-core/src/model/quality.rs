use std::fmt;

/// The harmonic flavour of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteQuality {
    Major,
    Minor,
    Dominant,
    Diminished,
    Suspended,
}

/// Every accepted spelling of a quality, canonical names included.
const QUALITY_ALIASES: &[(&str, NoteQuality)] = &[
    ("major", NoteQuality::Major),
    ("maj", NoteQuality::Major),
    ("M", NoteQuality::Major),
    ("minor", NoteQuality::Minor),
    ("min", NoteQuality::Minor),
    ("m", NoteQuality::Minor),
    ("dominant", NoteQuality::Dominant),
    ("dom", NoteQuality::Dominant),
    ("diminished", NoteQuality::Diminished),
    ("dim", NoteQuality::Diminished),
    ("suspended", NoteQuality::Suspended),
    ("sus", NoteQuality::Suspended),
];

impl NoteQuality {
    pub const ALL: [Self; 5] = [
        Self::Major,
        Self::Minor,
        Self::Dominant,
        Self::Diminished,
        Self::Suspended,
    ];

    /// Look up a quality by any of its aliases (case-sensitive).
    pub fn from_alias(alias: &str) -> Option<Self> {
        QUALITY_ALIASES
            .iter()
            .find(|&&(name, _)| name == alias)
            .map(|&(_, quality)| quality)
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Dominant => "dominant",
            Self::Diminished => "diminished",
            Self::Suspended => "suspended",
        }
    }

    /// Suffix used in short chord names: `m` for minor, otherwise the first
    /// three letters of the canonical name.
    pub fn short_suffix(self) -> &'static str {
        match self {
            Self::Minor => "m",
            other => &other.canonical_name()[..3],
        }
    }
}

impl fmt::Display for NoteQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alias() {
        assert_eq!(NoteQuality::from_alias("m"), Some(NoteQuality::Minor));
        assert_eq!(NoteQuality::from_alias("min"), Some(NoteQuality::Minor));
        assert_eq!(NoteQuality::from_alias("M"), Some(NoteQuality::Major));
        assert_eq!(NoteQuality::from_alias("maj"), Some(NoteQuality::Major));
        assert_eq!(NoteQuality::from_alias("dom"), Some(NoteQuality::Dominant));
        assert_eq!(NoteQuality::from_alias("dim"), Some(NoteQuality::Diminished));
        assert_eq!(NoteQuality::from_alias("sus"), Some(NoteQuality::Suspended));
    }

    #[test]
    fn test_from_alias_unknown() {
        assert_eq!(NoteQuality::from_alias("aug"), None);
        assert_eq!(NoteQuality::from_alias("Min"), None);
        assert_eq!(NoteQuality::from_alias(""), None);
    }

    #[test]
    fn test_canonical_names_are_aliases() {
        for quality in NoteQuality::ALL {
            assert_eq!(NoteQuality::from_alias(quality.canonical_name()), Some(quality));
        }
    }

    #[test]
    fn test_short_suffixes_resolve_back() {
        for quality in NoteQuality::ALL {
            assert_eq!(NoteQuality::from_alias(quality.short_suffix()), Some(quality));
        }
    }

    #[test]
    fn test_short_suffix_values() {
        assert_eq!(NoteQuality::Major.short_suffix(), "maj");
        assert_eq!(NoteQuality::Minor.short_suffix(), "m");
        assert_eq!(NoteQuality::Dominant.short_suffix(), "dom");
        assert_eq!(NoteQuality::Diminished.short_suffix(), "dim");
        assert_eq!(NoteQuality::Suspended.short_suffix(), "sus");
    }
}
