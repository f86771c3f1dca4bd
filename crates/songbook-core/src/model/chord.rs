use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::latex;
use crate::model::{NoteName, NoteQuality};

/// Anchored at the start only: trailing characters are left unconsumed.
static CHORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<root>[A-G][#b]?)(?P<quality>[a-z]*)(?P<extension>[0-9]*)")
        .expect("chord pattern is a valid regex")
});

/// A chord as written in a song or an instrument file: `C`, `Am`, `F#dim7`.
///
/// Equality and hashing are structural, so two different spellings of the same
/// quality (`Am`, `Amin`) give equal chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: NoteName,
    /// `None` reads as major but prints no suffix.
    pub quality: Option<NoteQuality>,
    pub extension: Option<u32>,
}

impl Chord {
    #[must_use]
    pub const fn new(root: NoteName) -> Self {
        Self {
            root,
            quality: None,
            extension: None,
        }
    }

    #[must_use]
    pub const fn with_quality(mut self, quality: NoteQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    #[must_use]
    pub const fn with_extension(mut self, extension: u32) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Parse a short chord name like `F`, `D7` or `Am7`.
    pub fn parse(token: &str) -> Result<Self> {
        let caps = CHORD_PATTERN
            .captures(token)
            .ok_or_else(|| Error::parse(token, "expected a root note A-G"))?;

        let root = NoteName::normalize(&caps["root"])
            .map_err(|_| Error::parse(token, format!("unknown root note {:?}", &caps["root"])))?;

        let quality = match &caps["quality"] {
            "" => None,
            alias => Some(
                NoteQuality::from_alias(alias)
                    .ok_or_else(|| Error::parse(token, format!("unknown chord quality {alias:?}")))?,
            ),
        };

        let extension = match &caps["extension"] {
            "" => None,
            digits => Some(
                digits
                    .parse::<u32>()
                    .map_err(|e| Error::parse(token, format!("bad extension {digits:?}: {e}")))?,
            ),
        };

        Ok(Self {
            root,
            quality,
            extension,
        })
    }

    /// The same chord spelled from another root.
    #[must_use]
    pub const fn with_root(mut self, root: NoteName) -> Self {
        self.root = root;
        self
    }

    /// Name of the LaTeX macro printing this chord's diagram, e.g.
    /// `\printFsharpmseven` for `F#m7`.
    pub fn latex_command_name(&self) -> Result<String> {
        let name = self.to_string().replace('#', "sharp");
        Ok(format!(
            "{}{}",
            latex::COMMAND_PREFIX,
            latex::spell_numbers(&name)?
        ))
    }

    /// The `\newcommand` defining [`Chord::latex_command_name`] as a `\gtab`
    /// diagram with the given finger positions.
    pub fn to_latex_definition(&self, finger_positions: &[u8]) -> Result<String> {
        let fingers: String = finger_positions.iter().map(u8::to_string).collect();
        Ok(format!(
            r"\newcommand{{{}}}{{\gtab{{{}}}{{{}}}}}",
            self.latex_command_name()?,
            latex::escape_sharps(&self.to_string()),
            fingers
        ))
    }
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root.as_str())?;
        match (self.quality, self.extension) {
            (None, _) | (Some(NoteQuality::Major), None) => {}
            (Some(quality), _) => f.write_str(quality.short_suffix())?,
        }
        if let Some(extension) = self.extension {
            write!(f, "{extension}")?;
        }
        Ok(())
    }
}
