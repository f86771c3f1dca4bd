//! LaTeX output: chord diagram definitions and rows of diagram invocations.
//!
//! Diagrams are drawn with the `songs` package's `\gtab` macro. Each chord
//! gets a parameterless `\print…` macro so songs can reference it by name,
//! which means the macro name may only contain letters.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::ChordCatalog;
use crate::error::{Error, Result};
use crate::model::Chord;

pub const COMMAND_PREFIX: &str = r"\print";

/// Line separating two rows of chord diagrams.
pub const NEWLINE_COMMAND: &str = r"\newline";

/// Chord extensions that may appear in a macro name.
const SPELLED_NUMBERS: &[(&str, &str)] = &[
    ("4", "fourth"),
    ("7", "seven"),
    ("9", "nine"),
    ("11", "eleven"),
    ("13", "thirteen"),
];

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit pattern is a valid regex"));

/// Replace every maximal run of digits with its spelled-out name.
pub fn spell_numbers(name: &str) -> Result<String> {
    let mut spelled = String::with_capacity(name.len() + 8);
    let mut last = 0;
    for run in DIGIT_RUN.find_iter(name) {
        let word = SPELLED_NUMBERS
            .iter()
            .find(|&&(digits, _)| digits == run.as_str())
            .map(|&(_, word)| word)
            .ok_or_else(|| Error::KeyLookup(run.as_str().to_string()))?;
        spelled.push_str(&name[last..run.start()]);
        spelled.push_str(word);
        last = run.end();
    }
    spelled.push_str(&name[last..]);
    Ok(spelled)
}

/// `#` is a macro parameter character in LaTeX.
pub fn escape_sharps(text: &str) -> String {
    text.replace('#', r"\#")
}

/// One `\print…` line per chord, with a `\newline` after every `per_line`
/// chords except the last row.
pub fn emit_chord_row(chords: &[Chord], per_line: usize) -> Result<String> {
    if per_line == 0 {
        return Err(Error::InvalidBatchSize);
    }

    let mut lines = Vec::with_capacity(chords.len() + chords.len() / per_line);
    for (i, batch) in chords.chunks(per_line).enumerate() {
        if i > 0 {
            lines.push(NEWLINE_COMMAND.to_string());
        }
        for chord in batch {
            lines.push(chord.latex_command_name()?);
        }
    }
    Ok(lines.join("\n"))
}

/// A `\newcommand` for every chord of the catalog, in catalog order.
///
/// Distinct chords sharing a macro name (`C` and `Cmaj`) are defined once,
/// with the fingering that comes last.
pub fn emit_definitions(catalog: &ChordCatalog) -> Result<String> {
    let mut definitions: IndexMap<String, String> = IndexMap::with_capacity(catalog.len());
    for (chord, fingers) in catalog.iter() {
        let name = chord.latex_command_name()?;
        let definition = chord.to_latex_definition(fingers)?;
        if definitions.contains_key(&name) {
            log::warn!("{} defined more than once, keeping the last", name);
        }
        definitions.insert(name, definition);
    }
    Ok(definitions.into_values().collect::<Vec<_>>().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chords(tokens: &[&str]) -> Vec<Chord> {
        tokens.iter().map(|t| Chord::parse(t).unwrap()).collect()
    }

    #[test]
    fn test_spell_numbers() {
        assert_eq!(spell_numbers("Am7").unwrap(), "Amseven");
        assert_eq!(spell_numbers("C11").unwrap(), "Celeven");
        assert_eq!(spell_numbers("Dsus").unwrap(), "Dsus");
    }

    #[test]
    fn test_spell_numbers_matches_whole_runs() {
        // "13" is a single run, not "1" followed by "3".
        assert_eq!(spell_numbers("G13").unwrap(), "Gthirteen");
        assert!(matches!(spell_numbers("G47"), Err(Error::KeyLookup(run)) if run == "47"));
    }

    #[test]
    fn test_escape_sharps() {
        assert_eq!(escape_sharps("C#m"), r"C\#m");
        assert_eq!(escape_sharps("Bb"), "Bb");
    }

    #[test]
    fn test_emit_chord_row_empty() {
        assert_eq!(emit_chord_row(&[], 5).unwrap(), "");
    }

    #[test]
    fn test_emit_chord_row_single_batch() {
        let row = emit_chord_row(&chords(&["C", "Am"]), 5).unwrap();
        assert_eq!(row, "\\printC\n\\printAm");
    }

    #[test]
    fn test_emit_chord_row_batches() {
        let row = emit_chord_row(&chords(&["C", "Am", "G", "D", "E", "F"]), 5).unwrap();
        let lines: Vec<&str> = row.lines().collect();
        assert_eq!(
            lines,
            vec![
                r"\printC",
                r"\printAm",
                r"\printG",
                r"\printD",
                r"\printE",
                r"\newline",
                r"\printF",
            ]
        );
        assert!(!row.ends_with('\n'));
    }

    #[test]
    fn test_emit_chord_row_exact_multiple_has_no_trailing_newline_command() {
        let row = emit_chord_row(&chords(&["C", "G", "Am", "F"]), 2).unwrap();
        assert_eq!(row, "\\printC\n\\printG\n\\newline\n\\printAm\n\\printF");
    }

    #[test]
    fn test_emit_chord_row_zero_per_line() {
        assert!(matches!(
            emit_chord_row(&chords(&["C"]), 0),
            Err(Error::InvalidBatchSize)
        ));
    }

    #[test]
    fn test_emit_chord_row_propagates_key_lookup() {
        assert!(matches!(
            emit_chord_row(&chords(&["C", "A5"]), 5),
            Err(Error::KeyLookup(_))
        ));
    }

    #[test]
    fn test_emit_definitions() {
        let catalog = ChordCatalog::parse("[A]\nm = 002210\n7 = 020200\n", false).unwrap();
        assert_eq!(
            emit_definitions(&catalog).unwrap(),
            "\\newcommand{\\printAm}{\\gtab{Am}{002210}}\n\
             \\newcommand{\\printAseven}{\\gtab{A7}{020200}}"
        );
    }

    #[test]
    fn test_emit_definitions_colliding_names_keep_last() {
        let catalog = ChordCatalog::parse("[C]\nM = 032010\nmaj = 032013\nm = 335543\n", false)
            .unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            emit_definitions(&catalog).unwrap(),
            "\\newcommand{\\printC}{\\gtab{C}{032013}}\n\
             \\newcommand{\\printCm}{\\gtab{Cm}{335543}}"
        );
    }
}
