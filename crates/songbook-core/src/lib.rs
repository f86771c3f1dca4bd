//! Chord model and LaTeX generation for songbooks.
//!
//! This crate parses chord names (`Am7`, `F#dim`), loads per-instrument
//! fingering tables, finds the chords used in a song and writes the LaTeX
//! macros that print chord diagrams with the `songs` package.
//!
//! # Example
//!
//! ```
//! use songbook_core::{latex, song, ChordCatalog};
//!
//! let catalog = ChordCatalog::parse("[A]\nm = 002210\n", true).unwrap();
//! assert_eq!(
//!     latex::emit_definitions(&catalog).unwrap(),
//!     r"\newcommand{\printAm}{\gtab{Am}{002210}}"
//! );
//!
//! let chords = song::find_chords(r"\[Am]Some \[C]words \[Am]here").unwrap();
//! assert_eq!(latex::emit_chord_row(&chords, 5).unwrap(), "\\printAm\n\\printC");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod buildinfo;
pub mod catalog;
pub mod error;
pub mod latex;
pub mod model;
pub mod song;
pub mod songlist;

pub use catalog::ChordCatalog;
pub use error::{Error, Result};
pub use model::{Chord, NoteName, NoteQuality};
