//! End-to-end tests: instrument file → definitions, song file → chord row.

use std::fs;

use songbook_core::{latex, song, songlist, Chord, ChordCatalog, Error};
use tempfile::TempDir;

const UKULELE: &str = "\
# Ukulele, GCEA tuning

[A]
M = 2100
m = 2000
7 = 0100

[C]
M = 0003
maj7 = 0002

[F#]
m = 2120
";

const SONG: &str = r"\beginsong{Riptide}[by={Vance Joy}]
\beginverse
\[Am]I was scared of \[G]dentists and the \[C]dark
\[Am]I was scared of \[G]pretty girls and \[C]starting conversations
\endverse
\endsong
";

#[test]
fn test_instrument_file_to_definitions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ukulele.ini");
    fs::write(&path, UKULELE).unwrap();

    let catalog = ChordCatalog::load_path(&path, true).unwrap();
    assert_eq!(catalog.len(), 7);

    let definitions = latex::emit_definitions(&catalog).unwrap();
    let lines: Vec<&str> = definitions.lines().collect();
    assert_eq!(
        lines,
        vec![
            r"\newcommand{\printA}{\gtab{A}{2100}}",
            r"\newcommand{\printAm}{\gtab{Am}{2000}}",
            r"\newcommand{\printAseven}{\gtab{A7}{0100}}",
            r"\newcommand{\printC}{\gtab{C}{0003}}",
            r"\newcommand{\printCmajseven}{\gtab{Cmaj7}{0002}}",
            r"\newcommand{\printFsharpm}{\gtab{F\#m}{2120}}",
            r"\newcommand{\printGbm}{\gtab{Gbm}{2120}}",
        ]
    );
}

#[test]
fn test_missing_instrument_file() {
    let dir = TempDir::new().unwrap();
    let result = ChordCatalog::load_path(&dir.path().join("missing.ini"), true);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_song_chords_are_defined_by_catalog() {
    let catalog = ChordCatalog::parse(UKULELE, true).unwrap();
    let chords = song::find_chords(SONG).unwrap();
    let names: Vec<String> = chords.iter().map(Chord::to_string).collect();
    assert_eq!(names, vec!["Am", "G", "C"]);

    let missing: Vec<&Chord> = chords.iter().filter(|c| !catalog.contains(c)).collect();
    assert_eq!(missing, vec![&Chord::parse("G").unwrap()]);
}

#[test]
fn test_insert_chord_row_in_song_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("riptide.tex");
    fs::write(&path, SONG).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let result = song::insert_chord_row(&text, 2).unwrap();

    let expected_head = "\\beginsong{Riptide}[by={Vance Joy}]\n\n\
                         \\printAm\n\\printG\n\\newline\n\\printC\n\\beginverse\n";
    assert!(result.starts_with(expected_head), "{result}");
    assert!(result.ends_with(SONG.split_once('\n').unwrap().1));
}

#[test]
fn test_song_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("riptide.tex"), SONG).unwrap();
    fs::write(dir.path().join("hallelujah.tex"), "").unwrap();
    fs::write(dir.path().join("ukulele.ini"), UKULELE).unwrap();

    let songs = songlist::list_songs(dir.path()).unwrap();
    let index = songlist::input_commands(&songs);
    let expected = format!(
        "\\input{{{}}}\n\\input{{{}}}",
        dir.path().join("hallelujah.tex").display(),
        dir.path().join("riptide.tex").display()
    );
    assert_eq!(index, expected);
}
