pub mod chord;
pub mod note;
pub mod quality;

pub use chord::Chord;
pub use note::NoteName;
pub use quality::NoteQuality;
