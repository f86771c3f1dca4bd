pub mod buildinfo;
pub mod chords;
pub mod config;
pub mod insert;
pub mod songlist;

pub use buildinfo::make_buildinfo;
pub use chords::make_chords;
pub use insert::insert_chords;
pub use songlist::make_song_list;
