use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "songbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print a LaTeX `\input` command for each song in a directory
    ///
    /// Only `.tex` files directly inside the directory are listed, sorted by
    /// file name.
    #[command(name = "makesonglist")]
    MakeSongList {
        /// Where the .tex files are located
        songdir: PathBuf,
    },
    /// Print a LaTeX command showing finger positions for each chord of an instrument
    ///
    /// The instrument file has one `[Root]` section per note and one
    /// `suffix = digits` entry per chord, one digit per string. An entry
    /// `m = 002210` in section `[A]` becomes
    /// `\newcommand{\printAm}{\gtab{Am}{002210}}`.
    #[command(name = "makechords")]
    MakeChords {
        /// An ini file with chords & finger positions
        instrument_file: PathBuf,

        /// Do not define chords rooted on a sharp under their flat name too
        #[arg(long)]
        no_aliases: bool,
    },
    /// Detect chords in a song and insert commands printing their finger positions under the title
    #[command(name = "insertchords")]
    InsertChords {
        /// The song file to insert chords into (not modified)
        song: PathBuf,

        /// The number of chords to print per line
        #[arg(short = 'n', long)]
        chords_per_line: Option<usize>,
    },
    /// Print a LaTeX `\date` command with the current date and repository state
    #[command(name = "makebuildinfo")]
    MakeBuildInfo,
    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    logging::init(&config.logging, cli.verbose)?;
    log::debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::MakeSongList { songdir } => {
            commands::make_song_list(songdir)?;
        }
        Commands::MakeChords {
            instrument_file,
            no_aliases,
        } => {
            let expand_aliases = config.expand_aliases && !no_aliases;
            commands::make_chords(instrument_file, expand_aliases)?;
        }
        Commands::InsertChords {
            song,
            chords_per_line,
        } => {
            let per_line = chords_per_line.unwrap_or(config.chords_per_line);
            commands::insert_chords(song, per_line)?;
        }
        Commands::MakeBuildInfo => {
            commands::make_buildinfo()?;
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Show => commands::config::show_config()?,
            ConfigCommand::Path => commands::config::show_path()?,
            ConfigCommand::Example => commands::config::show_example()?,
            ConfigCommand::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
