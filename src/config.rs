//! Configuration and CLI arguments

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::input::PuzzleSource;

/// Finds every word that can be built from one to four puzzle tiles.
#[derive(Parser, Debug)]
#[command(name = "quartiles", version, about)]
struct Cli {
    /// Tiles to solve, one per argument (read from stdin when omitted)
    #[arg(value_name = "TILES")]
    tiles: Vec<String>,

    /// WordNet Prolog lexicon (wn_s.pl)
    #[arg(short, long, value_name = "PATH", default_value = "prolog/wn_s.pl")]
    dictionary: PathBuf,

    /// Puzzle file with one tile per line; may be repeated
    #[arg(short, long = "puzzle", value_name = "PATH")]
    puzzles: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lexicon file
    pub dictionary_path: PathBuf,
    /// Puzzle files, solved in order
    pub puzzle_files: Vec<PathBuf>,
    /// Tiles given on the command line
    pub tiles: Vec<String>,
    /// JSON output instead of the numbered list
    pub json: bool,
    /// Enables debug-level logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("prolog/wn_s.pl"),
            puzzle_files: Vec::new(),
            tiles: Vec::new(),
            json: false,
            debug: false,
        }
    }
}

impl Config {
    fn from_cli(cli: Cli) -> Self {
        Self {
            dictionary_path: cli.dictionary,
            puzzle_files: cli.puzzles,
            tiles: cli.tiles,
            json: cli.json,
            debug: cli.debug,
        }
    }

    /// Parses command-line arguments, program name first
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Config::from_cli)
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Where to read tiles from: puzzle files win over inline tiles, and stdin
    /// is used when neither is given
    pub fn puzzle_sources(&self) -> Vec<PuzzleSource> {
        if !self.puzzle_files.is_empty() {
            self.puzzle_files
                .iter()
                .cloned()
                .map(PuzzleSource::File)
                .collect()
        } else if !self.tiles.is_empty() {
            vec![PuzzleSource::Inline(self.tiles.clone())]
        } else {
            vec![PuzzleSource::Stdin]
        }
    }
}
