//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while building the dictionary. Construction either succeeds
/// completely or returns one of these.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("could not open dictionary file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading dictionary at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// A tile list that did not pass validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("{0}")]
    Invalid(String),
}

/// Failures while reading puzzle tiles from the outside world
#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read puzzle file '{}': {source}", .path.display())]
    PuzzleFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read tiles from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("puzzle file '{}' is empty", .0.display())]
    EmptyPuzzle(PathBuf),
}
