//! Quartiles - word-tile puzzle solver
//!
//! Builds a prefix-tree dictionary from a WordNet lexicon, adding regular
//! plurals and verb forms, then finds every word that can be spelled by
//! joining one to four puzzle tiles.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod morphology;
pub mod solver;

pub use config::Config;
pub use dictionary::{Dictionary, DictionaryBuilder, PrefixTree};
pub use error::{DictionaryError, InputError, PuzzleError};
pub use morphology::{plural, verb_forms};
pub use solver::{parse, solve, validate, Puzzle, PuzzleSolver, Solution, Validation};
