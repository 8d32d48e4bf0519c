//! Dictionary module
//!
//! Prefix tree storage plus the pipeline that fills it from a lexicon.

pub mod lexicon;
pub mod loader;
pub mod trie;

pub use lexicon::{LexiconEntry, PartOfSpeech};
pub use loader::{Dictionary, DictionaryBuilder, LoadStats};
pub use trie::PrefixTree;
