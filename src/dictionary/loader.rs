//! Dictionary construction from a lexicon stream

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace};

use super::lexicon::{LexiconEntry, PartOfSpeech};
use super::trie::PrefixTree;
use crate::error::DictionaryError;
use crate::morphology::{plural, verb_forms};

/// A built dictionary
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub tree: PrefixTree,
    /// Insertions performed while building, duplicates included.
    /// This is usually larger than `tree.count()`.
    pub insertions: usize,
}

impl Dictionary {
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// Distinct words in the tree
    pub fn word_count(&self) -> usize {
        self.tree.count()
    }
}

/// Counters collected while reading a lexicon
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub entries: usize,
    pub skipped_lines: usize,
    pub proper_nouns: usize,
}

/// Builds a [`Dictionary`] from lexicon lines, adding regular plurals for
/// nouns and past/participle forms for verbs.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    dictionary: Dictionary,
    stats: LoadStats,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a lexicon file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "loading dictionary");
        Self::load(BufReader::new(file))
    }

    /// Loads a lexicon from any buffered reader
    pub fn load<R: BufRead>(reader: R) -> Result<Dictionary, DictionaryError> {
        let mut builder = Self::new();
        builder.read_lines(reader)?;
        Ok(builder.finish())
    }

    /// Feeds every line of `reader` into the builder. A read error aborts the
    /// whole load.
    pub fn read_lines<R: BufRead>(&mut self, reader: R) -> Result<(), DictionaryError> {
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|source| DictionaryError::Read {
                line: index + 1,
                source,
            })?;
            self.add_line(&line);
        }
        Ok(())
    }

    /// Processes one lexicon line. Lines that are not entries are skipped.
    pub fn add_line(&mut self, line: &str) {
        self.stats.lines += 1;

        let entry = match LexiconEntry::parse(line) {
            Some(entry) => entry,
            None => {
                trace!(line, "skipping unparsable line");
                self.stats.skipped_lines += 1;
                return;
            }
        };

        if entry.is_proper_noun() {
            debug!(headword = entry.headword, "skipping proper noun");
            self.stats.proper_nouns += 1;
            return;
        }

        self.stats.entries += 1;
        self.add_word(&entry.headword.trim().to_lowercase(), entry.part_of_speech);
    }

    /// Inserts a normalized word and its derived forms
    pub fn add_word(&mut self, word: &str, part_of_speech: PartOfSpeech) {
        self.insert(word);

        match part_of_speech {
            PartOfSpeech::Noun => {
                self.insert(&plural(word));
            }
            PartOfSpeech::Verb => {
                let (past, participle) = verb_forms(word);
                self.insert(&past);
                self.insert(&participle);
            }
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite | PartOfSpeech::Adverb => {}
        }
    }

    fn insert(&mut self, word: &str) {
        self.dictionary.tree.insert(word);
        self.dictionary.insertions += 1;
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    pub fn finish(self) -> Dictionary {
        info!(
            lines = self.stats.lines,
            entries = self.stats.entries,
            skipped = self.stats.skipped_lines,
            proper_nouns = self.stats.proper_nouns,
            insertions = self.dictionary.insertions,
            words = self.dictionary.word_count(),
            nodes = self.dictionary.tree.node_count(),
            "dictionary built"
        );
        self.dictionary
    }
}
