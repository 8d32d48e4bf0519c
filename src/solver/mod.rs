//! Puzzle solver
//!
//! Brute-force search over every ordered selection of one to four tiles. With
//! at most 20 tiles that is 123,520 candidates, each checked with one trie
//! lookup.

pub mod combinatorics;
pub mod puzzle;

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::dictionary::PrefixTree;

pub use combinatorics::{candidate_count, Combinations, Permutations};
pub use puzzle::{parse, validate, Puzzle, Validation, MAX_TILES, MAX_TILE_LEN};

/// Answers never use more than four tiles
pub const MAX_TILES_PER_WORD: usize = 4;

/// Result of a solve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Distinct words found, ascending
    pub words: Vec<String>,
    /// Candidates checked, including repeated spellings
    pub permutations_checked: usize,
}

/// Solves puzzles against a shared, read-only dictionary
#[derive(Debug, Clone, Copy)]
pub struct PuzzleSolver<'a> {
    dictionary: &'a PrefixTree,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(dictionary: &'a PrefixTree) -> Self {
        Self { dictionary }
    }

    pub fn solve(&self, puzzle: &Puzzle) -> Solution {
        self.solve_tiles(puzzle.tiles())
    }

    /// Solves an arbitrary tile list. Never fails: an empty list, or one with
    /// no matches, yields an empty word list.
    pub fn solve_tiles<S: AsRef<str>>(&self, tiles: &[S]) -> Solution {
        let mut found = BTreeSet::new();
        let mut permutations_checked = 0;
        let mut candidate = String::new();

        for size in 1..=MAX_TILES_PER_WORD.min(tiles.len()) {
            let mut combinations = Combinations::new(tiles.len(), size);
            let mut orderings = Permutations::new(size);

            while let Some(selection) = combinations.advance() {
                orderings.reset();
                while let Some(order) = orderings.advance() {
                    candidate.clear();
                    for &slot in order {
                        candidate.push_str(tiles[selection[slot]].as_ref());
                    }
                    permutations_checked += 1;

                    if !self.dictionary.contains(&candidate) {
                        trace!(candidate = %candidate, "not in dictionary");
                    } else if !found.contains(&candidate) {
                        debug!(word = %candidate, "found word");
                        found.insert(candidate.clone());
                    }
                }
            }
        }

        debug!(
            tiles = tiles.len(),
            words = found.len(),
            permutations_checked,
            "puzzle solved"
        );

        Solution {
            words: found.into_iter().collect(),
            permutations_checked,
        }
    }
}

/// Finds every word buildable from one to four of `tiles`
pub fn solve<S: AsRef<str>>(tiles: &[S], dictionary: &PrefixTree) -> Solution {
    PuzzleSolver::new(dictionary).solve_tiles(tiles)
}
