//! Puzzle input: parsing and validation

use crate::error::PuzzleError;

/// Most tiles a puzzle may have
pub const MAX_TILES: usize = 20;
/// Longest tile, in characters
pub const MAX_TILE_LEN: usize = 10;

/// Outcome of [`validate`]: `ok` plus a message that is empty when valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub ok: bool,
    pub message: String,
}

impl Validation {
    fn valid() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

/// Checks a tile list against the puzzle limits
pub fn validate<S: AsRef<str>>(tiles: &[S]) -> Validation {
    if tiles.is_empty() {
        return Validation::invalid("No tiles entered");
    }

    if tiles.len() > MAX_TILES {
        return Validation::invalid(format!("Too many tiles (maximum {})", MAX_TILES));
    }

    for tile in tiles {
        let tile = tile.as_ref();
        if tile.trim().is_empty() {
            return Validation::invalid("Empty tile found");
        }
        if tile.chars().count() > MAX_TILE_LEN {
            return Validation::invalid(format!(
                "Tile '{}' is too long (maximum {} characters)",
                tile, MAX_TILE_LEN
            ));
        }
    }

    Validation::valid()
}

/// Splits raw input into tiles: one per line, trimmed and lower-cased, blank
/// lines dropped
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A validated, ordered list of tiles. Tiles with the same text at different
/// positions are distinct tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    tiles: Vec<String>,
}

impl Puzzle {
    pub fn new(tiles: Vec<String>) -> Result<Self, PuzzleError> {
        let validation = validate(&tiles);
        if !validation.ok {
            return Err(PuzzleError::Invalid(validation.message));
        }
        Ok(Self { tiles })
    }

    /// Parses and validates raw input
    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        Self::new(parse(text))
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed puzzle
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
