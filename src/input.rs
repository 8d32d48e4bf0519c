//! Reading puzzle tiles from files, arguments or stdin

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::InputError;
use crate::solver::parse;

/// Where a puzzle's tiles come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// One tile per line
    File(PathBuf),
    /// Tiles passed directly
    Inline(Vec<String>),
    /// One tile per line on standard input
    Stdin,
}

impl PuzzleSource {
    /// Reads and normalizes the tiles. `stdin` is only touched for
    /// [`PuzzleSource::Stdin`].
    pub fn read_tiles<R: Read>(&self, mut stdin: R) -> Result<Vec<String>, InputError> {
        match self {
            PuzzleSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| InputError::PuzzleFile {
                    path: path.clone(),
                    source,
                })?;
                let tiles = parse(&text);
                if tiles.is_empty() {
                    return Err(InputError::EmptyPuzzle(path.clone()));
                }
                Ok(tiles)
            }
            PuzzleSource::Inline(tiles) => Ok(parse(&tiles.join("\n"))),
            PuzzleSource::Stdin => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .map_err(InputError::Stdin)?;
                Ok(parse(&text))
            }
        }
    }
}

impl fmt::Display for PuzzleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleSource::File(path) => write!(f, "{}", path.display()),
            PuzzleSource::Inline(_) => write!(f, "arguments"),
            PuzzleSource::Stdin => write!(f, "stdin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};

    #[test]
    fn test_read_file() {
        let test_file = "test_puzzle_input.txt";
        let mut file = fs::File::create(test_file).unwrap();
        writeln!(file, "  DIS ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "cre").unwrap();
        drop(file);

        let source = PuzzleSource::File(PathBuf::from(test_file));
        let tiles = source.read_tiles(io::empty()).unwrap();
        assert_eq!(tiles, vec!["dis", "cre"]);
        assert_eq!(source.to_string(), test_file);

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_empty_file() {
        let test_file = "test_puzzle_empty.txt";
        fs::write(test_file, "\n   \n").unwrap();

        let err = PuzzleSource::File(PathBuf::from(test_file))
            .read_tiles(io::empty())
            .unwrap_err();
        assert!(matches!(err, InputError::EmptyPuzzle(_)));

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = PuzzleSource::File(PathBuf::from("no/such/puzzle.txt"))
            .read_tiles(io::empty())
            .unwrap_err();
        assert!(matches!(err, InputError::PuzzleFile { .. }));
    }

    #[test]
    fn test_inline_and_stdin() {
        let inline = PuzzleSource::Inline(vec!["AB".to_string(), " cd ".to_string()]);
        assert_eq!(inline.read_tiles(io::empty()).unwrap(), vec!["ab", "cd"]);

        let stdin = PuzzleSource::Stdin;
        let tiles = stdin.read_tiles("qu\nar\n\ntiles\n".as_bytes()).unwrap();
        assert_eq!(tiles, vec!["qu", "ar", "tiles"]);
    }
}
