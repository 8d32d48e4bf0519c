use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context};
use serde::Serialize;
use tracing::info;

use quartiles::input::PuzzleSource;
use quartiles::{Config, Dictionary, DictionaryBuilder, Puzzle, PuzzleSolver, Solution};

/// One solved puzzle, as printed
#[derive(Debug, Serialize)]
struct PuzzleReport {
    source: String,
    tiles: Vec<String>,
    #[serde(flatten)]
    solution: Solution,
    elapsed_ms: u128,
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    if !config.json {
        println!(
            "Loading dictionary from: {}",
            config.dictionary_path.display()
        );
    }

    let load_start = Instant::now();
    let dictionary = Arc::new(DictionaryBuilder::load_from_file(&config.dictionary_path)?);
    info!(
        words = dictionary.word_count(),
        insertions = dictionary.insertions,
        elapsed_ms = load_start.elapsed().as_millis() as u64,
        "dictionary ready"
    );

    // Read everything up front so a bad puzzle fails before any solving starts
    let mut puzzles = Vec::new();
    for source in config.puzzle_sources() {
        let tiles = source.read_tiles(io::stdin().lock())?;
        let puzzle = Puzzle::new(tiles).with_context(|| format!("invalid puzzle in {}", source))?;
        puzzles.push((source, puzzle));
    }

    let reports = solve_all(&dictionary, puzzles)?;

    let stdout = io::stdout();
    write_reports(&mut stdout.lock(), &reports, config.json)?;

    Ok(())
}

/// Solves each puzzle on its own thread against the shared dictionary.
/// Reports come back in input order.
fn solve_all(
    dictionary: &Arc<Dictionary>,
    puzzles: Vec<(PuzzleSource, Puzzle)>,
) -> anyhow::Result<Vec<PuzzleReport>> {
    let handles: Vec<_> = puzzles
        .into_iter()
        .map(|(source, puzzle)| {
            let dictionary = Arc::clone(dictionary);
            thread::spawn(move || {
                let start = Instant::now();
                let solution = PuzzleSolver::new(&dictionary.tree).solve(&puzzle);
                PuzzleReport {
                    source: source.to_string(),
                    tiles: puzzle.tiles().to_vec(),
                    solution,
                    elapsed_ms: start.elapsed().as_millis(),
                }
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| {
            handle
                .join()
                .map_err(|_| anyhow!("solver thread panicked"))
        })
        .collect()
}

/// Writes the results as JSON (one object, or an array for several puzzles)
/// or as numbered word lists
fn write_reports<W: Write>(w: &mut W, reports: &[PuzzleReport], json: bool) -> anyhow::Result<()> {
    if json {
        if reports.len() == 1 {
            serde_json::to_writer_pretty(&mut *w, &reports[0])?;
        } else {
            serde_json::to_writer_pretty(&mut *w, reports)?;
        }
        writeln!(w)?;
    } else {
        let show_source = reports.len() > 1;
        for report in reports {
            write_report(w, report, show_source)?;
        }
    }
    Ok(())
}

fn write_report<W: Write>(w: &mut W, report: &PuzzleReport, show_source: bool) -> io::Result<()> {
    if show_source {
        writeln!(w)?;
        writeln!(w, "== {} ==", report.source)?;
    }

    if report.solution.words.is_empty() {
        writeln!(w, "No words found for this puzzle.")?;
    } else {
        for (i, word) in report.solution.words.iter().enumerate() {
            writeln!(w, "{:2}. {}", i + 1, word)?;
        }
    }

    writeln!(
        w,
        "Found {} words ({} permutations checked) in {}ms",
        report.solution.words.len(),
        report.solution.permutations_checked,
        report.elapsed_ms
    )
}
