use std::{fs, path::Path};

use clap::Parser;
use serde::Serialize;
use tracing::info;

use gridlock::{
    error::{Error, Result},
    solver::{
        board::Board,
        engine::SolverEngine,
        stats::{render_stats_table, SearchStats},
    },
};

/// Solve 9x9 Sudoku boards with AC-3 propagation and backtracking search.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// An 81-character puzzle (digits 0-9, 0 for a blank), or a path to a
    /// file with one puzzle per line.
    puzzle: String,

    /// Write results to this file instead of stdout.
    #[arg(short, long)]
    output: Option<String>,

    /// Render each solved board as a grid on stderr.
    #[arg(long)]
    pretty: bool,

    /// Print a table of solver statistics on stderr.
    #[arg(long)]
    stats: bool,

    /// Emit one JSON object per puzzle instead of plain lines.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    puzzle: &'a str,
    solution: Option<String>,
    method: Option<&'static str>,
    stats: &'a SearchStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let puzzles = gather_puzzles(&args.puzzle)?;
    let engine = SolverEngine::default();

    let mut lines = Vec::with_capacity(puzzles.len());
    for puzzle in &puzzles {
        let board = Board::parse(puzzle)?;
        let (solved, stats) = engine.solve(board);

        if args.json {
            let result = JsonResult {
                puzzle,
                solution: solved.as_ref().map(|s| s.digits()),
                method: solved.as_ref().map(|s| s.method().tag()),
                stats: &stats,
            };
            lines.push(serde_json::to_string(&result).expect("stats and strings serialize"));
        } else {
            lines.push(match &solved {
                Some(solved) => solved.to_string(),
                None => String::from("UNSOLVABLE"),
            });
        }

        if args.pretty {
            if let Some(solved) = &solved {
                eprintln!("{}", solved.pretty());
            }
        }
        if args.stats {
            eprintln!("{}", render_stats_table(&stats));
        }
    }

    let body = lines.join("\n") + "\n";
    match &args.output {
        Some(path) => {
            fs::write(path, body).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path, count = puzzles.len(), "wrote results");
        }
        None => print!("{body}"),
    }

    Ok(())
}

/// Treats the argument as a literal puzzle when it looks like one, and as
/// a path to a file of puzzles (one per line, blank lines skipped)
/// otherwise.
fn gather_puzzles(input: &str) -> Result<Vec<String>> {
    let looks_like_puzzle = input.len() == 81 && input.bytes().all(|b| b.is_ascii_digit());
    if looks_like_puzzle || !Path::new(input).exists() {
        return Ok(vec![input.to_owned()]);
    }

    let contents = fs::read_to_string(input).map_err(|source| Error::Io {
        path: input.to_owned(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
