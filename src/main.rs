use clap::{ArgAction, Parser};

use log::{error, info, LevelFilter, SetLoggerError};

use murdoku::Puzzle;
use murdoku::error::{SolveError, SolveResult};
use murdoku::loader;
use murdoku::solver::Solution;

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

const EXIT_LOAD_ERROR: i32 = 1;
const EXIT_NO_SOLUTION: i32 = 2;
const EXIT_MULTIPLE_SOLUTIONS: i32 = 3;

/// Solves a Murdoku puzzle and names the murderer.
#[derive(Parser, Debug)]
#[command(name = "murdoku", version, about)]
struct Cli {

    /// Path to a JSON puzzle file.
    puzzle: PathBuf,

    /// Increases the log verbosity. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only logs errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Prints the solution, or every solution of an ambiguous puzzle, as
    /// JSON.
    #[arg(long)]
    json: bool
}

impl Cli {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace
        }
    }
}

fn setup_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(),
                record.target(), message))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}

/// Labels a column like a spreadsheet: A to Z, then AA, AB and so on.
fn column_label(column: usize) -> String {
    let mut label = Vec::new();
    let mut rest = column + 1;

    while rest > 0 {
        rest -= 1;
        label.push((b'A' + (rest % 26) as u8) as char);
        rest /= 26;
    }

    label.iter().rev().collect()
}

fn format_solution(solution: &Solution, puzzle: &Puzzle) -> String {
    let mut text = String::new();

    for (person, &(row, column)) in solution.positions() {
        let (room, objects) = match puzzle.grid().get_cell(row, column) {
            Ok(cell) => {
                let objects = cell.objects().iter()
                    .map(|o| o.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                (cell.room(), objects)
            },
            Err(_) => ("?", String::new())
        };
        let objects = if objects.is_empty() { "empty".to_owned() } else { objects };
        let position = format!("{}{}", column_label(column), row);

        text.push_str(&format!("  {:<10} {:<4} room={}  ({})\n", person,
            position, room, objects));
    }

    text.push_str(&format!("\n  Murderer: {}", solution.murderer()));
    text
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            error!("could not serialize result: {}", e);
            String::new()
        }
    }
}

/// Maps the result of solving `puzzle` to the exit status and the text
/// printed on stdout.
fn report(result: SolveResult<Solution>, puzzle: &Puzzle, json: bool,
        elapsed: Duration) -> (i32, String) {
    let seconds = elapsed.as_secs_f64();

    match result {
        Ok(solution) => {
            let text = if json {
                to_json(&solution)
            }
            else {
                format!("=== Murdoku Solved ===\n\n{}\n\n  Solved in {:.3}s",
                    format_solution(&solution, puzzle), seconds)
            };

            (0, text)
        },
        Err(SolveError::MultipleSolutions(solutions)) => {
            if json {
                return (EXIT_MULTIPLE_SOLUTIONS, to_json(&solutions));
            }

            let mut text = format!("[MULTIPLE SOLUTIONS] {} solutions  ({:.3}s)",
                solutions.len(), seconds);

            for (i, solution) in solutions.iter().enumerate() {
                text.push_str(&format!("\n\n--- Solution {} ---\n{}", i + 1,
                    format_solution(solution, puzzle)));
            }

            (EXIT_MULTIPLE_SOLUTIONS, text)
        },
        Err(e @ SolveError::NoSolution { .. }) =>
            (EXIT_NO_SOLUTION, format!("[NO SOLUTION] {}  ({:.3}s)", e, seconds))
    }
}

fn run(cli: &Cli) -> i32 {
    let puzzle = match loader::load_puzzle(&cli.puzzle) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            error!("{}: {}", cli.puzzle.display(), e);
            return EXIT_LOAD_ERROR;
        }
    };

    for clue in puzzle.clues() {
        info!("clue: {}", clue);
    }

    let start = Instant::now();
    let result = puzzle.solve();
    let elapsed = start.elapsed();
    info!("search took {:.3}s", elapsed.as_secs_f64());

    let (code, text) = report(result, &puzzle, cli.json, elapsed);
    println!("{}", text);
    code
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.level()) {
        eprintln!("could not initialize logging: {}", e);
    }

    process::exit(run(&cli));
}
