//! This module contains some error and result definitions used in this crate.

use crate::solver::Solution;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

/// Errors that can occur when building or querying a
/// [Grid](../grid/struct.Grid.html).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that a grid was created with zero rows or zero columns.
    InvalidDimensions,

    /// Indicates that a grid was created with more cells than can be
    /// addressed.
    TooLarge {

        /// The requested number of rows.
        rows: usize,

        /// The requested number of columns.
        columns: usize
    },

    /// Indicates that the specified coordinates lie outside the grid in
    /// question.
    OutOfBounds {

        /// The row that was requested.
        row: usize,

        /// The column that was requested.
        column: usize
    },

    /// Indicates that two cells with the same coordinates were provided when
    /// creating a grid.
    DuplicateCell {

        /// The row of the duplicated cell.
        row: usize,

        /// The column of the duplicated cell.
        column: usize
    }
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions =>
                write!(f, "grid must have at least one row and one column"),
            GridError::TooLarge { rows, columns } =>
                write!(f, "grid of {}x{} cells is too large", rows, columns),
            GridError::OutOfBounds { row, column } =>
                write!(f, "cell ({}, {}) lies outside the grid", row, column),
            GridError::DuplicateCell { row, column } =>
                write!(f, "cell ({}, {}) is defined more than once", row, column)
        }
    }
}

impl Error for GridError { }

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// Errors that are detected while assembling a
/// [Puzzle](../struct.Puzzle.html), before any search begins.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// The grid could not be built.
    Grid(GridError),

    /// A clue or the victim references a person that is not part of the
    /// puzzle.
    UnknownPerson(String),

    /// A clue references a room that does not exist in the grid.
    UnknownRoom(String),

    /// The victim is not listed among the people.
    VictimNotAPerson(String),

    /// The same person is listed twice.
    DuplicatePerson(String),

    /// An `at_column` clue names a column outside the grid.
    ColumnOutOfBounds {

        /// The person the clue is about.
        person: String,

        /// The requested column.
        column: usize
    },

    /// There are more people than rows or columns, so no placement can put
    /// every person in a distinct row and column.
    TooManyPeople {

        /// The number of people in the puzzle.
        people: usize,

        /// The number of rows of the grid.
        rows: usize,

        /// The number of columns of the grid.
        columns: usize
    }
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Grid(e) => write!(f, "invalid grid: {}", e),
            PuzzleError::UnknownPerson(person) =>
                write!(f, "unknown person {:?}", person),
            PuzzleError::UnknownRoom(room) =>
                write!(f, "unknown room {:?}", room),
            PuzzleError::VictimNotAPerson(victim) =>
                write!(f, "victim {:?} is not listed among the people", victim),
            PuzzleError::DuplicatePerson(person) =>
                write!(f, "person {:?} is listed more than once", person),
            PuzzleError::ColumnOutOfBounds { person, column } =>
                write!(f, "column {} required for {:?} lies outside the grid",
                    column, person),
            PuzzleError::TooManyPeople { people, rows, columns } =>
                write!(f, "{} people do not fit into a grid with {} rows and \
                    {} columns", people, rows, columns)
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PuzzleError::Grid(e) => Some(e),
            _ => None
        }
    }
}

impl From<GridError> for PuzzleError {
    fn from(e: GridError) -> Self {
        PuzzleError::Grid(e)
    }
}

/// Syntactic sugar for `Result<V, PuzzleError>`.
pub type PuzzleResult<V> = Result<V, PuzzleError>;

/// The two ways a complete search can fail to produce a unique answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveError {

    /// No placement satisfies all clues and the murder rule.
    NoSolution {

        /// The number of clues of the puzzle.
        clues: usize,

        /// The number of complete placements that were evaluated.
        placements: usize
    },

    /// More than one placement satisfies everything. Every discovered
    /// solution is contained, so the ambiguity can be inspected.
    MultipleSolutions(Vec<Solution>)
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoSolution { clues, placements } =>
                write!(f, "no placement satisfies all {} clues ({} complete \
                    placements evaluated)", clues, placements),
            SolveError::MultipleSolutions(solutions) => {
                write!(f, "puzzle has {} solutions (expected exactly 1):",
                    solutions.len())?;

                for (i, solution) in solutions.iter().enumerate() {
                    write!(f, "\n  solution {}: {}", i + 1, solution)?;
                }

                Ok(())
            }
        }
    }
}

impl Error for SolveError { }

/// Syntactic sugar for `Result<V, SolveError>`.
pub type SolveResult<V> = Result<V, SolveError>;

/// An enumeration of the errors that may occur when loading a puzzle file.
#[derive(Debug)]
pub enum LoadError {

    /// The file could not be read.
    Io(io::Error),

    /// The file is not a well-formed puzzle document. This includes unknown
    /// clue types, unknown object names and missing or mistyped clue
    /// arguments.
    Json(serde_json::Error),

    /// The document is well-formed, but describes an invalid puzzle.
    Puzzle(PuzzleError)
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read puzzle: {}", e),
            LoadError::Json(e) => write!(f, "malformed puzzle: {}", e),
            LoadError::Puzzle(e) => write!(f, "invalid puzzle: {}", e)
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            LoadError::Puzzle(e) => Some(e)
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<PuzzleError> for LoadError {
    fn from(e: PuzzleError) -> Self {
        LoadError::Puzzle(e)
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        LoadError::Puzzle(PuzzleError::Grid(e))
    }
}

/// Syntactic sugar for `Result<V, LoadError>`.
pub type LoadResult<V> = Result<V, LoadError>;
