// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a solver for Murdoku puzzles. A Murdoku consists of
//! a grid which is partitioned into rooms and furnished with objects, a list
//! of people of which one is the victim of a murder, and a list of clues
//! about where the people stand. It supports the following key features:
//!
//! * Loading puzzles from JSON files
//! * A closed, introspectable catalog of clues
//! * Solving puzzles with a backtracking search that is pruned by a domain
//! reduction before it starts
//! * Reporting every solution of ambiguous puzzles
//!
//! # Rules
//!
//! Every person stands on a cell of the grid that is not blocked by an object
//! such as a plant or a table. No two people share a row and no two people
//! share a column. A solution must satisfy every clue, and the victim's room
//! must contain exactly one other person: the murderer.
//!
//! # Solving puzzles
//!
//! A [Puzzle] can be assembled in code, or loaded from a file with
//! [loader::load_puzzle]. Its clues are checked against the grid and people
//! when it is created. [Puzzle::solve] then uses the
//! [BacktrackingSolver](solver::BacktrackingSolver) to find the unique
//! solution.
//!
//! ```
//! use murdoku::Puzzle;
//! use murdoku::clue::Clue;
//! use murdoku::grid::{Cell, Grid, ObjectType};
//!
//! // ┌───┬───┬───┐
//! // │ a   a │ b │
//! // │       │   │
//! // │ a  bed│ b │
//! // ├───────┤   │
//! // │ c   c │ b │
//! // └───────┴───┘
//! let grid = Grid::from_layout(&[
//!     &["a", "a", "b"],
//!     &["a", "a", "b"],
//!     &["c", "c", "b"]
//! ]).unwrap()
//!     .with_cell(Cell::new(1, 1, "a", vec![ObjectType::Bed])).unwrap();
//! let people = vec!["Victor".to_owned(), "Alice".to_owned(),
//!     "Bob".to_owned()];
//! let clues = vec![
//!     Clue::in_room("Bob", "b", false),
//!     Clue::at_column("Alice", 0),
//!     Clue::on_object("Victor", ObjectType::Bed, false)
//! ];
//! let puzzle = Puzzle::new(grid, people, "Victor", clues).unwrap();
//! let solution = puzzle.solve().unwrap();
//!
//! assert_eq!("Alice", solution.murderer());
//! assert_eq!(Some((0, 0)), solution.position("Alice"));
//! ```
//!
//! If no placement satisfies everything, `SolveError::NoSolution` is
//! returned. If several do, `SolveError::MultipleSolutions` contains all of
//! them, so the author of the puzzle can find out which clue is missing.

pub mod clue;
pub mod error;
pub mod grid;
pub mod loader;
pub mod placement;
pub mod solver;
pub mod util;


use clue::Clue;
use error::{PuzzleError, PuzzleResult, SolveResult};
use grid::Grid;
use solver::{BacktrackingSolver, Solution, Solver};

use std::collections::HashSet;

/// A Murdoku puzzle: a grid, the people (including the victim) and the
/// clues. A puzzle can only be created if all clues refer to existing people
/// and rooms, so the solver can rely on that.
///
/// There is no guarantee that the puzzle is uniquely solveable or even
/// solveable at all, however there are ways to check that (see the [solver]
/// module).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Puzzle {
    grid: Grid,
    people: Vec<String>,
    victim: String,
    clues: Vec<Clue>
}

fn check_people(grid: &Grid, people: &[String], victim: &str)
        -> PuzzleResult<()> {
    let mut seen = HashSet::new();

    for person in people {
        if !seen.insert(person.as_str()) {
            return Err(PuzzleError::DuplicatePerson(person.clone()));
        }
    }

    if !seen.contains(victim) {
        return Err(PuzzleError::VictimNotAPerson(victim.to_owned()));
    }

    if people.len() > grid.rows() || people.len() > grid.columns() {
        return Err(PuzzleError::TooManyPeople {
            people: people.len(),
            rows: grid.rows(),
            columns: grid.columns()
        });
    }

    Ok(())
}

impl Puzzle {

    /// Creates a new puzzle.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid on which the people are placed.
    /// * `people`: The names of all people, including the victim. An
    /// `n`-person puzzle places its people on the first `n` rows.
    /// * `victim`: The name of the victim.
    /// * `clues`: The clues, in any order.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::DuplicatePerson` if a name occurs twice in `people`.
    /// * `PuzzleError::VictimNotAPerson` if `victim` is not in `people`.
    /// * `PuzzleError::TooManyPeople` if there are more people than rows or
    /// columns.
    /// * Any error of [Clue::validate] for the first invalid clue.
    pub fn new(grid: Grid, people: Vec<String>, victim: impl Into<String>,
            clues: Vec<Clue>) -> PuzzleResult<Puzzle> {
        let victim = victim.into();
        check_people(&grid, &people, &victim)?;

        for clue in &clues {
            clue.validate(&grid, &people)?;
        }

        Ok(Puzzle {
            grid,
            people,
            victim,
            clues
        })
    }

    /// Gets a reference to the grid of this puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The names of all people in the order they were given.
    pub fn people(&self) -> &[String] {
        &self.people
    }

    /// The name of the victim.
    pub fn victim(&self) -> &str {
        &self.victim
    }

    /// All clues of this puzzle.
    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// The index of the given person in [Puzzle::people], or `None` if they
    /// are not part of this puzzle.
    pub fn index_of(&self, person: &str) -> Option<usize> {
        self.people.iter().position(|p| p == person)
    }

    /// Adds another clue to this puzzle.
    ///
    /// # Errors
    ///
    /// Any error of [Clue::validate]. In that case, the puzzle is unchanged.
    pub fn add_clue(&mut self, clue: Clue) -> PuzzleResult<()> {
        clue.validate(&self.grid, &self.people)?;
        self.clues.push(clue);
        Ok(())
    }

    /// Solves this puzzle using a [BacktrackingSolver].
    ///
    /// # Errors
    ///
    /// * `SolveError::NoSolution` if no placement satisfies everything.
    /// * `SolveError::MultipleSolutions` if more than one does.
    pub fn solve(&self) -> SolveResult<Solution> {
        BacktrackingSolver.solve(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::error::SolveError;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    fn grid() -> Grid {
        Grid::from_layout(&[
            &["hall", "hall", "study"],
            &["hall", "hall", "study"],
            &["hall", "hall", "study"]
        ]).unwrap()
    }

    #[test]
    fn new_accepts_valid_puzzle() {
        let puzzle = Puzzle::new(grid(), names(&["Ann", "Ben"]), "Ben",
            vec![Clue::in_room("Ann", "study", false)]).unwrap();

        assert_eq!("Ben", puzzle.victim());
        assert_eq!(Some(1), puzzle.index_of("Ben"));
        assert_eq!(None, puzzle.index_of("Cid"));
        assert_eq!(1, puzzle.clues().len());
    }

    #[test]
    fn victim_must_be_a_person() {
        assert_eq!(Err(PuzzleError::VictimNotAPerson("Vic".to_owned())),
            Puzzle::new(grid(), names(&["Ann", "Ben"]), "Vic", Vec::new()));
    }

    #[test]
    fn people_must_be_unique() {
        assert_eq!(Err(PuzzleError::DuplicatePerson("Ann".to_owned())),
            Puzzle::new(grid(), names(&["Ann", "Ben", "Ann"]), "Ben",
                Vec::new()));
    }

    #[test]
    fn people_must_fit_into_grid() {
        assert_eq!(Err(PuzzleError::TooManyPeople {
            people: 4,
            rows: 3,
            columns: 3
        }), Puzzle::new(grid(), names(&["Ann", "Ben", "Cid", "Dan"]), "Ben",
            Vec::new()));
    }

    #[test]
    fn clues_are_validated() {
        assert_eq!(Err(PuzzleError::UnknownRoom("attic".to_owned())),
            Puzzle::new(grid(), names(&["Ann", "Ben"]), "Ben",
                vec![Clue::in_room("Ann", "attic", false)]));
        assert_eq!(Err(PuzzleError::UnknownPerson("Cid".to_owned())),
            Puzzle::new(grid(), names(&["Ann", "Ben"]), "Ben",
                vec![Clue::with_person("Ann", "Cid", false)]));
    }

    #[test]
    fn add_clue_validates() {
        let mut puzzle =
            Puzzle::new(grid(), names(&["Ann", "Ben"]), "Ben", Vec::new())
                .unwrap();

        assert_eq!(Err(PuzzleError::ColumnOutOfBounds {
            person: "Ann".to_owned(),
            column: 3
        }), puzzle.add_clue(Clue::at_column("Ann", 3)));
        assert!(puzzle.clues().is_empty());

        puzzle.add_clue(Clue::at_column("Ann", 2)).unwrap();
        assert_eq!(1, puzzle.clues().len());
    }

    #[test]
    fn adding_clues_resolves_ambiguity() {
        let mut puzzle =
            Puzzle::new(grid(), names(&["Ann", "Ben"]), "Ben", Vec::new())
                .unwrap();

        match puzzle.solve() {
            Err(SolveError::MultipleSolutions(solutions)) =>
                assert!(solutions.len() > 1),
            other => panic!("expected ambiguous puzzle, got {:?}", other)
        }

        puzzle.add_clue(Clue::at_column("Ann", 0)).unwrap();
        puzzle.add_clue(Clue::below_person("Ann", "Ben")).unwrap();
        puzzle.add_clue(Clue::in_room("Ben", "hall", false)).unwrap();
        let solution = puzzle.solve().unwrap();

        assert_eq!(Some((1, 0)), solution.position("Ann"));
        assert_eq!(Some((0, 1)), solution.position("Ben"));
        assert_eq!("Ann", solution.murderer());
    }
}
