//! This module contains the logic for solving Murdoku puzzles.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation. Before searching, the solver narrows down the cells of
//! every person with the [domain](domain/index.html) reduction.

pub mod domain;

use crate::Puzzle;
use crate::error::{SolveError, SolveResult};
use crate::placement::Placement;
use crate::solver::domain::Domains;
use crate::util::ColumnSet;

use itertools::Itertools;

use log::{debug, info, trace};

use serde::Serialize;

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// A solved puzzle: the `(row, column)` position of every person and the
/// murderer, i.e. the only other person in the victim's room.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Solution {
    positions: BTreeMap<String, (usize, usize)>,
    murderer: String
}

impl Solution {

    /// Creates a new solution from a map of positions and the murderer.
    pub fn new(positions: BTreeMap<String, (usize, usize)>,
            murderer: impl Into<String>) -> Solution {
        Solution {
            positions,
            murderer: murderer.into()
        }
    }

    fn from_placement(placement: &Placement<'_>, murderer: &str) -> Solution {
        let positions = placement.occupied_cells()
            .map(|(person, cell)|
                (person.to_owned(), (cell.row(), cell.column())))
            .collect();
        Solution::new(positions, murderer)
    }

    /// The positions of all people, ordered by name.
    pub fn positions(&self) -> &BTreeMap<String, (usize, usize)> {
        &self.positions
    }

    /// The `(row, column)` position of the given person, or `None` if they
    /// are not part of the puzzle.
    pub fn position(&self, person: &str) -> Option<(usize, usize)> {
        self.positions.get(person).copied()
    }

    /// The murderer.
    pub fn murderer(&self) -> &str {
        &self.murderer
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "murderer {}:", self.murderer)?;

        for (person, (row, column)) in &self.positions {
            write!(f, " {} at ({}, {})", person, row, column)?;
        }

        Ok(())
    }
}

/// Counters collected during a search. They are logged after every search
/// and reported in `SolveError::NoSolution`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {

    /// The number of row orders that were generated.
    pub row_orders: usize,

    /// The number of row orders rejected by ordering constraints before any
    /// column was assigned.
    pub pruned_row_orders: usize,

    /// The number of complete placements on which the clues were evaluated.
    pub placements: usize
}

/// Everything a complete search found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchReport {

    /// All placements satisfying every clue and the murder rule, in the
    /// order they were found.
    pub solutions: Vec<Solution>,

    /// The statistics of the search.
    pub stats: SearchStats
}

/// Classifies the result of a complete search.
///
/// # Errors
///
/// * `SolveError::NoSolution` if the report contains no solution.
/// * `SolveError::MultipleSolutions` with every solution if it contains more
/// than one.
pub fn finalize(report: SearchReport, clues: usize) -> SolveResult<Solution> {
    let SearchReport { mut solutions, stats } = report;

    match solutions.len() {
        0 => {
            info!("no solution after evaluating {} placements",
                stats.placements);
            Err(SolveError::NoSolution {
                clues,
                placements: stats.placements
            })
        },
        1 => {
            info!("found a unique solution");
            Ok(solutions.remove(0))
        },
        n => {
            info!("puzzle is ambiguous with {} solutions", n);
            Err(SolveError::MultipleSolutions(solutions))
        }
    }
}

/// A trait for structs which have the ability to solve Murdoku puzzles. A
/// solver enumerates every placement satisfying the clues of a puzzle and
/// the murder rule, i.e. the victim's room contains exactly one other person.
pub trait Solver {

    /// Searches the provided puzzle for all of its solutions.
    fn search(&self, puzzle: &Puzzle) -> SearchReport;

    /// Solves the provided puzzle.
    ///
    /// # Errors
    ///
    /// * `SolveError::NoSolution` if no placement satisfies everything.
    /// * `SolveError::MultipleSolutions` if more than one does. The error
    /// contains all of them.
    fn solve(&self, puzzle: &Puzzle) -> SolveResult<Solution> {
        finalize(self.search(puzzle), puzzle.clues().len())
    }
}

/// A perfect [Solver](trait.Solver.html) which enumerates all row orders and,
/// for each one, recursively assigns columns row by row. This means two
/// things:
///
/// * Its worst-case runtime is exponential in the number of people. Domain
/// reduction and ordering constraints prune most branches in practice.
/// * It finds every solution of any puzzle.
pub struct BacktrackingSolver;

struct Search<'a> {
    puzzle: &'a Puzzle,
    domains: &'a Domains,
    row_order: Vec<usize>,
    columns: Vec<usize>,
    solutions: Vec<Solution>,
    stats: SearchStats
}

impl<'a> Search<'a> {
    fn new(puzzle: &'a Puzzle, domains: &'a Domains) -> Search<'a> {
        Search {
            puzzle,
            domains,
            row_order: Vec::new(),
            columns: Vec::new(),
            solutions: Vec::new(),
            stats: SearchStats::default()
        }
    }

    fn run(&mut self) {
        let n = self.puzzle.people().len();

        for row_order in (0..n).permutations(n) {
            self.stats.row_orders += 1;

            if !self.domains.admits(&row_order) {
                self.stats.pruned_row_orders += 1;
                continue;
            }

            self.row_order = row_order;
            self.assign(0, ColumnSet::new());
        }
    }

    fn assign(&mut self, row: usize, used: ColumnSet) {
        if row == self.row_order.len() {
            self.evaluate();
            return;
        }

        let person = self.row_order[row];
        let allowed = self.domains.columns(person, row) - &used;

        for column in allowed.iter() {
            self.columns.push(column);
            self.assign(row + 1, used.with(column));
            self.columns.pop();
        }
    }

    fn evaluate(&mut self) {
        self.stats.placements += 1;
        let puzzle = self.puzzle;
        let placement = Placement::new(puzzle.grid(), puzzle.people(),
            self.row_order.clone(), self.columns.clone());

        if !puzzle.clues().iter().all(|clue| clue.evaluate(&placement)) {
            return;
        }

        let victim = puzzle.victim();
        let occupants = placement.people_in_room(placement.room_of(victim));

        if occupants.len() != 2 {
            return;
        }

        if let Some(murderer) = occupants.into_iter().find(|&p| p != victim) {
            let solution = Solution::from_placement(&placement, murderer);
            trace!("found solution: {}", solution);
            self.solutions.push(solution);
        }
    }
}

impl Solver for BacktrackingSolver {
    fn search(&self, puzzle: &Puzzle) -> SearchReport {
        let domains = Domains::reduce(puzzle);
        let mut search = Search::new(puzzle, &domains);

        if domains.is_infeasible() {
            debug!("some person has no candidate cell, skipping search");
        }
        else {
            search.run();
        }

        let stats = search.stats;
        debug!("tried {} row orders ({} pruned), evaluated {} placements, \
            found {} solutions", stats.row_orders, stats.pruned_row_orders,
            stats.placements, search.solutions.len());

        SearchReport {
            solutions: search.solutions,
            stats
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::clue::Clue;
    use crate::grid::{Cell, Grid, ObjectType};

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    fn single_room(size: usize) -> Grid {
        let row = vec!["room"; size];
        let layout = vec![row.as_slice(); size];
        Grid::from_layout(&layout).unwrap()
    }

    /// Rooms `a` (top left 2x2), `b` (right column) and `c` (bottom left)
    /// with a bed in the middle.
    fn mansion() -> Grid {
        Grid::from_layout(&[
            &["a", "a", "b"],
            &["a", "a", "b"],
            &["c", "c", "b"]
        ]).unwrap()
            .with_cell(Cell::new(1, 1, "a", vec![ObjectType::Bed])).unwrap()
    }

    fn mansion_puzzle(clues: Vec<Clue>) -> Puzzle {
        Puzzle::new(mansion(), names(&["Victor", "Alice", "Bob"]), "Victor",
            clues).unwrap()
    }

    fn positions(entries: &[(&str, usize, usize)])
            -> BTreeMap<String, (usize, usize)> {
        entries.iter()
            .map(|&(person, row, column)| (person.to_owned(), (row, column)))
            .collect()
    }

    #[test]
    fn backtracking_solves_unique_puzzle() {
        let puzzle = mansion_puzzle(vec![
            Clue::in_room("Bob", "b", false),
            Clue::at_column("Alice", 0),
            Clue::on_object("Victor", ObjectType::Bed, false)
        ]);
        let solution = BacktrackingSolver.solve(&puzzle).unwrap();

        assert_eq!("Alice", solution.murderer());
        assert_eq!(&positions(&[
            ("Alice", 0, 0),
            ("Bob", 2, 2),
            ("Victor", 1, 1)
        ]), solution.positions());
        assert_eq!(Some((2, 2)), solution.position("Bob"));
        assert_eq!(None, solution.position("Mallory"));
    }

    #[test]
    fn forced_cells_round_trip() {
        let puzzle = Puzzle::new(single_room(2), names(&["Alice", "Bob"]),
            "Alice", vec![
                Clue::at_column("Bob", 0),
                Clue::above_person("Bob", "Alice")
            ]).unwrap();
        let expected = Solution::new(positions(&[
            ("Alice", 1, 1),
            ("Bob", 0, 0)
        ]), "Bob");

        assert_eq!(Ok(expected), BacktrackingSolver.solve(&puzzle));
    }

    #[test]
    fn puzzle_without_clues_is_ambiguous() {
        let puzzle = Puzzle::new(single_room(2), names(&["Alice", "Victor"]),
            "Victor", Vec::new()).unwrap();

        match BacktrackingSolver.solve(&puzzle) {
            Err(SolveError::MultipleSolutions(solutions)) => {
                assert_eq!(4, solutions.len());
                assert!(solutions.iter().all(|s| s.murderer() == "Alice"));

                let mut distinct = solutions.clone();
                distinct.sort();
                distinct.dedup();
                assert_eq!(4, distinct.len());
            },
            other => panic!("expected ambiguous puzzle, got {:?}", other)
        }
    }

    #[test]
    fn lonely_victim_is_no_solution() {
        let puzzle = mansion_puzzle(vec![
            Clue::in_room("Alice", "c", false),
            Clue::in_room("Bob", "b", false),
            Clue::on_object("Victor", ObjectType::Bed, false)
        ]);

        assert_eq!(Err(SolveError::NoSolution {
            clues: 3,
            placements: 1
        }), BacktrackingSolver.solve(&puzzle));
    }

    #[test]
    fn crowded_room_is_no_solution() {
        let puzzle = Puzzle::new(single_room(3),
            names(&["Alice", "Bob", "Victor"]), "Victor", Vec::new()).unwrap();

        assert_eq!(Err(SolveError::NoSolution {
            clues: 0,
            placements: 36
        }), BacktrackingSolver.solve(&puzzle));
    }

    #[test]
    fn infeasible_domain_skips_search() {
        let puzzle = mansion_puzzle(vec![
            Clue::in_room("Alice", "c", false),
            Clue::at_column("Alice", 2)
        ]);
        let report = BacktrackingSolver.search(&puzzle);

        assert!(report.solutions.is_empty());
        assert_eq!(SearchStats::default(), report.stats);
    }

    #[test]
    fn contradicting_order_prunes_every_row_order() {
        let puzzle = mansion_puzzle(vec![
            Clue::above_person("Alice", "Bob"),
            Clue::below_person("Alice", "Bob")
        ]);
        let report = BacktrackingSolver.search(&puzzle);

        assert!(report.solutions.is_empty());
        assert_eq!(6, report.stats.row_orders);
        assert_eq!(6, report.stats.pruned_row_orders);
        assert_eq!(0, report.stats.placements);
    }

    #[test]
    fn relational_clues_are_checked_on_placements() {
        // same as the unique puzzle, but Bob must share a room with Alice
        let puzzle = mansion_puzzle(vec![
            Clue::in_room("Bob", "b", false),
            Clue::at_column("Alice", 0),
            Clue::on_object("Victor", ObjectType::Bed, false),
            Clue::with_person("Bob", "Alice", false)
        ]);

        match BacktrackingSolver.solve(&puzzle) {
            Err(SolveError::NoSolution { clues: 4, placements }) =>
                assert!(placements > 0),
            other => panic!("expected no solution, got {:?}", other)
        }
    }

    #[test]
    fn finalize_classifies_by_count() {
        let solution = Solution::new(positions(&[("A", 0, 0)]), "A");
        let report = |solutions: Vec<Solution>| SearchReport {
            solutions,
            stats: SearchStats::default()
        };

        assert_eq!(Err(SolveError::NoSolution { clues: 2, placements: 0 }),
            finalize(report(Vec::new()), 2));
        assert_eq!(Ok(solution.clone()),
            finalize(report(vec![solution.clone()]), 2));
        assert_eq!(Err(SolveError::MultipleSolutions(
            vec![solution.clone(), solution.clone()])),
            finalize(report(vec![solution.clone(), solution]), 2));
    }

    #[test]
    fn solution_display() {
        let solution = Solution::new(positions(&[
            ("Bob", 0, 0),
            ("Alice", 1, 1)
        ]), "Bob");

        assert_eq!("murderer Bob: Alice at (1, 1) Bob at (0, 0)",
            solution.to_string());
    }
}
