//! This module contains the domain reduction which runs before the search. It
//! narrows down the cells every person may occupy using all clues that only
//! talk about a single person, and extracts the row ordering required by the
//! `above_person` and `below_person` clues.
//!
//! The reduction is sound: a cell is only removed from a person's domain if
//! some clue rules it out for every placement. Clues that relate several
//! people are left to the evaluation of complete placements.

use crate::Puzzle;
use crate::clue::Clue;
use crate::util::ColumnSet;

use log::debug;

use std::collections::BTreeMap;

/// The reduced domains of all people of a puzzle. People are identified by
/// their index in [Puzzle::people].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domains {
    cells: Vec<Vec<(usize, usize)>>,
    columns: Vec<Vec<ColumnSet>>,
    precedes: Vec<(usize, usize)>,
    fixed_columns: BTreeMap<usize, usize>
}

impl Domains {

    /// Computes the domains of the given puzzle.
    ///
    /// Every person starts with all cells that are not blocked and loses every
    /// cell rejected by one of their single-person clues. The remaining cells
    /// are then projected onto the rows a person may be assigned: only the
    /// first `n` rows are used by an `n`-person puzzle.
    pub fn reduce(puzzle: &Puzzle) -> Domains {
        let grid = puzzle.grid();
        let people = puzzle.people();
        let row_count = people.len();
        let mut cells = Vec::with_capacity(people.len());
        let mut columns = Vec::with_capacity(people.len());

        for person in people {
            let clues: Vec<&Clue> = puzzle.clues().iter()
                .filter(|clue| clue.subject() == Some(person.as_str()))
                .collect();
            let candidates: Vec<(usize, usize)> = grid.valid_cells()
                .filter(|&cell| cell.row() < row_count)
                .filter(|&cell| clues.iter()
                    .all(|clue| clue.admits_cell(grid, cell).unwrap_or(true)))
                .map(|cell| (cell.row(), cell.column()))
                .collect();
            let mut by_row = vec![ColumnSet::new(); row_count];

            for &(row, column) in &candidates {
                by_row[row].insert(column);
            }

            debug!("{} has {} candidate cells after applying {} clues", person,
                candidates.len(), clues.len());
            cells.push(candidates);
            columns.push(by_row);
        }

        let mut precedes = Vec::new();
        let mut fixed_columns = BTreeMap::new();

        for clue in puzzle.clues() {
            match clue {
                Clue::AbovePerson { person, target } => {
                    if let (Some(upper), Some(lower)) =
                            (puzzle.index_of(person), puzzle.index_of(target)) {
                        precedes.push((upper, lower));
                    }
                },
                Clue::BelowPerson { person, target } => {
                    if let (Some(upper), Some(lower)) =
                            (puzzle.index_of(target), puzzle.index_of(person)) {
                        precedes.push((upper, lower));
                    }
                },
                Clue::AtColumn { person, column } => {
                    if let Some(index) = puzzle.index_of(person) {
                        fixed_columns.insert(index, *column);
                    }
                },
                _ => { }
            }
        }

        debug!("extracted {} row ordering constraints and {} fixed columns",
            precedes.len(), fixed_columns.len());

        Domains {
            cells,
            columns,
            precedes,
            fixed_columns
        }
    }

    /// The `(row, column)` positions the given person may occupy.
    pub fn cells(&self, person: usize) -> &[(usize, usize)] {
        &self.cells[person]
    }

    /// The columns the given person may occupy if they are assigned to the
    /// given row.
    pub fn columns(&self, person: usize, row: usize) -> &ColumnSet {
        &self.columns[person][row]
    }

    /// The pairs `(upper, lower)` of people where `upper` must be in a row
    /// strictly above `lower`.
    pub fn precedes(&self) -> &[(usize, usize)] {
        &self.precedes
    }

    /// The column required by an `at_column` clue for the given person, if
    /// any. This is informational: the column is already folded into
    /// [Domains::columns], so the search never consults it.
    pub fn fixed_column(&self, person: usize) -> Option<usize> {
        self.fixed_columns.get(&person).copied()
    }

    /// Indicates whether some person has no cell left, in which case the
    /// puzzle cannot have a solution.
    pub fn is_infeasible(&self) -> bool {
        self.cells.iter().any(|cells| cells.is_empty())
    }

    /// Indicates whether the given row order, which contains the index of
    /// the person in each row, respects all extracted ordering constraints.
    pub fn admits(&self, row_order: &[usize]) -> bool {
        let mut rows = vec![0; row_order.len()];

        for (row, &person) in row_order.iter().enumerate() {
            rows[person] = row;
        }

        self.precedes.iter().all(|&(upper, lower)| rows[upper] < rows[lower])
    }
}
