//! This module contains the [Placement], a candidate solution which assigns
//! every person of a puzzle to one grid position.

use crate::grid::{Cell, Grid, ObjectType};

/// A candidate assignment of people to grid positions. Every person occupies
/// a distinct row and a distinct column: `row_order[i]` is the person in row
/// `i` and `columns[i]` is the column assigned to row `i`.
///
/// People are referred to by their index into the people slice the placement
/// was created with. The queries taking a name look the person up in that
/// slice. Asking about a person that is not part of the placement is a
/// programming error and panics.
///
/// Placements are immutable. The search creates and discards many of them.
#[derive(Clone, Debug)]
pub struct Placement<'a> {
    grid: &'a Grid,
    people: &'a [String],
    row_order: Vec<usize>,
    columns: Vec<usize>,
    rows: Vec<usize>
}

impl<'a> Placement<'a> {

    /// Creates a new placement from a row order (person indices by row) and a
    /// column permutation (columns by row).
    ///
    /// # Panics
    ///
    /// If `row_order` and `columns` differ in length, if `row_order` is not a
    /// permutation of the indices of `people`, if two rows share a column, or
    /// if a position lies outside the grid.
    pub fn new(grid: &'a Grid, people: &'a [String], row_order: Vec<usize>,
            columns: Vec<usize>) -> Placement<'a> {
        assert_eq!(row_order.len(), columns.len(),
            "row order and columns must have the same length");
        assert_eq!(people.len(), row_order.len(),
            "every person must be assigned a row");
        assert!(row_order.len() <= grid.rows() &&
            columns.iter().all(|&c| c < grid.columns()),
            "placement exceeds the grid");
        assert!(columns.iter()
            .enumerate()
            .all(|(i, c)| !columns[..i].contains(c)),
            "no two rows may share a column");

        let mut rows = vec![usize::MAX; people.len()];

        for (row, &person) in row_order.iter().enumerate() {
            rows[person] = row;
        }

        assert!(rows.iter().all(|&r| r != usize::MAX),
            "row order must be a permutation of the people");

        Placement {
            grid,
            people,
            row_order,
            columns,
            rows
        }
    }

    fn index_of(&self, person: &str) -> usize {
        match self.people.iter().position(|p| p == person) {
            Some(index) => index,
            None => panic!("{:?} is not part of this placement", person)
        }
    }

    /// The grid this placement lives on.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// The people of this placement ordered by row.
    pub fn row_order(&self) -> impl Iterator<Item = &'a str> + '_ {
        let people = self.people;
        self.row_order.iter().map(move |&p| people[p].as_str())
    }

    /// The column assigned to each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// The `(row, column)` position of the person with the given index.
    pub fn position_of_index(&self, person: usize) -> (usize, usize) {
        let row = self.rows[person];
        (row, self.columns[row])
    }

    /// The `(row, column)` position of the given person.
    pub fn position(&self, person: &str) -> (usize, usize) {
        self.position_of_index(self.index_of(person))
    }

    /// The cell the given person stands on.
    pub fn cell_of(&self, person: &str) -> &'a Cell {
        let (row, column) = self.position(person);
        self.cell_at(row, column)
    }

    fn cell_at(&self, row: usize, column: usize) -> &'a Cell {
        match self.grid.get_cell(row, column) {
            Ok(cell) => cell,
            Err(e) => panic!("placement left the grid: {}", e)
        }
    }

    /// The room the given person is in.
    pub fn room_of(&self, person: &str) -> &'a str {
        self.cell_of(person).room()
    }

    /// Iterates over all people together with the cell they stand on, in
    /// row order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + '_ {
        let people = self.people;
        self.row_order.iter()
            .zip(self.columns.iter())
            .enumerate()
            .map(move |(row, (&person, &column))|
                (people[person].as_str(), self.cell_at(row, column)))
    }

    /// All people in the given room, in row order.
    pub fn people_in_room(&self, room: &str) -> Vec<&'a str> {
        self.occupied_cells()
            .filter(|(_, cell)| cell.room() == room)
            .map(|(person, _)| person)
            .collect()
    }

    /// All people standing on a cell with the given object, in row order.
    pub fn people_on_object(&self, object: ObjectType) -> Vec<&'a str> {
        self.occupied_cells()
            .filter(|(_, cell)| cell.has_object(object))
            .map(|(person, _)| person)
            .collect()
    }
}
