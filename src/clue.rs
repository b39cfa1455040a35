//! This module defines the clues of a Murdoku puzzle. A [Clue] is a pure
//! predicate over a [Placement], parameterized at construction time by the
//! people, rooms, objects or columns it talks about.
//!
//! Clues are a closed set of variants, one per clue kind, each carrying its
//! typed arguments. This makes them introspectable: the solver matches on the
//! variant to find out which clues restrict a single person's cell (and can
//! therefore be applied before the search) and which clues order people by
//! row.
//!
//! Unless stated otherwise, room-related checks are restricted to the room of
//! the person in question, e.g. a person is only *next to* an object if the
//! object is on an orthogonally adjacent cell of the same room.
//!
//! Clues deserialize from the tagged JSON objects used in puzzle files:
//!
//! ```
//! use murdoku::clue::Clue;
//! use murdoku::grid::ObjectType;
//!
//! let clue: Clue = serde_json::from_str(
//!     r#"{"type": "on_object", "person": "Axel", "object": "Window"}"#)
//!     .unwrap();
//! assert_eq!(Clue::on_object("Axel", ObjectType::Window, false), clue);
//! assert_eq!("on_object(Axel, window)", clue.to_string());
//! ```

use crate::error::{PuzzleError, PuzzleResult};
use crate::grid::{Cell, Grid, ObjectType};
use crate::placement::Placement;

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// A single clue. See the documentation of each variant for its semantics.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Clue {

    /// `person` is in `room` (or not, if `invert`).
    InRoom {

        /// The person the clue is about.
        person: String,

        /// The room.
        room: String,

        /// Negates the clue.
        #[serde(default)]
        invert: bool
    },

    /// `person` stands on a cell with `object` (or not, if `invert`).
    OnObject {

        /// The person the clue is about.
        person: String,

        /// The object.
        object: ObjectType,

        /// Negates the clue.
        #[serde(default)]
        invert: bool
    },

    /// `person` is the only one standing on any cell with `object`.
    OnlyOnObject {

        /// The person the clue is about.
        person: String,

        /// The object.
        object: ObjectType
    },

    /// At most one person stands on a cell with `object`.
    OnlyOnePersonOn {

        /// The object.
        object: ObjectType
    },

    /// Some orthogonal neighbour of `person`'s cell in the same room has
    /// `object` (or none does, if `invert`).
    NextToObject {

        /// The person the clue is about.
        person: String,

        /// The object.
        object: ObjectType,

        /// Negates the clue.
        #[serde(default)]
        invert: bool
    },

    /// `person` stands in a corner of their room, i.e. there are walls in two
    /// directions 90° apart.
    #[serde(alias = "at_corner")]
    InCorner {

        /// The person the clue is about.
        person: String
    },

    /// None of the four directions from `person`'s cell is a wall.
    NotNextToWall {

        /// The person the clue is about.
        person: String
    },

    /// `person`'s row is strictly greater than `target`'s row.
    BelowPerson {

        /// The person the clue is about.
        person: String,

        /// The person `person` is below.
        target: String
    },

    /// `person`'s row is strictly less than `target`'s row.
    AbovePerson {

        /// The person the clue is about.
        person: String,

        /// The person `person` is above.
        target: String
    },

    /// `person` stands in `column`.
    AtColumn {

        /// The person the clue is about.
        person: String,

        /// The column.
        column: usize
    },

    /// The room of `person` (the victim) contains exactly two people.
    AloneWithMurderer {

        /// The victim.
        person: String
    },

    /// `person` is in the same room as `target` (or not, if `invert`).
    #[serde(alias = "in_same_room_as_person")]
    WithPerson {

        /// The person the clue is about.
        person: String,

        /// The other person.
        target: String,

        /// Negates the clue.
        #[serde(default)]
        invert: bool
    },

    /// `person` is in `room` and nobody else is.
    AloneInRoom {

        /// The person the clue is about.
        person: String,

        /// The room.
        room: String
    },

    /// The people in `person`'s room are exactly `person` and `target`.
    OnlyWithPerson {

        /// The person the clue is about.
        person: String,

        /// The other person.
        target: String
    },

    /// Some cell with `object` lies in `person`'s column and in the same
    /// room as `person` (in a different room, if `different_room`).
    SameColumnAsObject {

        /// The person the clue is about.
        person: String,

        /// The object.
        object: ObjectType,

        /// Requires the object to be in a different room.
        #[serde(default)]
        different_room: bool
    },

    /// Some cell with `object` lies in a column strictly greater than
    /// `person`'s column and in the same room as `person` (in a different
    /// room, if `different_room`).
    LeftOf {

        /// The person the clue is about.
        person: String,

        /// The object. Puzzle files name it `target`.
        #[serde(rename = "target")]
        object: ObjectType,

        /// Requires the object to be in a different room.
        #[serde(default)]
        different_room: bool
    }
}

/// One argument of a [Clue], as returned by [Clue::args].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClueArg<'a> {

    /// A person identifier.
    Person(&'a str),

    /// A room identifier.
    Room(&'a str),

    /// An object tag.
    Object(ObjectType),

    /// A column index.
    Column(usize),

    /// A boolean option such as `invert` or `different_room`.
    Flag(&'static str, bool)
}

fn object_matches(grid: &Grid, cell: &Cell, object: ObjectType,
        different_room: bool, column_matches: impl Fn(usize) -> bool) -> bool {
    grid.cells_with_object(object)
        .filter(|o| column_matches(o.column()))
        .any(|o| (o.room() == cell.room()) != different_room)
}

impl Clue {

    /// Creates an `in_room` clue.
    pub fn in_room(person: impl Into<String>, room: impl Into<String>,
            invert: bool) -> Clue {
        Clue::InRoom { person: person.into(), room: room.into(), invert }
    }

    /// Creates an `on_object` clue.
    pub fn on_object(person: impl Into<String>, object: ObjectType,
            invert: bool) -> Clue {
        Clue::OnObject { person: person.into(), object, invert }
    }

    /// Creates an `only_on_object` clue.
    pub fn only_on_object(person: impl Into<String>, object: ObjectType)
            -> Clue {
        Clue::OnlyOnObject { person: person.into(), object }
    }

    /// Creates an `only_one_person_on` clue.
    pub fn only_one_person_on(object: ObjectType) -> Clue {
        Clue::OnlyOnePersonOn { object }
    }

    /// Creates a `next_to_object` clue.
    pub fn next_to_object(person: impl Into<String>, object: ObjectType,
            invert: bool) -> Clue {
        Clue::NextToObject { person: person.into(), object, invert }
    }

    /// Creates an `in_corner` clue.
    pub fn in_corner(person: impl Into<String>) -> Clue {
        Clue::InCorner { person: person.into() }
    }

    /// Creates a `not_next_to_wall` clue.
    pub fn not_next_to_wall(person: impl Into<String>) -> Clue {
        Clue::NotNextToWall { person: person.into() }
    }

    /// Creates a `below_person` clue.
    pub fn below_person(person: impl Into<String>, target: impl Into<String>)
            -> Clue {
        Clue::BelowPerson { person: person.into(), target: target.into() }
    }

    /// Creates an `above_person` clue.
    pub fn above_person(person: impl Into<String>, target: impl Into<String>)
            -> Clue {
        Clue::AbovePerson { person: person.into(), target: target.into() }
    }

    /// Creates an `at_column` clue.
    pub fn at_column(person: impl Into<String>, column: usize) -> Clue {
        Clue::AtColumn { person: person.into(), column }
    }

    /// Creates an `alone_with_murderer` clue about the given victim.
    pub fn alone_with_murderer(victim: impl Into<String>) -> Clue {
        Clue::AloneWithMurderer { person: victim.into() }
    }

    /// Creates a `with_person` clue.
    pub fn with_person(person: impl Into<String>, target: impl Into<String>,
            invert: bool) -> Clue {
        Clue::WithPerson { person: person.into(), target: target.into(), invert }
    }

    /// Creates an `alone_in_room` clue.
    pub fn alone_in_room(person: impl Into<String>, room: impl Into<String>)
            -> Clue {
        Clue::AloneInRoom { person: person.into(), room: room.into() }
    }

    /// Creates an `only_with_person` clue.
    pub fn only_with_person(person: impl Into<String>,
            target: impl Into<String>) -> Clue {
        Clue::OnlyWithPerson { person: person.into(), target: target.into() }
    }

    /// Creates a `same_column_as_object` clue.
    pub fn same_column_as_object(person: impl Into<String>,
            object: ObjectType, different_room: bool) -> Clue {
        Clue::SameColumnAsObject {
            person: person.into(),
            object,
            different_room
        }
    }

    /// Creates a `left_of` clue.
    pub fn left_of(person: impl Into<String>, object: ObjectType,
            different_room: bool) -> Clue {
        Clue::LeftOf { person: person.into(), object, different_room }
    }

    /// The type tag of this clue, as used in puzzle files.
    pub fn kind(&self) -> &'static str {
        match self {
            Clue::InRoom { .. } => "in_room",
            Clue::OnObject { .. } => "on_object",
            Clue::OnlyOnObject { .. } => "only_on_object",
            Clue::OnlyOnePersonOn { .. } => "only_one_person_on",
            Clue::NextToObject { .. } => "next_to_object",
            Clue::InCorner { .. } => "in_corner",
            Clue::NotNextToWall { .. } => "not_next_to_wall",
            Clue::BelowPerson { .. } => "below_person",
            Clue::AbovePerson { .. } => "above_person",
            Clue::AtColumn { .. } => "at_column",
            Clue::AloneWithMurderer { .. } => "alone_with_murderer",
            Clue::WithPerson { .. } => "with_person",
            Clue::AloneInRoom { .. } => "alone_in_room",
            Clue::OnlyWithPerson { .. } => "only_with_person",
            Clue::SameColumnAsObject { .. } => "same_column_as_object",
            Clue::LeftOf { .. } => "left_of"
        }
    }

    /// The arguments of this clue in declaration order.
    pub fn args(&self) -> Vec<ClueArg<'_>> {
        use ClueArg::*;

        match self {
            Clue::InRoom { person, room, invert } =>
                vec![Person(person), Room(room), Flag("invert", *invert)],
            Clue::OnObject { person, object, invert } |
            Clue::NextToObject { person, object, invert } =>
                vec![Person(person), Object(*object), Flag("invert", *invert)],
            Clue::OnlyOnObject { person, object } =>
                vec![Person(person), Object(*object)],
            Clue::OnlyOnePersonOn { object } => vec![Object(*object)],
            Clue::InCorner { person } |
            Clue::NotNextToWall { person } |
            Clue::AloneWithMurderer { person } => vec![Person(person)],
            Clue::BelowPerson { person, target } |
            Clue::AbovePerson { person, target } |
            Clue::OnlyWithPerson { person, target } =>
                vec![Person(person), Person(target)],
            Clue::AtColumn { person, column } =>
                vec![Person(person), Column(*column)],
            Clue::WithPerson { person, target, invert } =>
                vec![Person(person), Person(target), Flag("invert", *invert)],
            Clue::AloneInRoom { person, room } =>
                vec![Person(person), Room(room)],
            Clue::SameColumnAsObject { person, object, different_room } |
            Clue::LeftOf { person, object, different_room } =>
                vec![Person(person), Object(*object),
                    Flag("different_room", *different_room)]
        }
    }

    /// All people this clue refers to.
    pub fn people(&self) -> Vec<&str> {
        self.args().into_iter()
            .filter_map(|arg| match arg {
                ClueArg::Person(person) => Some(person),
                _ => None
            })
            .collect()
    }

    /// If this clue restricts only the cell of a single person, independent
    /// of where everybody else stands, returns that person. For such clues,
    /// [Clue::admits_cell] gives a structural test of a candidate cell.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Clue::InRoom { person, .. } |
            Clue::OnObject { person, .. } |
            Clue::OnlyOnObject { person, .. } |
            Clue::NextToObject { person, .. } |
            Clue::InCorner { person } |
            Clue::NotNextToWall { person } |
            Clue::AtColumn { person, .. } |
            Clue::AloneInRoom { person, .. } |
            Clue::SameColumnAsObject { person, .. } |
            Clue::LeftOf { person, .. } => Some(person),
            Clue::OnlyOnePersonOn { .. } |
            Clue::BelowPerson { .. } |
            Clue::AbovePerson { .. } |
            Clue::AloneWithMurderer { .. } |
            Clue::WithPerson { .. } |
            Clue::OnlyWithPerson { .. } => None
        }
    }

    /// Tests whether the [subject](Clue::subject) of this clue may stand on
    /// `cell`. Returns `None` for clues without a subject.
    ///
    /// The test is a necessary condition: whenever the clue holds in a
    /// placement, it admits the subject's cell. For most clues it is also
    /// sufficient. `only_on_object` and `alone_in_room` additionally
    /// constrain the other people, which is only checked by
    /// [Clue::evaluate].
    pub fn admits_cell(&self, grid: &Grid, cell: &Cell) -> Option<bool> {
        let admitted = match self {
            Clue::InRoom { room, invert, .. } => (cell.room() == room) != *invert,
            Clue::OnObject { object, invert, .. } =>
                cell.has_object(*object) != *invert,
            Clue::OnlyOnObject { object, .. } => cell.has_object(*object),
            Clue::NextToObject { object, invert, .. } =>
                grid.is_next_to_object(cell, *object) != *invert,
            Clue::InCorner { .. } => grid.is_corner(cell),
            Clue::NotNextToWall { .. } => grid.is_interior(cell),
            Clue::AtColumn { column, .. } => cell.column() == *column,
            Clue::AloneInRoom { room, .. } => cell.room() == room,
            Clue::SameColumnAsObject { object, different_room, .. } =>
                object_matches(grid, cell, *object, *different_room,
                    |c| c == cell.column()),
            Clue::LeftOf { object, different_room, .. } =>
                object_matches(grid, cell, *object, *different_room,
                    |c| c > cell.column()),
            _ => return None
        };

        Some(admitted)
    }

    /// Evaluates this clue against a complete placement. This never modifies
    /// the placement.
    ///
    /// # Panics
    ///
    /// If the clue refers to a person that is not part of the placement.
    pub fn evaluate(&self, placement: &Placement<'_>) -> bool {
        match self {
            Clue::OnlyOnObject { person, object } =>
                placement.people_on_object(*object) == [person.as_str()],
            Clue::OnlyOnePersonOn { object } =>
                placement.people_on_object(*object).len() <= 1,
            Clue::BelowPerson { person, target } =>
                placement.position(person).0 > placement.position(target).0,
            Clue::AbovePerson { person, target } =>
                placement.position(person).0 < placement.position(target).0,
            Clue::AloneWithMurderer { person } => {
                let room = placement.room_of(person);
                placement.people_in_room(room).len() == 2
            },
            Clue::WithPerson { person, target, invert } =>
                (placement.room_of(person) == placement.room_of(target)) !=
                    *invert,
            Clue::AloneInRoom { person, room } =>
                placement.people_in_room(room) == [person.as_str()],
            Clue::OnlyWithPerson { person, target } => {
                let occupants =
                    placement.people_in_room(placement.room_of(person));
                occupants.contains(&target.as_str()) &&
                    occupants.iter().all(|&o| o == person.as_str() || o == target.as_str())
            },
            Clue::InRoom { person, .. } |
            Clue::OnObject { person, .. } |
            Clue::NextToObject { person, .. } |
            Clue::InCorner { person } |
            Clue::NotNextToWall { person } |
            Clue::AtColumn { person, .. } |
            Clue::SameColumnAsObject { person, .. } |
            Clue::LeftOf { person, .. } => {
                let cell = placement.cell_of(person);
                self.admits_cell(placement.grid(), cell).unwrap_or(false)
            }
        }
    }

    /// Checks that every person and room this clue refers to exists, and that
    /// a required column lies inside the grid.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::UnknownPerson` if a person is not in `people`.
    /// * `PuzzleError::UnknownRoom` if a room does not occur in `grid`.
    /// * `PuzzleError::ColumnOutOfBounds` for an `at_column` clue outside the
    /// grid.
    pub fn validate(&self, grid: &Grid, people: &[String]) -> PuzzleResult<()> {
        for arg in self.args() {
            match arg {
                ClueArg::Person(person) if !people.iter().any(|p| p == person) =>
                    return Err(PuzzleError::UnknownPerson(person.to_owned())),
                ClueArg::Room(room) if !grid.has_room(room) =>
                    return Err(PuzzleError::UnknownRoom(room.to_owned())),
                _ => { }
            }
        }

        if let Clue::AtColumn { person, column } = self {
            if *column >= grid.columns() {
                return Err(PuzzleError::ColumnOutOfBounds {
                    person: person.clone(),
                    column: *column
                });
            }
        }

        Ok(())
    }

    fn is_inverted(&self) -> bool {
        match self {
            Clue::InRoom { invert, .. } |
            Clue::OnObject { invert, .. } |
            Clue::NextToObject { invert, .. } |
            Clue::WithPerson { invert, .. } => *invert,
            _ => false
        }
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_inverted() {
            f.write_str("not_")?;
        }

        write!(f, "{}(", self.kind())?;
        let mut first = true;

        for arg in self.args() {
            let text = match arg {
                ClueArg::Person(s) | ClueArg::Room(s) => s.to_owned(),
                ClueArg::Object(object) => object.name().to_owned(),
                ClueArg::Column(column) => column.to_string(),
                ClueArg::Flag("different_room", true) =>
                    "different_room".to_owned(),
                ClueArg::Flag("different_room", false) =>
                    "same_room".to_owned(),
                ClueArg::Flag(..) => continue
            };

            if !first {
                f.write_str(", ")?;
            }

            f.write_str(&text)?;
            first = false;
        }

        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn people(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    /// 2x2 grid with two rooms. Alice (row 0, column 0) stands on the window
    /// in room `top`, Bob (row 1, column 1) on the bed in room `bot`.
    fn two_rooms() -> Grid {
        Grid::from_layout(&[
            &["top", "top"],
            &["bot", "bot"]
        ]).unwrap()
            .with_cell(Cell::new(0, 0, "top", vec![ObjectType::Window])).unwrap()
            .with_cell(Cell::new(1, 1, "bot", vec![ObjectType::Bed])).unwrap()
    }

    fn single_room(size: usize) -> Grid {
        let row = vec!["r"; size];
        let layout = vec![row.as_slice(); size];
        Grid::from_layout(&layout).unwrap()
    }

    fn check(clue: &Clue, grid: &Grid, names: &[&str], row_order: Vec<usize>,
            columns: Vec<usize>) -> bool {
        let people = people(names);
        let placement = Placement::new(grid, &people, row_order, columns);
        clue.evaluate(&placement)
    }

    fn check_two_rooms(clue: Clue) -> bool {
        check(&clue, &two_rooms(), &["Alice", "Bob"], vec![0, 1], vec![0, 1])
    }

    #[test]
    fn in_room() {
        assert!(check_two_rooms(Clue::in_room("Alice", "top", false)));
        assert!(!check_two_rooms(Clue::in_room("Alice", "bot", false)));
        assert!(check_two_rooms(Clue::in_room("Alice", "bot", true)));
    }

    #[test]
    fn on_object() {
        assert!(check_two_rooms(Clue::on_object("Alice", ObjectType::Window,
            false)));
        assert!(!check_two_rooms(Clue::on_object("Alice", ObjectType::Bed,
            false)));
        assert!(!check_two_rooms(Clue::on_object("Alice", ObjectType::Window,
            true)));
        assert!(check_two_rooms(Clue::on_object("Alice", ObjectType::Bed,
            true)));
    }

    #[test]
    fn only_on_object() {
        assert!(check_two_rooms(Clue::only_on_object("Bob", ObjectType::Bed)));
        assert!(!check_two_rooms(Clue::only_on_object("Alice",
            ObjectType::Bed)));

        // both people on carpets
        let grid = Grid::from_layout(&[&["r", "r"], &["r", "r"]]).unwrap()
            .with_cell(Cell::new(0, 0, "r", vec![ObjectType::Carpet])).unwrap()
            .with_cell(Cell::new(1, 1, "r", vec![ObjectType::Carpet])).unwrap();
        let clue = Clue::only_on_object("Alice", ObjectType::Carpet);
        assert!(!check(&clue, &grid, &["Alice", "Bob"], vec![0, 1],
            vec![0, 1]));
        assert!(!check(&Clue::only_one_person_on(ObjectType::Carpet), &grid,
            &["Alice", "Bob"], vec![0, 1], vec![0, 1]));
        assert!(check(&Clue::only_one_person_on(ObjectType::Carpet), &grid,
            &["Alice", "Bob"], vec![0, 1], vec![1, 0]));
    }

    #[test]
    fn only_one_person_on_allows_nobody() {
        assert!(check_two_rooms(Clue::only_one_person_on(ObjectType::Carpet)));
        assert!(check_two_rooms(Clue::only_one_person_on(ObjectType::Bed)));
    }

    #[test]
    fn next_to_object() {
        // the bed is only diagonally adjacent to Alice
        assert!(!check_two_rooms(Clue::next_to_object("Alice", ObjectType::Bed,
            false)));
        assert!(check_two_rooms(Clue::next_to_object("Alice", ObjectType::Bed,
            true)));

        let grid = Grid::from_layout(&[&["r", "r"], &["r", "r"]]).unwrap()
            .with_cell(Cell::new(0, 1, "r", vec![ObjectType::Bed])).unwrap();
        let clue = Clue::next_to_object("Alice", ObjectType::Bed, false);
        assert!(check(&clue, &grid, &["Alice", "Bob"], vec![0, 1], vec![0, 1]));
    }

    #[test]
    fn alone_with_murderer() {
        let grid = Grid::from_layout(&[
            &["same", "same"],
            &["other", "same"]
        ]).unwrap();
        let clue = Clue::alone_with_murderer("Alice");
        assert!(check(&clue, &grid, &["Alice", "Bob"], vec![0, 1], vec![0, 1]));
        assert!(!check(&clue, &grid, &["Alice", "Bob"], vec![0, 1],
            vec![1, 0]));
        assert!(!check(&clue, &single_room(3), &["Alice", "Bob", "Carol"],
            vec![0, 1, 2], vec![0, 1, 2]));
    }

    #[test]
    fn in_corner_single_room() {
        let grid = single_room(3);
        let clue = Clue::in_corner("Alice");
        let names = ["Alice", "Bob", "Carol"];

        // Alice in row 0 or 2 at column 0 or 2 is in a corner
        assert!(check(&clue, &grid, &names, vec![0, 1, 2], vec![0, 1, 2]));
        assert!(check(&clue, &grid, &names, vec![0, 1, 2], vec![2, 1, 0]));
        assert!(check(&clue, &grid, &names, vec![1, 2, 0], vec![1, 0, 2]));
        assert!(!check(&clue, &grid, &names, vec![0, 1, 2], vec![1, 0, 2]));
        assert!(!check(&clue, &grid, &names, vec![1, 0, 2], vec![0, 1, 2]));
    }

    #[test]
    fn not_next_to_wall() {
        let grid = single_room(3);
        let clue = Clue::not_next_to_wall("Alice");
        let names = ["Alice", "Bob", "Carol"];
        assert!(check(&clue, &grid, &names, vec![1, 0, 2], vec![0, 1, 2]));
        assert!(!check(&clue, &grid, &names, vec![1, 0, 2], vec![1, 0, 2]));
        assert!(!check(&clue, &grid, &names, vec![0, 1, 2], vec![1, 0, 2]));
    }

    #[test]
    fn above_and_below() {
        assert!(check_two_rooms(Clue::above_person("Alice", "Bob")));
        assert!(!check_two_rooms(Clue::above_person("Bob", "Alice")));
        assert!(check_two_rooms(Clue::below_person("Bob", "Alice")));
        assert!(!check_two_rooms(Clue::below_person("Alice", "Bob")));
    }

    #[test]
    fn at_column() {
        assert!(check_two_rooms(Clue::at_column("Bob", 1)));
        assert!(!check_two_rooms(Clue::at_column("Bob", 0)));
    }

    #[test]
    fn with_person() {
        assert!(!check_two_rooms(Clue::with_person("Alice", "Bob", false)));
        assert!(check_two_rooms(Clue::with_person("Alice", "Bob", true)));
        assert!(check(&Clue::with_person("Alice", "Bob", false),
            &single_room(2), &["Alice", "Bob"], vec![0, 1], vec![0, 1]));
    }

    #[test]
    fn alone_in_room() {
        assert!(check_two_rooms(Clue::alone_in_room("Alice", "top")));
        assert!(!check_two_rooms(Clue::alone_in_room("Alice", "bot")));
        assert!(!check(&Clue::alone_in_room("Alice", "r"), &single_room(2),
            &["Alice", "Bob"], vec![0, 1], vec![0, 1]));
    }

    #[test]
    fn only_with_person() {
        let grid = single_room(3);
        let names = ["Alice", "Bob", "Carol"];
        let clue = Clue::only_with_person("Alice", "Bob");
        assert!(!check(&clue, &grid, &names, vec![0, 1, 2], vec![0, 1, 2]));

        let grid = Grid::from_layout(&[
            &["a", "a", "a"],
            &["a", "a", "a"],
            &["b", "b", "b"]
        ]).unwrap();
        assert!(check(&clue, &grid, &names, vec![0, 1, 2], vec![0, 1, 2]));
        assert!(!check(&clue, &grid, &names, vec![0, 2, 1], vec![0, 1, 2]));
    }

    fn column_grid() -> Grid {
        // the window is in column 1 of room `a`, the rock in column 2 of
        // room `b`
        Grid::from_layout(&[
            &["a", "a", "b"],
            &["a", "a", "b"]
        ]).unwrap()
            .with_cell(Cell::new(0, 1, "a", vec![ObjectType::Window])).unwrap()
            .with_cell(Cell::new(0, 2, "b", vec![ObjectType::Rock])).unwrap()
    }

    #[test]
    fn same_column_as_object() {
        let grid = column_grid();
        let names = ["Alice", "Bob"];
        let same = Clue::same_column_as_object("Bob", ObjectType::Window, false);
        let different =
            Clue::same_column_as_object("Bob", ObjectType::Window, true);

        // Bob at (1, 1) in room a, below the window
        assert!(check(&same, &grid, &names, vec![0, 1], vec![0, 1]));
        assert!(!check(&different, &grid, &names, vec![0, 1], vec![0, 1]));
        // Bob at (1, 0)
        assert!(!check(&same, &grid, &names, vec![0, 1], vec![1, 0]));

        let rock = Clue::same_column_as_object("Bob", ObjectType::Rock, false);
        assert!(check(&rock, &grid, &names, vec![0, 1], vec![0, 2]));
    }

    #[test]
    fn left_of() {
        let grid = column_grid();
        let names = ["Alice", "Bob"];

        // Bob at (1, 0), left of the window (same room) and the rock
        // (different room)
        assert!(check(&Clue::left_of("Bob", ObjectType::Window, false), &grid,
            &names, vec![0, 1], vec![1, 0]));
        assert!(!check(&Clue::left_of("Bob", ObjectType::Window, true), &grid,
            &names, vec![0, 1], vec![1, 0]));
        assert!(check(&Clue::left_of("Bob", ObjectType::Rock, true), &grid,
            &names, vec![0, 1], vec![1, 0]));

        // Bob at (1, 1), in the window's column, so not left of it
        assert!(!check(&Clue::left_of("Bob", ObjectType::Window, false), &grid,
            &names, vec![0, 1], vec![0, 1]));
    }

    #[test]
    fn invert_negates_on_every_placement() {
        let grid = two_rooms();
        let names = ["Alice", "Bob"];
        let clues: Vec<fn(bool) -> Clue> = vec![
            |invert| Clue::in_room("Alice", "top", invert),
            |invert| Clue::on_object("Bob", ObjectType::Bed, invert),
            |invert| Clue::next_to_object("Alice", ObjectType::Window, invert),
            |invert| Clue::with_person("Alice", "Bob", invert)
        ];
        let placements = vec![
            (vec![0, 1], vec![0, 1]),
            (vec![0, 1], vec![1, 0]),
            (vec![1, 0], vec![0, 1]),
            (vec![1, 0], vec![1, 0])
        ];

        for make in clues {
            for (row_order, columns) in &placements {
                let plain = check(&make(false), &grid, &names,
                    row_order.clone(), columns.clone());
                let inverted = check(&make(true), &grid, &names,
                    row_order.clone(), columns.clone());
                assert_ne!(plain, inverted, "{} not negated", make(false));
            }
        }
    }

    #[test]
    fn kind_and_args() {
        let clue = Clue::left_of("Bob", ObjectType::Tv, true);
        assert_eq!("left_of", clue.kind());
        assert_eq!(vec![
            ClueArg::Person("Bob"),
            ClueArg::Object(ObjectType::Tv),
            ClueArg::Flag("different_room", true)
        ], clue.args());
        assert_eq!(Some("Bob"), clue.subject());
        assert_eq!(None, Clue::above_person("Bob", "Alice").subject());
        assert_eq!(vec!["Bob", "Alice"],
            Clue::above_person("Bob", "Alice").people());
    }

    #[test]
    fn display() {
        assert_eq!("not_with_person(Alice, Bob)",
            Clue::with_person("Alice", "Bob", true).to_string());
        assert_eq!("at_column(Alice, 3)", Clue::at_column("Alice", 3).to_string());
        assert_eq!("same_column_as_object(Alice, cash_register, same_room)",
            Clue::same_column_as_object("Alice", ObjectType::CashRegister,
                false).to_string());
    }

    #[test]
    fn validation() {
        let grid = two_rooms();
        let people = people(&["Alice", "Bob"]);

        assert_eq!(Ok(()), Clue::with_person("Alice", "Bob", false)
            .validate(&grid, &people));
        assert_eq!(Err(PuzzleError::UnknownPerson("Eve".to_owned())),
            Clue::above_person("Alice", "Eve").validate(&grid, &people));
        assert_eq!(Err(PuzzleError::UnknownRoom("attic".to_owned())),
            Clue::alone_in_room("Alice", "attic").validate(&grid, &people));
        assert_eq!(Err(PuzzleError::ColumnOutOfBounds {
            person: "Bob".to_owned(),
            column: 2
        }), Clue::at_column("Bob", 2).validate(&grid, &people));
    }

    #[test]
    fn deserialize_aliases_and_defaults() {
        let clue: Clue = serde_json::from_str(
            r#"{"type": "at_corner", "person": "Ada"}"#).unwrap();
        assert_eq!(Clue::in_corner("Ada"), clue);

        let clue: Clue = serde_json::from_str(
            r#"{"type": "in_same_room_as_person", "person": "Ada",
                "target": "Bo", "invert": true}"#).unwrap();
        assert_eq!(Clue::with_person("Ada", "Bo", true), clue);

        let clue: Clue = serde_json::from_str(
            r#"{"type": "left_of", "person": "Ada", "target": "plant"}"#)
            .unwrap();
        assert_eq!(Clue::left_of("Ada", ObjectType::Plant, false), clue);
    }

    #[test]
    fn deserialize_errors() {
        assert!(serde_json::from_str::<Clue>(
            r#"{"type": "in_attic", "person": "Ada"}"#).is_err());
        assert!(serde_json::from_str::<Clue>(
            r#"{"type": "on_object", "person": "Ada", "object": "sofa"}"#)
            .is_err());
        assert!(serde_json::from_str::<Clue>(
            r#"{"type": "at_column", "person": "Ada"}"#).is_err());
    }
}
