//! This module contains the static spatial structure of a Murdoku puzzle: the
//! [ObjectType]s that can appear on a cell, the [Cell]s themselves and the
//! [Grid] that arranges them into rows and columns.
//!
//! Besides plain lookups, the grid answers the geometric questions that clues
//! ask about a cell, such as whether it lies in a corner of its room or next
//! to some object. These are defined in terms of *walls*: looking from a cell
//! in some [Direction], there is a wall if the neighbouring position lies
//! outside the grid or belongs to a different room.

use crate::error::{GridError, GridResult};

use serde::{Deserialize, Serialize};

use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The room identifier reserved for void cells, i.e. positions of a deformed
/// map that are not part of any room.
pub const VOID_ROOM: &str = "__void__";

/// A piece of furniture or other feature that can appear on a cell. Some
/// objects block their cell, meaning no person may stand on it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq,
    PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ObjectType {

    /// A window. Does not block.
    Window,

    /// A bed. Does not block.
    Bed,

    /// A carpet. Does not block.
    Carpet,

    /// A plant. Blocks.
    Plant,

    /// A table. Blocks.
    Table,

    /// A chair. Does not block.
    Chair,

    /// A television. Blocks.
    Tv,

    /// A bookshelf. Blocks.
    Bookshelf,

    /// A cash register. Does not block.
    CashRegister,

    /// Some rubbish. Blocks.
    Rubbish,

    /// A rock. Blocks.
    Rock,

    /// A computer. Blocks.
    Computer,

    /// A gift. Does not block.
    Gift,

    /// A box. Blocks.
    Box,

    /// Marks a position that is not part of the map. Blocks.
    Void
}

impl ObjectType {

    /// All object types, in declaration order.
    pub const ALL: [ObjectType; 15] = [
        ObjectType::Window,
        ObjectType::Bed,
        ObjectType::Carpet,
        ObjectType::Plant,
        ObjectType::Table,
        ObjectType::Chair,
        ObjectType::Tv,
        ObjectType::Bookshelf,
        ObjectType::CashRegister,
        ObjectType::Rubbish,
        ObjectType::Rock,
        ObjectType::Computer,
        ObjectType::Gift,
        ObjectType::Box,
        ObjectType::Void
    ];

    /// The name of this object type as it is used in puzzle files.
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Window => "window",
            ObjectType::Bed => "bed",
            ObjectType::Carpet => "carpet",
            ObjectType::Plant => "plant",
            ObjectType::Table => "table",
            ObjectType::Chair => "chair",
            ObjectType::Tv => "tv",
            ObjectType::Bookshelf => "bookshelf",
            ObjectType::CashRegister => "cash_register",
            ObjectType::Rubbish => "rubbish",
            ObjectType::Rock => "rock",
            ObjectType::Computer => "computer",
            ObjectType::Gift => "gift",
            ObjectType::Box => "box",
            ObjectType::Void => VOID_ROOM
        }
    }

    /// Indicates whether a cell containing this object may not be occupied.
    pub fn blocks(self) -> bool {
        match self {
            ObjectType::Plant |
            ObjectType::Table |
            ObjectType::Tv |
            ObjectType::Bookshelf |
            ObjectType::Rubbish |
            ObjectType::Rock |
            ObjectType::Computer |
            ObjectType::Box |
            ObjectType::Void => true,
            ObjectType::Window |
            ObjectType::Bed |
            ObjectType::Carpet |
            ObjectType::Chair |
            ObjectType::CashRegister |
            ObjectType::Gift => false
        }
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an object name that does not denote any
/// [ObjectType].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownObjectError(pub String);

impl Display for UnknownObjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let valid = ObjectType::ALL.iter()
            .map(|o| o.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "unknown object type {:?} (valid: {})", self.0, valid)
    }
}

impl std::error::Error for UnknownObjectError { }

impl FromStr for ObjectType {
    type Err = UnknownObjectError;

    /// Parses an object name case-insensitively.
    fn from_str(s: &str) -> Result<ObjectType, UnknownObjectError> {
        let key = s.to_lowercase();
        ObjectType::ALL.iter()
            .copied()
            .find(|o| o.name() == key)
            .ok_or_else(|| UnknownObjectError(s.to_owned()))
    }
}

impl TryFrom<String> for ObjectType {
    type Error = UnknownObjectError;

    fn try_from(name: String) -> Result<ObjectType, UnknownObjectError> {
        name.parse()
    }
}

impl From<ObjectType> for String {
    fn from(object: ObjectType) -> String {
        object.name().to_owned()
    }
}

/// A single position of the grid. Cells are immutable once created.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    row: usize,
    column: usize,
    room: String,
    objects: BTreeSet<ObjectType>
}

impl Cell {

    /// Creates a new cell at the given position which belongs to `room` and
    /// contains the given objects.
    pub fn new(row: usize, column: usize, room: impl Into<String>,
            objects: impl IntoIterator<Item = ObjectType>) -> Cell {
        Cell {
            row,
            column,
            room: room.into(),
            objects: objects.into_iter().collect()
        }
    }

    /// Creates a void cell at the given position. Void cells are blocked and
    /// belong to [VOID_ROOM].
    pub fn void(row: usize, column: usize) -> Cell {
        Cell::new(row, column, VOID_ROOM, vec![ObjectType::Void])
    }

    /// The row of this cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of this cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The identifier of the room this cell belongs to.
    pub fn room(&self) -> &str {
        &self.room
    }

    /// The objects on this cell.
    pub fn objects(&self) -> &BTreeSet<ObjectType> {
        &self.objects
    }

    /// Indicates whether the given object is on this cell.
    pub fn has_object(&self, object: ObjectType) -> bool {
        self.objects.contains(&object)
    }

    /// Indicates whether any object on this cell blocks it.
    pub fn is_blocked(&self) -> bool {
        self.objects.iter().any(|o| o.blocks())
    }
}

/// The four orthogonal directions, listed clockwise starting upwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {

    /// Towards row 0.
    Up,

    /// Towards higher columns.
    Right,

    /// Towards higher rows.
    Down,

    /// Towards column 0.
    Left
}

impl Direction {

    /// All directions in clockwise order.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// The pairs of directions which are 90° apart. A cell lies in a corner
    /// if both directions of one of these pairs are walls. Opposite
    /// directions never form a corner.
    pub const CORNERS: [(Direction, Direction); 4] = [
        (Direction::Up, Direction::Right),
        (Direction::Right, Direction::Down),
        (Direction::Down, Direction::Left),
        (Direction::Left, Direction::Up)
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1)
        }
    }
}

/// An immutable matrix of [Cell]s. Every position holds exactly one cell;
/// positions that were not defined are filled with void cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>
}

fn index(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

impl Grid {

    /// Creates a new grid with the given dimensions from the given cells.
    /// Each cell is placed at the position it reports. Positions for which no
    /// cell is provided are filled with [void cells](Cell::void).
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidDimensions` if `rows` or `columns` is zero.
    /// * `GridError::TooLarge` if the number of cells overflows `usize`.
    /// * `GridError::OutOfBounds` if a cell lies outside the grid.
    /// * `GridError::DuplicateCell` if two cells share a position.
    pub fn new(rows: usize, columns: usize,
            cells: impl IntoIterator<Item = Cell>) -> GridResult<Grid> {
        if rows == 0 || columns == 0 {
            return Err(GridError::InvalidDimensions);
        }

        let size = rows.checked_mul(columns)
            .ok_or(GridError::TooLarge { rows, columns })?;
        let mut slots: Vec<Option<Cell>> = vec![None; size];

        for cell in cells {
            let (row, column) = (cell.row, cell.column);

            if row >= rows || column >= columns {
                return Err(GridError::OutOfBounds { row, column });
            }

            let slot = &mut slots[index(row, column, columns)];

            if slot.is_some() {
                return Err(GridError::DuplicateCell { row, column });
            }

            *slot = Some(cell);
        }

        let cells = slots.into_iter()
            .enumerate()
            .map(|(i, slot)|
                slot.unwrap_or_else(|| Cell::void(i / columns, i % columns)))
            .collect();

        Ok(Grid {
            rows,
            columns,
            cells
        })
    }

    /// Creates a grid in which every room is given by its row-major layout,
    /// one string slice per cell. Mainly useful for tests and examples.
    ///
    /// ```
    /// use murdoku::grid::Grid;
    ///
    /// let grid = Grid::from_layout(&[
    ///     &["hall", "hall"],
    ///     &["kitchen", "hall"]
    /// ]).unwrap();
    /// assert_eq!("kitchen", grid.get_cell(1, 0).unwrap().room());
    /// ```
    pub fn from_layout(layout: &[&[&str]]) -> GridResult<Grid> {
        let rows = layout.len();
        let columns = layout.iter().map(|row| row.len()).max().unwrap_or(0);
        let cells = layout.iter()
            .enumerate()
            .flat_map(|(row, rooms)| rooms.iter()
                .enumerate()
                .map(move |(column, room)|
                    Cell::new(row, column, *room, Vec::new())));
        Grid::new(rows, columns, cells)
    }

    /// The number of rows of this grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns of this grid.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Gets the cell at the specified position.
    ///
    /// # Errors
    ///
    /// If the position lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize) -> GridResult<&Cell> {
        if row >= self.rows || column >= self.columns {
            Err(GridError::OutOfBounds { row, column })
        }
        else {
            Ok(&self.cells[index(row, column, self.columns)])
        }
    }

    /// Returns a copy of this grid in which the cell at the position of
    /// `cell` is replaced by it.
    ///
    /// # Errors
    ///
    /// If the position of `cell` lies outside the grid. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn with_cell(&self, cell: Cell) -> GridResult<Grid> {
        let (row, column) = (cell.row, cell.column);
        self.get_cell(row, column)?;

        let mut grid = self.clone();
        grid.cells[index(row, column, self.columns)] = cell;
        Ok(grid)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Iterates over all cells a person may stand on, i.e. all cells that
    /// are not blocked.
    pub fn valid_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells().filter(|c| !c.is_blocked())
    }

    /// Iterates over all cells that belong to the given room.
    pub fn cells_in_room<'a>(&'a self, room: &'a str)
            -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells().filter(move |c| c.room() == room)
    }

    /// Iterates over all cells that contain the given object.
    pub fn cells_with_object(&self, object: ObjectType)
            -> impl Iterator<Item = &Cell> + '_ {
        self.cells().filter(move |c| c.has_object(object))
    }

    /// The identifiers of all rooms in this grid, excluding [VOID_ROOM].
    pub fn rooms(&self) -> BTreeSet<&str> {
        self.cells()
            .map(|c| c.room())
            .filter(|&room| room != VOID_ROOM)
            .collect()
    }

    /// Indicates whether some cell of this grid belongs to the given room.
    pub fn has_room(&self, room: &str) -> bool {
        room != VOID_ROOM && self.cells().any(|c| c.room() == room)
    }

    /// The cell adjacent to the given position in the given direction, or
    /// `None` if that position lies outside the grid.
    pub fn neighbor(&self, row: usize, column: usize, direction: Direction)
            -> Option<&Cell> {
        let (delta_row, delta_column) = direction.delta();
        let row = row as isize + delta_row;
        let column = column as isize + delta_column;

        if row < 0 || column < 0 {
            return None;
        }

        self.get_cell(row as usize, column as usize).ok()
    }

    /// The orthogonal neighbours of the given position that lie inside the
    /// grid (between 0 and 4 cells). Neighbours do not wrap around edges.
    pub fn neighbors(&self, row: usize, column: usize) -> Vec<&Cell> {
        Direction::ALL.iter()
            .filter_map(|&d| self.neighbor(row, column, d))
            .collect()
    }

    /// Indicates whether there is a wall next to `cell` in the given
    /// direction, that is, the neighbouring position is outside the grid or
    /// belongs to a different room than `cell`.
    pub fn is_wall(&self, cell: &Cell, direction: Direction) -> bool {
        match self.neighbor(cell.row, cell.column, direction) {
            Some(neighbor) => neighbor.room() != cell.room(),
            None => true
        }
    }

    /// Indicates whether `cell` lies in a corner of its room, i.e. there are
    /// walls in two directions that are 90° apart.
    pub fn is_corner(&self, cell: &Cell) -> bool {
        Direction::CORNERS.iter()
            .any(|&(a, b)| self.is_wall(cell, a) && self.is_wall(cell, b))
    }

    /// Indicates whether `cell` has no wall in any of the four directions.
    pub fn is_interior(&self, cell: &Cell) -> bool {
        Direction::ALL.iter().all(|&d| !self.is_wall(cell, d))
    }

    /// Indicates whether some orthogonal neighbour of `cell` in the same room
    /// contains the given object.
    pub fn is_next_to_object(&self, cell: &Cell, object: ObjectType) -> bool {
        self.neighbors(cell.row, cell.column).iter()
            .any(|n| n.room() == cell.room() && n.has_object(object))
    }
}
