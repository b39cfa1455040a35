//! This module reads puzzles from their JSON representation. A puzzle file
//! looks as follows.
//!
//! ```json
//! {
//!     "grid": {
//!         "rows": 2,
//!         "cols": 2,
//!         "cells": [
//!             { "row": 0, "col": 0, "room": "hall", "objects": ["window"] },
//!             { "row": 0, "col": 1, "room": "hall" },
//!             { "row": 1, "col": 0, "room": "hall" },
//!             { "row": 1, "col": 1, "room": "hall" }
//!         ]
//!     },
//!     "people": ["Axel", "Vincent"],
//!     "victim": "Vincent",
//!     "clues": [
//!         { "type": "on_object", "person": "Axel", "object": "window" }
//!     ]
//! }
//! ```
//!
//! Positions without a cell definition become void cells, which belong to no
//! room and can not be occupied. Object names are case-insensitive. Clues are
//! tagged by their `type`, see [Clue] for the available kinds and their
//! fields.

use crate::Puzzle;
use crate::clue::Clue;
use crate::error::{GridResult, LoadResult, PuzzleResult};
use crate::grid::{Cell, Grid, ObjectType};

use log::debug;

use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

/// The definition of a single cell in a puzzle file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CellDefinition {

    /// The row of the cell.
    pub row: usize,

    /// The column of the cell.
    pub col: usize,

    /// The room the cell belongs to.
    pub room: String,

    /// The objects on the cell. May be omitted if there are none.
    #[serde(default)]
    pub objects: Vec<ObjectType>
}

/// The definition of the grid in a puzzle file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GridDefinition {

    /// The number of rows.
    pub rows: usize,

    /// The number of columns.
    pub cols: usize,

    /// The defined cells, in any order.
    pub cells: Vec<CellDefinition>
}

impl GridDefinition {

    /// Builds the grid, filling undefined positions with void cells.
    ///
    /// # Errors
    ///
    /// Any error of [Grid::new].
    pub fn build(self) -> GridResult<Grid> {
        let cells = self.cells.into_iter()
            .map(|c| Cell::new(c.row, c.col, c.room, c.objects));
        Grid::new(self.rows, self.cols, cells)
    }
}

/// The content of a puzzle file.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PuzzleDefinition {

    /// The grid.
    pub grid: GridDefinition,

    /// All people, including the victim.
    pub people: Vec<String>,

    /// The victim.
    pub victim: String,

    /// The clues. May be omitted for a puzzle without clues.
    #[serde(default)]
    pub clues: Vec<Clue>
}

impl PuzzleDefinition {

    /// Builds and validates the puzzle.
    ///
    /// # Errors
    ///
    /// Any error of [GridDefinition::build] or [Puzzle::new].
    pub fn build(self) -> PuzzleResult<Puzzle> {
        let grid = self.grid.build()?;
        Puzzle::new(grid, self.people, self.victim, self.clues)
    }
}

/// Parses a puzzle from its JSON representation.
///
/// # Errors
///
/// * `LoadError::Json` if the text is not a puzzle document. This includes
/// unknown clue types, unknown objects and missing clue arguments.
/// * `LoadError::Puzzle` if the document describes an invalid puzzle.
pub fn parse_puzzle(json: &str) -> LoadResult<Puzzle> {
    let definition: PuzzleDefinition = serde_json::from_str(json)?;
    debug!("parsed puzzle with {}x{} grid, {} people and {} clues",
        definition.grid.rows, definition.grid.cols, definition.people.len(),
        definition.clues.len());
    Ok(definition.build()?)
}

/// Reads and parses the puzzle file at the given path.
///
/// # Errors
///
/// * `LoadError::Io` if the file can not be read.
/// * Any error of [parse_puzzle].
pub fn load_puzzle(path: impl AsRef<Path>) -> LoadResult<Puzzle> {
    let path = path.as_ref();
    debug!("loading puzzle from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_puzzle(&json)
}
