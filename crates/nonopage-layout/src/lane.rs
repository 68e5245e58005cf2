#![forbid(unsafe_code)]

//! Individual lanes.
//!
//! "Lanes" is the collective term for rows and columns. A lane owns its clue
//! line and a cell buffer that starts empty; solving and rendering
//! collaborators fill the cells later, the grouping tree never touches them.

use nonopage_core::{Cell, ClueLine};
use serde::Serialize;

/// A single row or column of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lane {
    clues: ClueLine,
    cells: Vec<Cell>,
}

impl Lane {
    /// Create a lane from its clue line. The cell buffer starts empty.
    #[must_use]
    pub fn new(clues: ClueLine) -> Self {
        Self {
            clues,
            cells: Vec::new(),
        }
    }

    /// The lane's clue line.
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &ClueLine {
        &self.clues
    }

    /// The lane's cells. Empty until an external collaborator fills them.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the cell buffer for solving/rendering collaborators.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}
