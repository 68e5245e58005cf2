#![forbid(unsafe_code)]

//! Rectangular cell grids.
//!
//! A [`CellGrid`] is a row-major grid of [`Cell`]s. It is the input side of
//! the pipeline: clue extraction and tiling both start from a grid, and the
//! layout model never sees cells again after the clues are derived.

use crate::clue::ClueLine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single puzzle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// An empty cell. Padding always uses this value.
    #[default]
    Blank,
    /// A filled cell; contributes to clue runs.
    Filled,
}

impl Cell {
    /// Whether this cell counts toward a clue run.
    #[inline]
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }
}

/// Errors from grid construction and tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row's length disagrees with the first row's length.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
    /// A tile dimension was zero.
    ZeroTileSize {
        /// Requested tile width.
        width: usize,
        /// Requested tile height.
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} cells, expected {expected} to match the first row"
            ),
            Self::ZeroTileSize { width, height } => {
                write!(f, "tile size {width}x{height} must be non-zero in both dimensions")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular, row-major grid of cells.
///
/// Construction validates rectangularity once; afterwards every row has
/// exactly `width` cells. A 0x0 grid is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Build a grid from rows of cells.
    ///
    /// Every row must have the same length as the first; an empty row list
    /// yields the empty grid.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());
        let height = rows.len();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// An all-blank grid of the given dimensions.
    #[must_use]
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blank; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no cells.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= height()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[Cell] {
        let start = index * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |index| self.row(index))
    }

    /// Iterate over one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index >= width()`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Cell> + '_ {
        assert!(index < self.width, "column {index} out of bounds");
        (0..self.height).map(move |row| self.cells[row * self.width + index])
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Pad the right and bottom edges with blank cells until both dimensions
    /// are multiples of the tile size.
    ///
    /// A dimension already at a multiple (including zero) is left unchanged.
    pub fn padded_to_multiple(
        &self,
        tile_width: usize,
        tile_height: usize,
    ) -> Result<Self, GridError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(GridError::ZeroTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let pad_right = (tile_width - self.width % tile_width) % tile_width;
        let pad_bottom = (tile_height - self.height % tile_height) % tile_height;
        if pad_right == 0 && pad_bottom == 0 {
            return Ok(self.clone());
        }

        let width = self.width + pad_right;
        let height = self.height + pad_bottom;
        let mut cells = Vec::with_capacity(width * height);
        for row in self.rows() {
            cells.extend_from_slice(row);
            cells.extend(std::iter::repeat_n(Cell::Blank, pad_right));
        }
        cells.extend(std::iter::repeat_n(Cell::Blank, width * pad_bottom));

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Run-length clues for every row, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> Vec<ClueLine> {
        self.rows()
            .map(|row| ClueLine::from_cells(row.iter().copied()))
            .collect()
    }

    /// Run-length clues for every column, left to right.
    #[must_use]
    pub fn column_clues(&self) -> Vec<ClueLine> {
        (0..self.width)
            .map(|index| ClueLine::from_cells(self.column(index)))
            .collect()
    }
}
