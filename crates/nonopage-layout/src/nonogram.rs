#![forbid(unsafe_code)]

//! The whole-puzzle aggregate.

use crate::cascade::LevelCascade;
use crate::tree::{LaneTree, PopulateError};
use nonopage_core::{CellGrid, ClueLine};
use serde::Serialize;

/// One nonogram's lanes, grouped for pagination on both axes.
///
/// Holds two independent trees: `horizontal` for rows, `vertical` for
/// columns. Row and column counts need not match. Populated exactly once,
/// read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Nonogram {
    horizontal: LaneTree,
    vertical: LaneTree,
}

impl Nonogram {
    /// An empty nonogram with the default cascade on both axes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cascade(LevelCascade::default())
    }

    /// An empty nonogram using the given cascade for both axes.
    #[must_use]
    pub fn with_cascade(cascade: LevelCascade) -> Self {
        Self {
            horizontal: LaneTree::new(cascade.clone()),
            vertical: LaneTree::new(cascade),
        }
    }

    /// Populate both axes from their clue lists.
    ///
    /// Single-use, and atomic: a repeated call fails before either axis is
    /// touched.
    pub fn populate<R, C>(&mut self, row_clues: R, column_clues: C) -> Result<(), PopulateError>
    where
        R: IntoIterator<Item = ClueLine>,
        C: IntoIterator<Item = ClueLine>,
    {
        if self.horizontal.is_populated() || self.vertical.is_populated() {
            return Err(PopulateError::AlreadyPopulated);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("nonogram_populate").entered();

        self.horizontal.fill(row_clues);
        self.vertical.fill(column_clues);
        Ok(())
    }

    /// Build a populated nonogram straight from a solved grid, extracting
    /// row and column clues with the default cascade.
    #[must_use]
    pub fn from_grid(grid: &CellGrid) -> Self {
        Self::from_grid_with_cascade(grid, LevelCascade::default())
    }

    /// Like [`from_grid`](Self::from_grid) with an explicit cascade.
    #[must_use]
    pub fn from_grid_with_cascade(grid: &CellGrid, cascade: LevelCascade) -> Self {
        let mut nonogram = Self::with_cascade(cascade);
        nonogram.horizontal.fill(grid.row_clues());
        nonogram.vertical.fill(grid.column_clues());
        nonogram
    }

    /// The row tree.
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> &LaneTree {
        &self.horizontal
    }

    /// The column tree.
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> &LaneTree {
        &self.vertical
    }
}

impl Default for Nonogram {
    fn default() -> Self {
        Self::new()
    }
}
