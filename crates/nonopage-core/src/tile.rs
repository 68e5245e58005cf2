#![forbid(unsafe_code)]

//! Fixed-size tiling of a grid into sub-nonograms.
//!
//! A large solved grid is cut into tiles of a fixed cell size (5x5 by
//! default in the surrounding tooling), each tile carrying its own row and
//! column clues so it can be solved independently. The source grid is padded
//! with blank cells so every tile is full-size.

use crate::clue::ClueLine;
use crate::grid::{Cell, CellGrid, GridError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a tile within the tiling, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    /// Tile row, top to bottom.
    pub row: usize,
    /// Tile column, left to right.
    pub col: usize,
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One sub-nonogram cut from a larger grid, with its clues precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    position: TilePosition,
    grid: CellGrid,
    row_clues: Vec<ClueLine>,
    column_clues: Vec<ClueLine>,
}

impl Tile {
    /// Where this tile sits in the tiling.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> TilePosition {
        self.position
    }

    /// The tile's cell grid, already padded to full tile size.
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Clues for each tile row, top to bottom.
    #[must_use]
    pub fn row_clues(&self) -> &[ClueLine] {
        &self.row_clues
    }

    /// Clues for each tile column, left to right.
    #[must_use]
    pub fn column_clues(&self) -> &[ClueLine] {
        &self.column_clues
    }
}

/// Cut a grid into `tile_width` x `tile_height` tiles in row-major order.
///
/// The grid is first padded with blank cells so both dimensions are exact
/// multiples of the tile size. An empty grid produces no tiles.
///
/// # Example
///
/// ```
/// use nonopage_core::{CellGrid, split_into_tiles};
///
/// let grid = CellGrid::blank(9, 10);
/// let tiles = split_into_tiles(&grid, 5, 5).unwrap();
/// assert_eq!(tiles.len(), 4);
/// assert_eq!(tiles[1].position().row, 0);
/// assert_eq!(tiles[1].position().col, 1);
/// ```
pub fn split_into_tiles(
    grid: &CellGrid,
    tile_width: usize,
    tile_height: usize,
) -> Result<Vec<Tile>, GridError> {
    let padded = grid.padded_to_multiple(tile_width, tile_height)?;
    if padded.is_empty() {
        return Ok(Vec::new());
    }

    let tile_rows = padded.height() / tile_height;
    let tile_cols = padded.width() / tile_width;
    let mut tiles = Vec::with_capacity(tile_rows * tile_cols);

    for tile_row in 0..tile_rows {
        for tile_col in 0..tile_cols {
            let origin_y = tile_row * tile_height;
            let origin_x = tile_col * tile_width;
            let rows: Vec<Vec<Cell>> = (origin_y..origin_y + tile_height)
                .map(|y| padded.row(y)[origin_x..origin_x + tile_width].to_vec())
                .collect();
            // Rows are cut to the exact tile width, so this cannot be ragged.
            let tile_grid = CellGrid::from_rows(rows)?;
            let row_clues = tile_grid.row_clues();
            let column_clues = tile_grid.column_clues();
            tiles.push(Tile {
                position: TilePosition {
                    row: tile_row,
                    col: tile_col,
                },
                grid: tile_grid,
                row_clues,
                column_clues,
            });
        }
    }

    Ok(tiles)
}
