#![forbid(unsafe_code)]

//! Puzzle data primitives for nonogram pagination.
//!
//! This crate provides the cell-level building blocks consumed by the
//! layout model:
//!
//! - [`Cell`] / [`CellGrid`] - rectangular grids of filled/blank cells
//! - [`ClueLine`] - run-length clue extraction for one row or column
//! - [`Tile`] - fixed-size sub-nonograms cut from a larger grid
//!
//! None of this solves or renders a puzzle; it only turns cell data into
//! the clue sequences the layout model groups into pages.

pub mod clue;
pub mod grid;
pub mod tile;

pub use clue::ClueLine;
pub use grid::{Cell, CellGrid, GridError};
pub use tile::{Tile, TilePosition, split_into_tiles};
