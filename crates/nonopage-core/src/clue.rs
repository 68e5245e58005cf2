#![forbid(unsafe_code)]

//! Run-length clue lines.
//!
//! A clue line is the ordered sequence of run lengths for one lane (row or
//! column): `[2, 1]` means a run of 2 filled cells, a gap, then a run of 1.
//! A blank lane has an empty clue line.

use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered run-length clues for a single lane.
///
/// # Example
///
/// ```
/// use nonopage_core::{Cell, ClueLine};
///
/// let cells = [Cell::Filled, Cell::Filled, Cell::Blank, Cell::Filled];
/// let line = ClueLine::from_cells(cells);
/// assert_eq!(line.values(), &[2, 1]);
/// assert!(!line.is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClueLine {
    runs: Vec<u32>,
}

impl ClueLine {
    /// Create a clue line from explicit run lengths.
    #[must_use]
    pub fn new(runs: Vec<u32>) -> Self {
        Self { runs }
    }

    /// A blank lane: no runs at all.
    #[must_use]
    pub const fn blank() -> Self {
        Self { runs: Vec::new() }
    }

    /// Run-length encode the filled runs of a line of cells.
    ///
    /// A line with no filled cells yields a blank clue line.
    #[must_use]
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut runs = Vec::new();
        let mut current = 0u32;
        for cell in cells {
            if cell.is_filled() {
                current += 1;
            } else if current > 0 {
                runs.push(current);
                current = 0;
            }
        }
        if current > 0 {
            runs.push(current);
        }
        Self { runs }
    }

    /// The run lengths, in solving order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.runs
    }

    /// Whether this lane has no filled runs.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runs.
    #[inline]
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

impl From<Vec<u32>> for ClueLine {
    fn from(runs: Vec<u32>) -> Self {
        Self::new(runs)
    }
}

impl FromIterator<u32> for ClueLine {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ClueLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.runs.is_empty() {
            return f.write_str("0");
        }
        let mut first = true;
        for run in &self.runs {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{run}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(bits: &[u8]) -> Vec<Cell> {
        bits.iter()
            .map(|&b| if b == 0 { Cell::Blank } else { Cell::Filled })
            .collect()
    }

    #[test]
    fn encodes_runs() {
        let line = ClueLine::from_cells(cells(&[1, 1, 0, 0, 1]));
        assert_eq!(line.values(), &[2, 1]);
        assert_eq!(line.run_count(), 2);
    }

    #[test]
    fn trailing_run_is_closed() {
        let line = ClueLine::from_cells(cells(&[0, 1, 1, 1]));
        assert_eq!(line.values(), &[3]);
    }

    #[test]
    fn full_line_is_one_run() {
        let line = ClueLine::from_cells(cells(&[1, 1, 1, 1]));
        assert_eq!(line.values(), &[4]);
    }

    #[test]
    fn blank_line_has_no_runs() {
        let line = ClueLine::from_cells(cells(&[0, 0, 0]));
        assert!(line.is_blank());
        assert_eq!(line, ClueLine::blank());
    }

    #[test]
    fn empty_input_is_blank() {
        let line = ClueLine::from_cells(cells(&[]));
        assert!(line.is_blank());
    }

    #[test]
    fn display_joins_runs() {
        assert_eq!(ClueLine::new(vec![2, 1, 4]).to_string(), "2 1 4");
        assert_eq!(ClueLine::blank().to_string(), "0");
    }

    #[test]
    fn serde_is_transparent() {
        let line = ClueLine::new(vec![3, 1]);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "[3,1]");
        let back: ClueLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
