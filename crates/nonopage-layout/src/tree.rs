#![forbid(unsafe_code)]

//! Per-axis lane trees.

use crate::cascade::LevelCascade;
use crate::group::{LaneGroup, LaneIter, LaneIterMut};
use crate::lane::Lane;
use nonopage_core::ClueLine;
use serde::Serialize;
use std::fmt;

/// The grouping tree for one axis (all rows, or all columns).
///
/// Owns the cascade and the root [`LaneGroup`]. A tree is populated at most
/// once; the grouping structure is immutable afterwards (lane cells remain
/// fillable through [`iter_lanes_mut`](Self::iter_lanes_mut)).
#[derive(Debug, Clone, Serialize)]
pub struct LaneTree {
    cascade: LevelCascade,
    root: LaneGroup,
    populated: bool,
}

impl LaneTree {
    /// An empty, unpopulated tree for the given cascade.
    #[must_use]
    pub fn new(cascade: LevelCascade) -> Self {
        let root = LaneGroup::new_root(&cascade);
        Self {
            cascade,
            root,
            populated: false,
        }
    }

    /// Construct one lane per clue line, in order, and insert each.
    ///
    /// Single-use: a second call fails with [`PopulateError::AlreadyPopulated`]
    /// rather than appending to the existing tree. Populating with an empty
    /// input succeeds (and consumes the single use).
    pub fn populate<I>(&mut self, clue_lines: I) -> Result<(), PopulateError>
    where
        I: IntoIterator<Item = ClueLine>,
    {
        if self.populated {
            return Err(PopulateError::AlreadyPopulated);
        }
        self.fill(clue_lines);
        Ok(())
    }

    /// Infallible populate path shared with [`Nonogram`](crate::Nonogram),
    /// which performs its own single-use check across both axes.
    pub(crate) fn fill<I>(&mut self, clue_lines: I)
    where
        I: IntoIterator<Item = ClueLine>,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("lane_tree_fill").entered();

        for clues in clue_lines {
            self.root.insert(&self.cascade, Lane::new(clues));
        }
        self.populated = true;
    }

    /// The root group.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &LaneGroup {
        &self.root
    }

    /// The cascade this tree was built for.
    #[inline]
    #[must_use]
    pub fn cascade(&self) -> &LevelCascade {
        &self.cascade
    }

    /// Total lane count in the tree.
    #[inline]
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.root.lane_count()
    }

    /// Whether [`populate`](Self::populate) has already run.
    #[inline]
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Depth-first iterator over the lanes, in insertion order.
    #[must_use]
    pub fn iter_lanes(&self) -> LaneIter<'_> {
        self.root.iter_lanes()
    }

    /// Mutable lane iterator for cell-filling collaborators.
    pub fn iter_lanes_mut(&mut self) -> LaneIterMut<'_> {
        self.root.iter_lanes_mut()
    }
}

impl Default for LaneTree {
    fn default() -> Self {
        Self::new(LevelCascade::default())
    }
}

/// Errors from tree population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulateError {
    /// The tree was already populated; grouping is single-use.
    AlreadyPopulated,
}

impl fmt::Display for PopulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPopulated => {
                f.write_str("lane tree is already populated; population is single-use")
            }
        }
    }
}

impl std::error::Error for PopulateError {}
