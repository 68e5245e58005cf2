#![forbid(unsafe_code)]

//! Hierarchical lane grouping for nonogram pagination.
//!
//! A nonogram's rows and columns ("lanes") are organized into a tree of
//! fixed-size groups so a renderer can lay the puzzle out across printed
//! pages with consistent boundaries: with the default cascade, lanes group
//! into subgroups of 5 (visual separators) and those into top groups of 10
//! (page breaks).
//!
//! - [`LevelCascade`] - the fixed list of group sizes, innermost first
//! - [`Lane`] / [`LaneNode`] / [`LaneGroup`] - the grouping tree itself
//! - [`LaneTree`] - one populated tree per axis
//! - [`Nonogram`] - the row and column trees of one puzzle
//!
//! Insertion is greedy and strictly left-to-right: lanes are never moved
//! between groups once placed, a subgroup is only completed by filling it to
//! capacity, and the final group at every level may be partial. Group
//! boundaries are therefore deterministic and independent of total lane
//! count.
//!
//! # Example
//!
//! ```
//! use nonopage_core::ClueLine;
//! use nonopage_layout::Nonogram;
//!
//! let mut puzzle = Nonogram::new();
//! puzzle
//!     .populate(
//!         vec![ClueLine::new(vec![1]), ClueLine::new(vec![2, 2])],
//!         vec![ClueLine::new(vec![1]); 3],
//!     )
//!     .unwrap();
//!
//! assert_eq!(puzzle.horizontal().lane_count(), 2);
//! assert_eq!(puzzle.vertical().lane_count(), 3);
//! ```

pub mod cascade;
pub mod group;
pub mod lane;
pub mod nonogram;
pub mod tree;

pub use cascade::{CascadeError, DEFAULT_LEVEL_SIZES, LevelCascade};
pub use group::{LaneGroup, LaneIter, LaneIterMut, LaneNode};
pub use lane::Lane;
pub use nonogram::Nonogram;
pub use tree::{LaneTree, PopulateError};
