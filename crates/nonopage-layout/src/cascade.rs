#![forbid(unsafe_code)]

//! Group size cascade configuration.

use serde::Serialize;
use std::fmt;

/// Default level sizes: subgroups of 5 lanes, top groups of 10.
pub const DEFAULT_LEVEL_SIZES: [usize; 2] = [5, 10];

/// The fixed, ordered list of group sizes, innermost level first.
///
/// `[5, 10]` means: individual lanes are grouped into subgroups of up to 5,
/// and those subgroups into top-level groups of up to 10 lanes, with no
/// further nesting above that. The cascade's length fixes the nesting depth
/// of the whole tree. An empty cascade is valid and means the root group
/// holds lanes directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LevelCascade {
    sizes: Vec<usize>,
}

impl LevelCascade {
    /// Create a cascade from level sizes, innermost first.
    ///
    /// Every level needs capacity for at least one lane.
    pub fn new(sizes: Vec<usize>) -> Result<Self, CascadeError> {
        if let Some(level) = sizes.iter().position(|&size| size == 0) {
            return Err(CascadeError::ZeroLevelSize { level });
        }
        Ok(Self { sizes })
    }

    /// The level sizes, innermost first.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of grouping levels.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.sizes.len()
    }

    /// Size of the given level.
    ///
    /// Crate-internal: callers only hold level indices the cascade produced,
    /// so `level` is always in range.
    #[inline]
    pub(crate) fn size_at(&self, level: usize) -> usize {
        self.sizes[level]
    }

    /// Index of the outermost level, or `None` for an empty cascade.
    #[inline]
    pub(crate) fn top_level(&self) -> Option<usize> {
        self.sizes.len().checked_sub(1)
    }
}

impl Default for LevelCascade {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_LEVEL_SIZES.to_vec(),
        }
    }
}

/// Errors from cascade construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeError {
    /// A level size of zero can never accept a lane.
    ZeroLevelSize {
        /// Index of the zero-sized level, innermost first.
        level: usize,
    },
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLevelSize { level } => {
                write!(f, "grouping level {level} has size 0, needs at least 1")
            }
        }
    }
}

impl std::error::Error for CascadeError {}
