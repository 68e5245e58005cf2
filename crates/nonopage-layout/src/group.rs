#![forbid(unsafe_code)]

//! The grouping tree.
//!
//! A [`LaneGroup`] holds an ordered sequence of [`LaneNode`] children: either
//! lanes directly (at the innermost level) or subgroups. Insertion is greedy
//! and strictly left-to-right, one node per nesting level per lane:
//!
//! 1. A leaf-level group appends the lane directly.
//! 2. Otherwise, if there are no children yet or the last child is full for
//!    its level, a new subgroup is started; the insert is then delegated to
//!    the last child, recursively.
//! 3. The group's own lane count is incremented.
//!
//! Children are append-only and never reordered, split, or rebalanced, so
//! every non-final child of a group is exactly full and only the last child
//! may be partial.

use crate::cascade::LevelCascade;
use crate::lane::Lane;
use serde::Serialize;
use std::ops::Range;

/// A node in the grouping tree: a single lane or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneNode {
    /// A leaf lane.
    Lane(Lane),
    /// A nested group of lanes.
    Group(LaneGroup),
}

impl LaneNode {
    /// Total count of lanes transitively contained beneath this node.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        match self {
            Self::Lane(_) => 1,
            Self::Group(group) => group.lane_count(),
        }
    }

    /// Whether this node is a leaf lane.
    #[inline]
    #[must_use]
    pub const fn is_lane(&self) -> bool {
        matches!(self, Self::Lane(_))
    }

    /// The lane, if this node is a leaf.
    #[must_use]
    pub fn as_lane(&self) -> Option<&Lane> {
        match self {
            Self::Lane(lane) => Some(lane),
            Self::Group(_) => None,
        }
    }

    /// The group, if this node is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&LaneGroup> {
        match self {
            Self::Lane(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

/// An ordered group of lanes or subgroups for one cascade level.
///
/// `level` is the cascade index governing this group's children: children
/// fill to `cascade.size_at(level)` lanes each. A group with no level holds
/// lanes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneGroup {
    children: Vec<LaneNode>,
    #[serde(skip)]
    level: Option<usize>,
    lane_count: usize,
}

impl LaneGroup {
    /// The outermost group for the given cascade.
    pub(crate) fn new_root(cascade: &LevelCascade) -> Self {
        Self::at_level(cascade.top_level())
    }

    fn at_level(level: Option<usize>) -> Self {
        Self {
            children: Vec::new(),
            level,
            lane_count: 0,
        }
    }

    /// Insert one lane at the end of the tree, creating subgroups on demand.
    ///
    /// The cascade must be the one this tree was built for; it supplies the
    /// fill size for each level.
    pub(crate) fn insert(&mut self, cascade: &LevelCascade, lane: Lane) {
        match self.level {
            None => self.children.push(LaneNode::Lane(lane)),
            Some(level) => {
                let fill = cascade.size_at(level);
                let start_new = match self.children.last() {
                    Some(child) => child.lane_count() == fill,
                    None => true,
                };
                if start_new {
                    self.children
                        .push(LaneNode::Group(Self::at_level(level.checked_sub(1))));
                }
                match self.children.last_mut() {
                    Some(LaneNode::Group(group)) => group.insert(cascade, lane),
                    // Children of a leveled group are created above as groups
                    // and nothing ever replaces them.
                    _ => unreachable!("leveled group children are always groups"),
                }
            }
        }
        self.lane_count += 1;
    }

    /// Total count of lanes transitively contained beneath this group.
    #[inline]
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// The ordered children. Iterating twice yields the same sequence.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[LaneNode] {
        &self.children
    }

    /// Whether this group holds lanes directly rather than subgroups.
    #[inline]
    #[must_use]
    pub const fn holds_lanes(&self) -> bool {
        self.level.is_none()
    }

    /// Half-open ranges of lane indices covered by each child, in order.
    ///
    /// Renderers use these spans to place separators and page breaks: the end
    /// of each top-level span is a page boundary, the end of each subgroup
    /// span a separator.
    pub fn child_spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.children.iter().scan(0usize, |offset, child| {
            let start = *offset;
            *offset += child.lane_count();
            Some(start..*offset)
        })
    }

    /// Depth-first iterator over the leaf lanes, in insertion order.
    #[must_use]
    pub fn iter_lanes(&self) -> LaneIter<'_> {
        LaneIter {
            stack: vec![self.children.iter()],
        }
    }

    /// Like [`iter_lanes`](Self::iter_lanes), with mutable access so
    /// collaborators can fill lane cells. The tree structure itself stays
    /// fixed.
    pub fn iter_lanes_mut(&mut self) -> LaneIterMut<'_> {
        LaneIterMut {
            stack: vec![self.children.iter_mut()],
        }
    }
}

/// Depth-first lane iterator. See [`LaneGroup::iter_lanes`].
#[derive(Debug)]
pub struct LaneIter<'a> {
    stack: Vec<std::slice::Iter<'a, LaneNode>>,
}

impl<'a> Iterator for LaneIter<'a> {
    type Item = &'a Lane;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(LaneNode::Lane(lane)) => return Some(lane),
                Some(LaneNode::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Mutable depth-first lane iterator. See [`LaneGroup::iter_lanes_mut`].
#[derive(Debug)]
pub struct LaneIterMut<'a> {
    stack: Vec<std::slice::IterMut<'a, LaneNode>>,
}

impl<'a> Iterator for LaneIterMut<'a> {
    type Item = &'a mut Lane;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(LaneNode::Lane(lane)) => return Some(lane),
                Some(LaneNode::Group(group)) => self.stack.push(group.children.iter_mut()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
