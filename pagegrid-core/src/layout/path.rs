//! Path codec for addressing nodes in the layout tree
//!
//! A path is an ordered sequence of sibling indices from the root down
//! to a node, encoded as a `-`-separated string ("0-2-1" addresses the
//! second leaf of the third column of the first row). Its depth equals
//! the nesting depth of the node it addresses: 1 for a row, 2 for a
//! column, 3 for a leaf.
//!
//! Paths are positional: indices shift whenever siblings are added or
//! removed, so a path must always be resolved against the current tree
//! value, never one captured before an earlier mutation.

use std::fmt;
use std::str::FromStr;

use super::error::{LayoutError, LayoutResult};

/// Separator between index segments in the textual encoding.
pub const PATH_SEPARATOR: char = '-';

/// An ordered sequence of sibling indices addressing one tree node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreePath {
    segments: Vec<usize>,
}

impl TreePath {
    /// Creates a path from raw index segments.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty; an empty path addresses nothing.
    #[must_use]
    pub fn new(segments: Vec<usize>) -> Self {
        assert!(!segments.is_empty(), "a path must have at least one segment");
        Self { segments }
    }

    /// Decodes a textual path into index segments.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MalformedPath`] if the string is empty or
    /// any segment is not a non-negative integer.
    pub fn parse(raw: &str) -> LayoutResult<Self> {
        if raw.is_empty() {
            return Err(LayoutError::MalformedPath {
                path: raw.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        let segments = raw
            .split(PATH_SEPARATOR)
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| LayoutError::MalformedPath {
                        path: raw.to_string(),
                        reason: format!("segment {segment:?} is not a non-negative integer"),
                    })
            })
            .collect::<LayoutResult<Vec<usize>>>()?;
        Ok(Self { segments })
    }

    /// Returns the number of segments, i.e. the nesting depth of the
    /// addressed node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the index segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Returns the final segment: the node's index within its parent.
    #[must_use]
    pub fn last(&self) -> usize {
        *self
            .segments
            .last()
            .unwrap_or_else(|| unreachable!("paths are never empty"))
    }

    /// Returns the path of the parent container.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoParent`] for a depth-1 path; rows sit
    /// directly under the root, which has no path of its own.
    pub fn parent(&self) -> LayoutResult<Self> {
        if self.segments.len() == 1 {
            return Err(LayoutError::NoParent(self.clone()));
        }
        Ok(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns all segments but the last, without allocating.
    ///
    /// Empty for a depth-1 path: top-level rows all share the root as
    /// their parent.
    #[must_use]
    pub fn parent_segments(&self) -> &[usize] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Returns true if both paths address children of the same parent
    /// container (including the root for depth-1 paths).
    #[must_use]
    pub fn same_parent(&self, other: &Self) -> bool {
        self.depth() == other.depth() && self.parent_segments() == other.parent_segments()
    }

    /// Returns the path of the child at `index` under this node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(index);
        Self { segments }
    }
}

impl FromStr for TreePath {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}
