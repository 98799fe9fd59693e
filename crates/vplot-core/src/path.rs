//! The parsed path command stream.

use crate::types::{Extent, Point};

/// A single plotter command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Lift the pen.
    PenUp,
    /// Lower the pen.
    PenDown,
    /// Move the head to an absolute point in path-local coordinates.
    MoveTo(Point),
}

/// A parsed path: the command stream plus the extent of its points.
///
/// Produced by [`parse`](crate::parse); immutable afterward. The stream
/// stores resolved absolute points regardless of the source coordinate
/// mode, and the extent is exact over them. A path with zero `MoveTo`
/// commands has no extent and cannot be auto-fitted.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPath {
    pub(crate) commands: Vec<PathCommand>,
    pub(crate) extent: Option<Extent>,
}

impl ParsedPath {
    /// The command stream, in input order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Bounding box of all points, or `None` if the path has no points.
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// Whether the path resolved at least one point.
    pub fn has_points(&self) -> bool {
        self.extent.is_some()
    }
}
