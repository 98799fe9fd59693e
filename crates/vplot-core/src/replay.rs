//! Replay a parsed path onto a surface.

use log::trace;

use crate::fit::Placement;
use crate::path::{ParsedPath, PathCommand};
use crate::surface::Surface;

/// Walk the command stream in order and forward each command to the
/// surface, applying `placement` to every point.
///
/// Pen commands pass through verbatim. Ordering matches the stream
/// exactly; nothing is skipped or deduplicated, even a move to the
/// current position (whether a no-op move has physical effect is the
/// surface's decision). Device coordinates are integral; fractional
/// targets truncate toward zero.
pub fn replay<S: Surface + ?Sized>(path: &ParsedPath, placement: Placement, surface: &mut S) {
    for command in path.commands() {
        match *command {
            PathCommand::PenUp => surface.pen_up(),
            PathCommand::PenDown => surface.pen_down(),
            PathCommand::MoveTo(p) => {
                let target = placement.apply(p);
                let (x, y) = (target.x as i32, target.y as i32);
                trace!("goto: ({x}, {y})");
                surface.goto(x, y);
            }
        }
    }
}
