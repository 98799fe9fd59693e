//! The combined parse → fit → replay pipeline.

use crate::error::PlotError;
use crate::fit::Placement;
use crate::parse::parse;
use crate::replay::replay;
use crate::surface::Surface;
use crate::types::Canvas;

/// Parse `description`, fit it into `fill` of the surface's canvas, and
/// replay the transformed commands.
///
/// The stages run strictly in sequence: fitting needs the finalized
/// extent, so nothing is sent to the surface until the whole description
/// has parsed successfully. A malformed path therefore issues no draw
/// calls at all.
///
/// # Errors
///
/// Any [`ParseError`](crate::ParseError) or [`FitError`](crate::FitError),
/// wrapped in [`PlotError`]. The caller decides whether a failing shape
/// halts the document or is skipped.
pub fn plot<S: Surface + ?Sized>(
    description: &str,
    fill: f64,
    surface: &mut S,
) -> Result<(), PlotError> {
    let path = parse(description)?;
    let canvas = Canvas::new(surface.width(), surface.height());
    let placement = Placement::fit_path(&path, canvas, fill)?;
    replay(&path, placement, surface);
    Ok(())
}
