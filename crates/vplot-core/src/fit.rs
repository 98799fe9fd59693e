//! Scale-and-center fitting of a path extent onto a canvas.
//!
//! Fitting is aspect-ratio preserving: a single uniform scale is chosen so
//! the path's binding dimension occupies the requested fraction of the
//! canvas, then the scaled bounding box is centered. Both computations are
//! pure functions of their inputs (plus debug logging).

use log::debug;

use crate::error::FitError;
use crate::path::ParsedPath;
use crate::types::{Canvas, Extent, Point};

/// Uniform scale plus centering offset mapping path points into canvas
/// space.
///
/// Computed once per path after parsing finalizes the extent; immutable
/// afterward. A path replayed onto a different canvas needs a new
/// placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    pub scale: f64,
    pub offset: Point,
}

impl Placement {
    /// Compute the placement that fits `extent` into `fill` of `canvas`.
    pub fn fit(extent: &Extent, canvas: Canvas, fill: f64) -> Result<Self, FitError> {
        let scale = scale_to_fit(extent, canvas, fill)?;
        let offset = center_offset(extent, canvas, scale);
        debug!("scale: {scale}");
        debug!("offset: ({}, {})", offset.x, offset.y);
        Ok(Self { scale, offset })
    }

    /// Like [`Placement::fit`], but fails with [`FitError::EmptyPath`] for
    /// a path that resolved no points.
    pub fn fit_path(path: &ParsedPath, canvas: Canvas, fill: f64) -> Result<Self, FitError> {
        let extent = path.extent().ok_or(FitError::EmptyPath)?;
        Self::fit(&extent, canvas, fill)
    }

    /// Map a path-local point into canvas space.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset.x,
            p.y * self.scale + self.offset.y,
        )
    }
}

/// The uniform scale under which `extent` occupies `fill` of `canvas` on
/// the binding axis.
///
/// A zero-width or zero-height extent (a perfectly vertical or horizontal
/// path) cannot be proportionally scaled on that axis, so the axis is
/// treated as non-constraining and the other axis alone decides. Only when
/// both axes are zero is [`FitError::DegenerateExtent`] returned; the
/// division below can never see a zero extent.
///
/// `fill` must be positive and finite. Values above 1 are accepted; the
/// scaled path then exceeds the canvas and the centering offset goes
/// negative.
pub fn scale_to_fit(extent: &Extent, canvas: Canvas, fill: f64) -> Result<f64, FitError> {
    if !fill.is_finite() || fill <= 0.0 {
        return Err(FitError::InvalidFillFraction(fill));
    }

    let width = extent.width();
    let height = extent.height();
    let scale_x = (width > 0.0).then(|| canvas.width * fill / width);
    let scale_y = (height > 0.0).then(|| canvas.height * fill / height);

    match (scale_x, scale_y) {
        (Some(sx), Some(sy)) => Ok(sx.min(sy)),
        (Some(sx), None) => Ok(sx),
        (None, Some(sy)) => Ok(sy),
        (None, None) => Err(FitError::DegenerateExtent),
    }
}

/// The offset that centers the scaled extent within the canvas.
///
/// Not clamped: if the scaled path exceeds the canvas the offset is
/// negative, which is the caller's signal to pick a smaller fill fraction.
pub fn center_offset(extent: &Extent, canvas: Canvas, scale: f64) -> Point {
    Point::new(
        (canvas.width - extent.width() * scale) / 2.0,
        (canvas.height - extent.height() * scale) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn extent(min: (f64, f64), max: (f64, f64)) -> Extent {
        let mut e = Extent::from_point(Point::new(min.0, min.1));
        e.include(Point::new(max.0, max.1));
        e
    }

    #[test]
    fn smaller_axis_scale_wins() {
        // width 10, height 20 on a 100x100 canvas at half fill:
        // min(100*0.5/10, 100*0.5/20) = min(5, 2.5) = 2.5
        let e = extent((0.0, 0.0), (10.0, 20.0));
        let canvas = Canvas::new(100.0, 100.0);
        let scale = scale_to_fit(&e, canvas, 0.5).unwrap();
        assert_eq!(scale, 2.5);
    }

    #[test]
    fn offset_centers_scaled_extent() {
        let e = extent((0.0, 0.0), (10.0, 20.0));
        let canvas = Canvas::new(100.0, 100.0);
        let offset = center_offset(&e, canvas, 2.5);
        assert_eq!(offset, Point::new(37.5, 25.0));
    }

    #[test]
    fn zero_height_axis_is_non_constraining() {
        let e = extent((0.0, 5.0), (10.0, 5.0));
        let canvas = Canvas::new(100.0, 200.0);
        let scale = scale_to_fit(&e, canvas, 0.5).unwrap();
        assert_eq!(scale, 5.0);
    }

    #[test]
    fn zero_width_axis_is_non_constraining() {
        let e = extent((5.0, 0.0), (5.0, 10.0));
        let canvas = Canvas::new(100.0, 200.0);
        let scale = scale_to_fit(&e, canvas, 0.5).unwrap();
        assert_eq!(scale, 10.0);
    }

    #[test]
    fn single_point_extent_is_degenerate() {
        let e = Extent::from_point(Point::new(5.0, 5.0));
        let canvas = Canvas::new(100.0, 100.0);
        assert_eq!(
            scale_to_fit(&e, canvas, 0.5),
            Err(FitError::DegenerateExtent)
        );
    }

    #[test]
    fn fill_fraction_must_be_positive_and_finite() {
        let e = extent((0.0, 0.0), (10.0, 10.0));
        let canvas = Canvas::new(100.0, 100.0);
        for bad in [0.0, -0.5, f64::INFINITY, f64::NAN] {
            assert!(matches!(
                scale_to_fit(&e, canvas, bad),
                Err(FitError::InvalidFillFraction(_))
            ));
        }
    }

    #[test]
    fn overfill_produces_negative_offset() {
        let e = extent((0.0, 0.0), (10.0, 10.0));
        let canvas = Canvas::new(100.0, 100.0);
        let scale = scale_to_fit(&e, canvas, 2.0).unwrap();
        assert_eq!(scale, 20.0);
        let offset = center_offset(&e, canvas, scale);
        assert_eq!(offset, Point::new(-50.0, -50.0));
    }

    #[test]
    fn placement_applies_scale_then_offset() {
        let placement = Placement {
            scale: 2.5,
            offset: Point::new(37.5, 25.0),
        };
        assert_eq!(placement.apply(Point::new(0.0, 0.0)), Point::new(37.5, 25.0));
        assert_eq!(placement.apply(Point::new(10.0, 20.0)), Point::new(62.5, 75.0));
    }

    #[test]
    fn fit_path_rejects_pointless_path() {
        let path = parse("").unwrap();
        let canvas = Canvas::new(100.0, 100.0);
        assert_eq!(
            Placement::fit_path(&path, canvas, 0.5),
            Err(FitError::EmptyPath)
        );
    }

    #[test]
    fn fit_never_produces_non_finite_values() {
        // Degenerate-but-fittable paths still yield finite placements.
        let path = parse("M 0,5 L 10,5").unwrap();
        let canvas = Canvas::new(100.0, 100.0);
        let placement = Placement::fit_path(&path, canvas, 0.5).unwrap();
        assert!(placement.scale.is_finite());
        assert!(placement.offset.x.is_finite());
        assert!(placement.offset.y.is_finite());
    }
}
