//! Error types for the path-to-plot pipeline.

use thiserror::Error;

/// Errors that can occur while parsing path data.
///
/// Parsing aborts on the first error; no partial path is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token matched none of the recognized forms.
    #[error("malformed path token `{0}`")]
    MalformedToken(String),
    /// A draw, close, or coordinate token appeared before the first `M`/`m`.
    #[error("path must begin with a moveto command, found `{0}`")]
    MissingMoveTo(String),
    /// `Z`/`z` appeared before the current subpath had any point.
    #[error("close command before any point in the subpath")]
    CloseBeforePoint,
}

/// Errors that can occur while fitting a path onto a canvas.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FitError {
    /// The path resolved no points, so there is nothing to fit.
    #[error("empty path: no points to fit")]
    EmptyPath,
    /// Zero-width and zero-height extent (a single-point path).
    #[error("degenerate extent: a single-point path cannot be scaled")]
    DegenerateExtent,
    /// The fill fraction was zero, negative, or not finite.
    #[error("fill fraction must be positive and finite, got {0}")]
    InvalidFillFraction(f64),
}

/// Any failure of the combined parse → fit → replay pipeline.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlotError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Fit(#[from] FitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_offending_token() {
        let err = ParseError::MalformedToken("X".into());
        assert_eq!(err.to_string(), "malformed path token `X`");
    }

    #[test]
    fn fit_error_messages() {
        assert_eq!(
            FitError::EmptyPath.to_string(),
            "empty path: no points to fit"
        );
        assert_eq!(
            FitError::InvalidFillFraction(0.0).to_string(),
            "fill fraction must be positive and finite, got 0"
        );
    }

    #[test]
    fn plot_error_is_transparent() {
        let err = PlotError::from(ParseError::CloseBeforePoint);
        assert_eq!(
            err.to_string(),
            "close command before any point in the subpath"
        );
    }
}
