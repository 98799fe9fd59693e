//! # vplot-core - Path-to-Plot Pipeline
//!
//! Converts SVG-style line-path data into an ordered sequence of pen and
//! move commands for a two-motor cable plotter.
//!
//! ## Pipeline
//!
//! ```text
//! "M 0,0 L 10,0 z"          Surface (hardware / simulation)
//!        │                         ▲
//!        ▼                         │
//!   parse ──► ParsedPath ──► Placement ──► replay
//!             (commands        (scale,
//!              + extent)        offset)
//! ```
//!
//! The stages are strictly sequential: fitting needs the finalized extent,
//! so it cannot begin until parsing completes, and replay needs the
//! placement. [`plot`] drives all three for the common case.
//!
//! ## Command Model
//!
//! A parsed path is a flat stream of [`PathCommand`]s. Accepted streams
//! always begin with `PenUp` (paths must open with a moveto) and end with a
//! trailing `PenUp`, so the plotting head is guaranteed to be lifted after
//! the last shape. All stored points are resolved absolute coordinates;
//! relative input is resolved during parsing.
//!
//! ## Example
//!
//! ```ignore
//! use vplot_core::{plot, Surface};
//!
//! // Implement Surface for your device
//! struct MyPlotter { /* ... */ }
//!
//! let mut plotter = MyPlotter::new();
//! plot("M 0,0 L 10,0 L 10,10 z", 0.5, &mut plotter)?;
//! ```

mod error;
mod fit;
mod parse;
mod path;
mod plot;
mod replay;
mod surface;
mod types;

pub use error::{FitError, ParseError, PlotError};
pub use fit::{center_offset, scale_to_fit, Placement};
pub use parse::parse;
pub use path::{ParsedPath, PathCommand};
pub use plot::plot;
pub use replay::replay;
pub use surface::Surface;
pub use types::{Canvas, Extent, Point};
