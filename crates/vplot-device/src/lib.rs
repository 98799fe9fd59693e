//! # vplot-device - Plotter Setups and Simulation
//!
//! The drawing-surface side of the pipeline: hardware profiles describing
//! a physical cable-plotter setup (motor anchors, canvas size, pen servo
//! positions), and a simulated surface that executes commands against
//! tracked state instead of hardware.
//!
//! A real hardware driver would implement
//! [`Surface`](vplot_core::Surface) on top of a [`Profile`]'s geometry;
//! converting Cartesian moves into cable lengths is that driver's
//! business, not this crate's.

mod profile;
mod sim;

pub use profile::{Profile, ProfileError, Servo};
pub use sim::SimulatedSurface;
