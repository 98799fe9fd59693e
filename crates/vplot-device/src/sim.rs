//! Simulated drawing surface.

use log::debug;
use vplot_core::{Point, Surface};

use crate::profile::Profile;

/// A surface that executes commands against tracked state instead of
/// hardware.
///
/// The head starts at the profile's calibration point with the pen up.
/// Every command is logged at debug level; moves and pen-down segments
/// are counted so a caller can report what a plot would have drawn.
#[derive(Clone, Debug)]
pub struct SimulatedSurface {
    profile: Profile,
    position: Point,
    pen_down: bool,
    moves: usize,
    segments: usize,
}

impl SimulatedSurface {
    pub fn new(profile: Profile) -> Self {
        let position = profile.pos_cali;
        Self {
            profile,
            position,
            pen_down: false,
            moves: 0,
            segments: 0,
        }
    }

    /// Current head position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Whether the pen is currently down.
    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Total number of moves executed.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of moves executed with the pen down.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// The profile this surface simulates.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Surface for SimulatedSurface {
    fn pen_up(&mut self) {
        if self.pen_down {
            debug!("pen up (servo {})", self.profile.servo.up);
        }
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        if !self.pen_down {
            debug!("pen down (servo {})", self.profile.servo.down);
        }
        self.pen_down = true;
    }

    fn goto(&mut self, x: i32, y: i32) {
        debug!("goto: ({x}, {y})");
        self.position = Point::new(f64::from(x), f64::from(y));
        self.moves += 1;
        if self.pen_down {
            self.segments += 1;
        }
    }

    fn width(&self) -> f64 {
        self.profile.width
    }

    fn height(&self) -> f64 {
        self.profile.height
    }
}
