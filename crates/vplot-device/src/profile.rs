//! Plotter hardware profiles.
//!
//! A profile describes one physical setup. Distances are millimeters from
//! a fixed origin; the coordinate system should put the x-axis parallel
//! to the line connecting the two motors. Two setups ship builtin:
//! `default` (bench values for running without hardware) and `plotbert`.
//! Custom setups load from JSON files.

use serde::Deserialize;
use thiserror::Error;
use vplot_core::Point;

/// Pen servo positions, in percent of the servo's travel.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Servo {
    /// Position that lifts the pen off the canvas.
    pub up: u8,
    /// Position that presses the pen onto the canvas.
    pub down: u8,
    /// Total travel range.
    pub range: u8,
}

/// Physical setup of a cable plotter.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    /// Anchor point of the left motor.
    pub pos_left: Point,
    /// Anchor point of the right motor.
    pub pos_right: Point,
    /// Calibration point; the head is assumed to start here.
    pub pos_cali: Point,
    /// Canvas width in mm.
    pub width: f64,
    /// Canvas height in mm.
    pub height: f64,
    /// Pen servo positions.
    pub servo: Servo,
}

/// Errors that can occur while resolving a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The name matches no builtin profile.
    #[error("unknown profile `{0}`")]
    UnknownProfile(String),
    /// The profile file is not valid JSON or misses required fields.
    #[error("malformed profile: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Profile {
    /// Look up a builtin profile by name.
    pub fn builtin(name: &str) -> Result<Self, ProfileError> {
        match name {
            "default" => Ok(Self {
                pos_left: Point::new(0.0, 200.0),
                pos_right: Point::new(100.0, 200.0),
                pos_cali: Point::new(50.0, 150.0),
                width: 100.0,
                height: 200.0,
                servo: Servo {
                    up: 90,
                    down: 10,
                    range: 100,
                },
            }),
            "plotbert" => Ok(Self {
                pos_left: Point::new(-27.0, 440.0),
                pos_right: Point::new(543.0, 440.0),
                pos_cali: Point::new(230.0, 350.0),
                width: 580.0,
                height: 400.0,
                servo: Servo {
                    up: 70,
                    down: 30,
                    range: 100,
                },
            }),
            other => Err(ProfileError::UnknownProfile(other.to_string())),
        }
    }

    /// Deserialize a custom profile from JSON.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }
}
