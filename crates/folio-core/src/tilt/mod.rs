//! Pointer-following 3D tilt for cards.
//!
//! [`PointerTracker`] turns raw pointer coordinates into a centred offset,
//! [`rotation_for`] maps that offset linearly onto a rotation, and
//! [`TiltState`] smooths the result with a pair of [`Spring`]s so the card
//! eases into and out of its tilt.

pub mod pointer;
pub mod spring;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use pointer::{Bounds, PointerOffset, PointerTracker};
pub use spring::{Spring, SpringConfig};

/// Tilt tuning, shared by every card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Rotation at the card edge, in degrees.
    pub max_angle_deg: f64,
    #[serde(flatten)]
    pub spring: SpringConfig,
    /// Skip smoothing: rotation follows the pointer immediately.
    pub reduced_motion: bool,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_angle_deg: 15.0,
            spring: SpringConfig::default(),
            reduced_motion: false,
        }
    }
}

/// Card rotation in degrees about the horizontal (`x`) and vertical (`y`)
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    pub fn is_flat(&self) -> bool {
        self.x_deg == 0.0 && self.y_deg == 0.0
    }
}

/// Linear map from offset to rotation: `y` offset `-0.5..0.5` tilts
/// `+max..-max` about x, `x` offset `-0.5..0.5` tilts `-max..+max` about y.
pub fn rotation_for(offset: PointerOffset, max_angle_deg: f64) -> Rotation {
    Rotation {
        x_deg: -offset.y * 2.0 * max_angle_deg,
        y_deg: offset.x * 2.0 * max_angle_deg,
    }
}

/// Per-card tilt: pointer tracking plus smoothing.
#[derive(Debug, Clone, Copy)]
pub struct TiltState {
    tracker: PointerTracker,
    x: Spring,
    y: Spring,
    config: TiltConfig,
}

impl TiltState {
    pub fn new(config: TiltConfig) -> Self {
        let spring = Spring::new(0.0, 0.0).with_config(config.spring);
        Self {
            tracker: PointerTracker::new(),
            x: spring,
            y: spring,
            config,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, bounds: Bounds) -> PointerOffset {
        let offset = self.tracker.on_pointer_move(x, y, bounds);
        self.retarget(offset);
        offset
    }

    pub fn on_pointer_leave(&mut self) {
        self.tracker.on_pointer_leave();
        self.retarget(PointerOffset::NEUTRAL);
    }

    /// Raw (unsmoothed) pointer offset.
    pub fn offset(&self) -> PointerOffset {
        self.tracker.offset()
    }

    /// Step the smoothing springs.
    pub fn tick(&mut self, dt: Duration) {
        self.x.tick(dt);
        self.y.tick(dt);
    }

    /// Smoothed rotation to draw this frame.
    pub fn rotation(&self) -> Rotation {
        rotation_for(
            PointerOffset {
                x: self.x.value(),
                y: self.y.value(),
            },
            self.config.max_angle_deg,
        )
    }

    /// Both springs at rest on their targets; ticking changes nothing.
    pub fn is_settled(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    fn retarget(&mut self, offset: PointerOffset) {
        self.x.set_target(offset.x);
        self.y.set_target(offset.y);
        if self.config.reduced_motion {
            self.x.snap();
            self.y.snap();
        }
    }
}
