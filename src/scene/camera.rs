//! Camera framing for the point-cloud scene

use serde::Serialize;

use crate::core::types::DVec3;

/// How the renderer should fit the three axes into the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    /// Equal aspect on all three axes
    #[default]
    Cube,
}

/// Fixed camera rig: look-at with a tuned relative eye offset.
///
/// The eye offset is expressed in normalized units relative to the
/// framed axis ranges, not world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraRig {
    pub up: DVec3,
    pub center: DVec3,
    pub eye: DVec3,
    pub aspect: AspectMode,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            up: DVec3::new(0.0, 1.0, 0.0),
            center: DVec3::ZERO,
            eye: DVec3::new(1.5, 0.9, 0.9),
            aspect: AspectMode::Cube,
        }
    }
}

/// Inclusive display range for one axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
