//! Point-cloud scene assembly and bounding-box framing

use serde::Serialize;

use crate::core::types::DVec3;
use crate::scene::camera::{AxisRange, CameraRig};
use crate::scene::placeholder::Annotation;
use crate::scene::style::SceneStyle;

/// One displayed voxel: transformed coordinate plus resolved color
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub position: DVec3,
    pub color: String,
}

/// The renderable bundle handed to the external rendering layer.
///
/// Point order is not semantically significant but is reproducible:
/// it follows the grid scan order of the occupied cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub points: Vec<Point>,
    pub camera: CameraRig,
    /// Display ranges for the x, y and z axes, in that order
    pub axis_ranges: [AxisRange; 3],
    pub style: SceneStyle,
    pub annotation: Option<Annotation>,
}

impl Scene {
    /// Scene with no geometry and default framing
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            camera: CameraRig::default(),
            axis_ranges: [AxisRange::default(); 3],
            style: SceneStyle::default(),
            annotation: None,
        }
    }
}

/// Per-axis bounding summary of the transformed points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Midpoint (min + max) / 2 per axis
    pub center: DVec3,
    /// Largest per-axis extent
    pub max_range: f64,
}

/// Compute the bounding-box framing of a non-empty point set
pub fn framing(positions: &[DVec3]) -> Framing {
    let mut min = positions[0];
    let mut max = positions[0];
    for &pos in &positions[1..] {
        min = min.min(pos);
        max = max.max(pos);
    }
    let extent = max - min;
    Framing {
        center: (min + max) / 2.0,
        max_range: extent.x.max(extent.y).max(extent.z),
    }
}

/// Assemble a scene from transformed coordinates and matching colors.
///
/// Requires at least one point; the orchestrator routes empty models to
/// the placeholder path before this is reached. Axis ranges extend
/// max_range / 1.5 either side of each axis center, the same formula on
/// all three axes, so the model sits centered in a cubic frame.
pub fn build(positions: Vec<DVec3>, colors: Vec<String>) -> Scene {
    debug_assert_eq!(positions.len(), colors.len());
    debug_assert!(!positions.is_empty());

    let Framing { center, max_range } = framing(&positions);
    let half = max_range / 1.5;
    let axis_ranges = [
        AxisRange::new(center.x - half, center.x + half),
        AxisRange::new(center.y - half, center.y + half),
        AxisRange::new(center.z - half, center.z + half),
    ];

    let points = positions
        .into_iter()
        .zip(colors)
        .map(|(position, color)| Point { position, color })
        .collect();

    Scene {
        points,
        camera: CameraRig::default(),
        axis_ranges,
        style: SceneStyle::default(),
        annotation: None,
    }
}
