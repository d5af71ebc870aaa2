//! Viewing rotation applied to occupied-cell coordinates
//!
//! Grid coordinates go through two sequential rotations before framing:
//! 90 degrees about the X axis, then 180 degrees about the Z axis. Both
//! stages are computed from trigonometric rotation matrices rather than
//! collapsed algebraically; the camera and framing constants were tuned
//! against this exact floating-point path.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::types::{DVec3, UVec3};

/// First stage: rotation angle about the X axis (90 degrees)
const THETA_X: f64 = FRAC_PI_2;
/// Second stage: rotation angle about the Z axis (180 degrees)
const THETA_Z: f64 = PI;

/// Rotate one grid-local cell coordinate into viewing space
pub fn rotate_cell(pos: UVec3) -> DVec3 {
    let (x, y, z) = (pos.x as f64, pos.y as f64, pos.z as f64);

    // Stage 1: rotate about X.
    let y1 = y * THETA_X.cos() - z * THETA_X.sin();
    let z1 = y * THETA_X.sin() + z * THETA_X.cos();

    // Stage 2: rotate the stage-1 result about Z.
    let x2 = x * THETA_Z.cos() - y1 * THETA_Z.sin();
    let y2 = x * THETA_Z.sin() + y1 * THETA_Z.cos();

    DVec3::new(x2, y2, z1)
}

/// Rotate a sequence of cell coordinates, preserving length and order
pub fn rotate_cells(positions: &[UVec3]) -> Vec<DVec3> {
    positions.iter().map(|&pos| rotate_cell(pos)).collect()
}
