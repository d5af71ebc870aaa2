//! Voxel model data: grid, palette, and loading

pub mod grid;
pub mod loader;
pub mod palette;

pub use grid::{OccupiedCells, VoxelGrid};
pub use loader::LoadResult;
pub use palette::{Palette, Rgb};
