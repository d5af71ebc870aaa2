//! Model loading via the external .vox decoder

use std::path::Path;

use crate::core::error::DECODE_FAILURE_MESSAGE;
use crate::core::types::UVec3;
use crate::model::grid::VoxelGrid;
use crate::model::palette::{Palette, Rgb};

/// Largest accepted grid dimension. Decoder voxel coordinates are u8,
/// so an axis beyond 256 cannot hold a voxel; a SIZE chunk declaring
/// one would only make the dense grid allocate without bound.
const MAX_AXIS: u32 = 256;

/// Outcome of one load attempt
#[derive(Debug)]
pub enum LoadResult {
    /// Decoded model with at least one occupied cell
    Success { grid: VoxelGrid, palette: Palette },
    /// Decoded cleanly but no cell is occupied
    Empty,
    /// Decoder-level failure; carries the fixed user-facing message
    DecodeError(String),
}

/// Load a .vox file into a dense grid and palette.
///
/// Every decoder-level failure (parse error, container with no model,
/// degenerate or oversized model size, path the decoder cannot take)
/// collapses into `DecodeError` with the fixed explanatory message; the
/// underlying detail only goes to the log.
pub fn load(path: &Path) -> LoadResult {
    log::info!("attempting to parse vox file: {}", path.display());

    let Some(path_str) = path.to_str() else {
        log::error!("path is not valid UTF-8: {}", path.display());
        return LoadResult::DecodeError(DECODE_FAILURE_MESSAGE.to_string());
    };

    let data = match dot_vox::load(path_str) {
        Ok(data) => data,
        Err(detail) => {
            log::error!("decoder rejected {}: {detail}", path.display());
            return LoadResult::DecodeError(DECODE_FAILURE_MESSAGE.to_string());
        }
    };

    let Some(model) = data.models.first() else {
        log::error!("container holds no models: {}", path.display());
        return LoadResult::DecodeError(DECODE_FAILURE_MESSAGE.to_string());
    };
    if model.size.x == 0 || model.size.y == 0 || model.size.z == 0 {
        log::error!(
            "model declares a degenerate size {}x{}x{}",
            model.size.x, model.size.y, model.size.z
        );
        return LoadResult::DecodeError(DECODE_FAILURE_MESSAGE.to_string());
    }
    if model.size.x > MAX_AXIS || model.size.y > MAX_AXIS || model.size.z > MAX_AXIS {
        log::error!(
            "model declares an oversized grid {}x{}x{}, limit is {MAX_AXIS} per axis",
            model.size.x, model.size.y, model.size.z
        );
        return LoadResult::DecodeError(DECODE_FAILURE_MESSAGE.to_string());
    }

    let grid = dense_grid(model);
    let palette = convert_palette(&data.palette);

    let occupied = grid.occupied_count();
    log::info!(
        "model parsed: grid {}, {} occupied voxels, palette of {}",
        grid.size(),
        occupied,
        palette.len()
    );

    if occupied == 0 {
        log::warn!("no voxels found in the model");
        return LoadResult::Empty;
    }

    LoadResult::Success { grid, palette }
}

/// Materialize the decoder's sparse voxel list as a dense grid.
///
/// Cell value is the decoder's palette index plus one, so a cell value v
/// maps back to palette slot v - 1 and zero stays "empty".
fn dense_grid(model: &dot_vox::Model) -> VoxelGrid {
    let size = UVec3::new(model.size.x, model.size.y, model.size.z);
    let mut grid = VoxelGrid::new(size);
    for voxel in &model.voxels {
        let pos = UVec3::new(voxel.x as u32, voxel.y as u32, voxel.z as u32);
        if !grid.contains(pos) {
            log::warn!("voxel at {pos} outside declared size {size}, skipping");
            continue;
        }
        grid.set(pos, voxel.i as u16 + 1);
    }
    grid
}

fn convert_palette(colors: &[dot_vox::Color]) -> Palette {
    let entries = colors
        .iter()
        .take(256)
        .map(|c| Rgb::new(c.r, c.g, c.b))
        .collect();
    Palette::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal VOX container builder, enough for SIZE + XYZI models.
    fn chunk(id: &[u8; 4], content: &[u8], children: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(id);
        out.extend_from_slice(&(content.len() as u32).to_le_bytes());
        out.extend_from_slice(&(children.len() as u32).to_le_bytes());
        out.extend_from_slice(content);
        out.extend_from_slice(children);
        out
    }

    fn vox_bytes(size: (u32, u32, u32), voxels: &[(u8, u8, u8, u8)]) -> Vec<u8> {
        let mut size_content = Vec::new();
        size_content.extend_from_slice(&size.0.to_le_bytes());
        size_content.extend_from_slice(&size.1.to_le_bytes());
        size_content.extend_from_slice(&size.2.to_le_bytes());

        let mut xyzi_content = (voxels.len() as u32).to_le_bytes().to_vec();
        for &(x, y, z, i) in voxels {
            xyzi_content.extend_from_slice(&[x, y, z, i]);
        }

        let mut children = chunk(b"SIZE", &size_content, &[]);
        children.extend(chunk(b"XYZI", &xyzi_content, &[]));

        let mut out = b"VOX ".to_vec();
        out.extend_from_slice(&150u32.to_le_bytes());
        out.extend(chunk(b"MAIN", &[], &children));
        out
    }

    fn write_vox(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_load_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vox(
            &dir,
            "cube.vox",
            &vox_bytes((2, 2, 2), &[(0, 0, 0, 1), (1, 1, 1, 2)]),
        );

        match load(&path) {
            LoadResult::Success { grid, palette } => {
                assert_eq!(grid.size(), UVec3::new(2, 2, 2));
                assert_eq!(grid.occupied_count(), 2);
                assert_eq!(grid.get(UVec3::new(0, 0, 0)), 2);
                assert_eq!(grid.get(UVec3::new(1, 1, 1)), 3);
                // No RGBA chunk, so the decoder supplies its default palette.
                assert_eq!(palette.len(), 256);
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_load_empty_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vox(&dir, "empty.vox", &vox_bytes((1, 1, 1), &[]));
        assert!(matches!(load(&path), LoadResult::Empty));
    }

    #[test]
    fn test_load_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vox(&dir, "garbage.vox", b"this is not a vox container");
        match load(&path) {
            LoadResult::DecodeError(message) => {
                assert_eq!(message, DECODE_FAILURE_MESSAGE)
            }
            other => panic!("expected DecodeError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.vox");
        assert!(matches!(load(&path), LoadResult::DecodeError(_)));
    }

    #[test]
    fn test_load_oversized_declared_grid_is_decode_error() {
        // A tiny, well-formed container whose SIZE chunk would demand a
        // multi-terabyte dense grid. Must be rejected before allocation.
        let dir = tempfile::tempdir().unwrap();
        let path = write_vox(
            &dir,
            "oversized.vox",
            &vox_bytes((65535, 65535, 65535), &[]),
        );
        match load(&path) {
            LoadResult::DecodeError(message) => {
                assert_eq!(message, DECODE_FAILURE_MESSAGE)
            }
            other => panic!("expected DecodeError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_accepts_full_256_cube_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vox(
            &dir,
            "full.vox",
            &vox_bytes((256, 256, 256), &[(255, 255, 255, 1)]),
        );
        match load(&path) {
            LoadResult::Success { grid, .. } => {
                assert_eq!(grid.size(), UVec3::new(256, 256, 256));
                assert_eq!(grid.get(UVec3::new(255, 255, 255)), 2);
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_dense_grid_skips_out_of_bounds_voxels() {
        let model = dot_vox::Model {
            size: dot_vox::Size { x: 2, y: 2, z: 2 },
            voxels: vec![
                dot_vox::Voxel { x: 0, y: 0, z: 0, i: 0 },
                dot_vox::Voxel { x: 5, y: 0, z: 0, i: 1 },
            ],
        };
        let grid = dense_grid(&model);
        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.get(UVec3::new(0, 0, 0)), 1);
    }

    #[test]
    fn test_convert_palette_clamps_to_256() {
        let colors = vec![dot_vox::Color { r: 1, g: 2, b: 3, a: 255 }; 300];
        assert_eq!(convert_palette(&colors).len(), 256);
    }
}
