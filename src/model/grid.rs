//! Dense voxel occupancy grid

use crate::core::types::UVec3;

/// Occupied cells extracted from a grid, as parallel sequences.
///
/// `positions[i]` and `values[i]` describe the same cell. Order is the
/// grid scan order (see [`VoxelGrid::occupied_cells`]) and is what makes
/// downstream scene data reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupiedCells {
    pub positions: Vec<UVec3>,
    pub values: Vec<u16>,
}

impl OccupiedCells {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Dense 3D occupancy grid indexed `[x][y][z]`.
///
/// Cell value 0 is empty; a value v > 0 references palette slot v - 1.
/// Cells are `u16` because a decoder palette index of 255 becomes cell
/// value 256.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    size: UVec3,
    cells: Vec<u16>,
}

impl VoxelGrid {
    /// Create an all-empty grid. Dimensions must be positive.
    pub fn new(size: UVec3) -> Self {
        assert!(
            size.x > 0 && size.y > 0 && size.z > 0,
            "grid dimensions must be positive, got {size}"
        );
        let cell_count = size.x as usize * size.y as usize * size.z as usize;
        Self {
            size,
            cells: vec![0; cell_count],
        }
    }

    /// Grid dimensions
    pub fn size(&self) -> UVec3 {
        self.size
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, pos: UVec3) -> bool {
        pos.x < self.size.x && pos.y < self.size.y && pos.z < self.size.z
    }

    // Flat index with x outermost, z innermost
    fn index(&self, pos: UVec3) -> usize {
        (pos.x as usize * self.size.y as usize + pos.y as usize) * self.size.z as usize
            + pos.z as usize
    }

    /// Get the value at a cell
    pub fn get(&self, pos: UVec3) -> u16 {
        self.cells[self.index(pos)]
    }

    /// Set the value at a cell
    pub fn set(&mut self, pos: UVec3, value: u16) {
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    /// Number of nonzero cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Extract every nonzero cell in row-major ascending scan order:
    /// x outermost, then y, then z. The order is deterministic for a
    /// given grid and is relied on by the scene pipeline.
    pub fn occupied_cells(&self) -> OccupiedCells {
        let mut occupied = OccupiedCells::default();
        for x in 0..self.size.x {
            for y in 0..self.size.y {
                for z in 0..self.size.z {
                    let pos = UVec3::new(x, y, z);
                    let value = self.get(pos);
                    if value != 0 {
                        occupied.positions.push(pos);
                        occupied.values.push(value);
                    }
                }
            }
        }
        occupied
    }
}
