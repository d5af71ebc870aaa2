//! Mathematical utilities

pub mod rotation;

pub use rotation::rotate_cells;
