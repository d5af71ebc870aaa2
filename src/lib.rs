//! Voxscope - an interactive point-cloud viewer for .vox models

pub mod core;
pub mod math;
pub mod model;
pub mod pipeline;
pub mod scene;
