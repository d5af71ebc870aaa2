//! The viewing pipeline: one total, deterministic run per request

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::core::error::Error;
use crate::core::types::Result;
use crate::math::rotate_cells;
use crate::model::loader::{self, LoadResult};
use crate::scene::builder::{self, Scene};
use crate::scene::placeholder;

/// Run the full pipeline for one request.
///
/// Total by construction: every outcome, including a panic in any
/// stage, yields exactly one scene. Failures surface as placeholder
/// scenes carrying their catalog message; nothing escapes.
pub fn view(input: Option<&Path>) -> Scene {
    contain(|| run(input))
}

/// Run one fallible stage chain and guarantee a scene comes back.
/// Errors become their catalog placeholder; a panic becomes the
/// `Unexpected` placeholder.
fn contain(stages: impl FnOnce() -> Result<Scene>) -> Scene {
    match panic::catch_unwind(AssertUnwindSafe(stages)) {
        Ok(Ok(scene)) => scene,
        Ok(Err(error)) => {
            log::error!("pipeline failed: {error}");
            placeholder::build(&error)
        }
        Err(payload) => {
            let error = Error::Unexpected {
                detail: panic_detail(payload.as_ref()),
            };
            log::error!("pipeline panicked: {error}");
            placeholder::build(&error)
        }
    }
}

fn run(input: Option<&Path>) -> Result<Scene> {
    let path = input.ok_or(Error::MissingInput)?;
    if !has_vox_extension(path) {
        return Err(Error::InvalidExtension);
    }

    match loader::load(path) {
        LoadResult::DecodeError(message) => Err(Error::Decode(message)),
        LoadResult::Empty => Err(Error::EmptyModel),
        LoadResult::Success { grid, palette } => {
            let occupied = grid.occupied_cells();
            let positions = rotate_cells(&occupied.positions);
            let colors = palette.resolve_colors(&occupied.values);
            log::info!("built scene with {} points", positions.len());
            Ok(builder::build(positions, colors))
        }
    }
}

// The check is case-sensitive: ".VOX" is rejected on purpose.
fn has_vox_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".vox"))
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
