//! Voxscope - command-line entry point
//!
//! Usage:
//!   voxscope <file.vox>
//!
//! Runs the viewing pipeline on the given model and prints the scene as
//! JSON for the rendering layer. With no argument (or any failure) the
//! printed scene is a placeholder carrying a diagnostic message.

use std::path::PathBuf;

use voxscope::core::logging;
use voxscope::pipeline;

fn main() {
    logging::init();

    let file = std::env::args().nth(1).map(PathBuf::from);
    let scene = pipeline::view(file.as_deref());

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{json}"),
        Err(error) => log::error!("failed to serialize scene: {error}"),
    }
}
