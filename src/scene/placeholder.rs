//! Diagnostic placeholder scenes for failed pipeline runs

use serde::Serialize;

use crate::core::error::Error;
use crate::scene::builder::Scene;

/// A single text annotation in normalized canvas coordinates
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub font_color: String,
    pub show_arrow: bool,
}

impl Annotation {
    /// White 16pt text centered in the canvas, no arrow
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            x: 0.5,
            y: 0.5,
            font_size: 16,
            font_color: "white".to_string(),
            show_arrow: false,
        }
    }
}

/// Build the placeholder scene for a recognized failure.
///
/// Empty geometry, the same dark styling as success scenes, and exactly
/// one centered annotation whose text is the failure's display message.
pub fn build(error: &Error) -> Scene {
    let mut scene = Scene::empty();
    scene.annotation = Some(Annotation::centered(error.to_string()));
    scene
}
