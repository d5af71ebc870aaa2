//! Renderable scene assembly and styling

pub mod builder;
pub mod camera;
pub mod placeholder;
pub mod style;

pub use builder::{Point, Scene};
pub use camera::{AspectMode, AxisRange, CameraRig};
pub use placeholder::Annotation;
pub use style::{MarkerStyle, MarkerSymbol, SceneStyle};
