//! Fixed presentation style for every scene, success or placeholder

use serde::Serialize;

/// Marker glyph shape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSymbol {
    #[default]
    Square,
}

/// Point marker style: uniform diameter, fully opaque, no outline
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size: f64,
    pub opacity: f64,
    pub symbol: MarkerSymbol,
    pub outline_width: f64,
    pub size_mode: String,
    pub size_ref: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 6.0,
            opacity: 1.0,
            symbol: MarkerSymbol::Square,
            outline_width: 0.0,
            size_mode: "diameter".to_string(),
            size_ref: 1.0,
        }
    }
}

/// Scene-wide style block. Values are fixed; there is one look.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneStyle {
    pub marker: MarkerStyle,
    /// Background of the plotting area
    pub plot_background: String,
    /// Background of the full canvas around it
    pub canvas_background: String,
    pub dark_theme: bool,
    pub grid_color: String,
    pub grid_width: u32,
    pub margin: u32,
    pub show_legend: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            marker: MarkerStyle::default(),
            plot_background: "rgba(0,0,0,1)".to_string(),
            canvas_background: "rgba(0,0,0,1)".to_string(),
            dark_theme: true,
            grid_color: "rgba(128, 128, 128, 0.2)".to_string(),
            grid_width: 1,
            margin: 0,
            show_legend: false,
        }
    }
}
