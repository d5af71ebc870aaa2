//! Color palette and voxel-value-to-color resolution

/// Color used when a voxel references a slot outside the palette
pub const FALLBACK_COLOR: &str = "rgb(255, 255, 255)";

/// An RGB triple with 8-bit channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as the textual form the rendering layer consumes
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Ordered color table. Slot 0 corresponds to voxel value 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    pub fn new(entries: Vec<Rgb>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one voxel value to a display color.
    ///
    /// Value v references slot v - 1; anything outside the table falls
    /// back to white rather than failing the pipeline.
    pub fn resolve(&self, value: u16) -> String {
        let idx = value as usize;
        if idx >= 1 && idx <= self.entries.len() {
            self.entries[idx - 1].to_css()
        } else {
            FALLBACK_COLOR.to_string()
        }
    }

    /// Resolve a sequence of voxel values, preserving order
    pub fn resolve_colors(&self, values: &[u16]) -> Vec<String> {
        values.iter().map(|&v| self.resolve(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_in_range() {
        let palette = Palette::new(vec![Rgb::new(10, 20, 30), Rgb::new(200, 0, 100)]);
        assert_eq!(palette.resolve(1), "rgb(10, 20, 30)");
        assert_eq!(palette.resolve(2), "rgb(200, 0, 100)");
    }

    #[test]
    fn test_resolve_out_of_range_falls_back_to_white() {
        let palette = Palette::new(vec![Rgb::new(10, 20, 30)]);
        assert_eq!(palette.resolve(2), FALLBACK_COLOR);
        assert_eq!(palette.resolve(u16::MAX), FALLBACK_COLOR);
        // Value 0 is "empty" and never reaches resolution in practice,
        // but resolution is still total.
        assert_eq!(palette.resolve(0), FALLBACK_COLOR);
    }

    #[test]
    fn test_resolve_colors_preserves_order() {
        let palette = Palette::new(vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        let colors = palette.resolve_colors(&[2, 1, 9]);
        assert_eq!(
            colors,
            vec![
                "rgb(4, 5, 6)".to_string(),
                "rgb(1, 2, 3)".to_string(),
                FALLBACK_COLOR.to_string(),
            ]
        );
    }
}
