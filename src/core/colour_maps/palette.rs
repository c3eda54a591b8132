use crate::core::data::point::Point;

pub const HUE_COUNT: usize = 6;

/// Base hues picked per pixel along anti-diagonals, shifted by the iteration
/// count. Fixed saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuePalette {
    hues: [u16; HUE_COUNT],
    saturation: f64,
    lightness: f64,
}

impl HuePalette {
    #[must_use]
    pub const fn new(hues: [u16; HUE_COUNT], saturation: f64, lightness: f64) -> Self {
        Self {
            hues,
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Hue in `[0, 360)` degrees.
    #[must_use]
    pub fn hue_for(&self, pixel: Point, iterations: u32) -> u32 {
        let base = self.hues[((u64::from(pixel.x) + u64::from(pixel.y)) % HUE_COUNT as u64) as usize];
        let shift = (u64::from(iterations) * 2) % 360;

        ((u64::from(base) + shift) % 360) as u32
    }
}

impl Default for HuePalette {
    fn default() -> Self {
        Self::new([50, 100, 175, 210, 340, 25], 0.90, 0.63)
    }
}
