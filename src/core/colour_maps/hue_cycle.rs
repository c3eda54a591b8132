use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::colour_maps::hsl::hsl_to_rgb;
use crate::core::colour_maps::palette::HuePalette;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Cycles through a [`HuePalette`] by pixel position and iteration count.
/// Points that never escaped are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycleColourMap {
    palette: HuePalette,
    max_iterations: u32,
}

impl HueCycleColourMap {
    #[must_use]
    pub fn new(palette: HuePalette, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap for HueCycleColourMap {
    #[inline]
    fn map(&self, pixel: Point, iterations: u32) -> Colour {
        if iterations == self.max_iterations {
            return Colour::BLACK;
        }

        let hue = self.palette.hue_for(pixel, iterations);

        hsl_to_rgb(
            f64::from(hue),
            self.palette.saturation(),
            self.palette.lightness(),
        )
    }
}

/// Colour of one pixel under the default palette.
#[must_use]
pub fn colour_of(pixel: Point, iterations: u32, max_iterations: u32) -> Colour {
    HueCycleColourMap::new(HuePalette::default(), max_iterations).map(pixel, iterations)
}
