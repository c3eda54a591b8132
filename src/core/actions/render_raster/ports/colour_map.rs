use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

pub trait ColourMap {
    /// The pixel position is part of the input so palettes may vary across
    /// the raster, not only with the iteration count.
    fn map(&self, pixel: Point, iterations: u32) -> Colour;
}
