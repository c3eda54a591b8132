use crate::core::data::point::Point;

/// Per-pixel evaluation. Implementations must be pure: the same pixel always
/// yields the same value.
pub trait FractalAlgorithm {
    fn compute(&self, pixel: Point) -> u32;
}
