/// Zoom values at which the oscillation turns around. The turn is checked
/// before each step, so the zoom may overshoot either bound by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            lower: 1.1,
            upper: 2.0,
        }
    }
}
