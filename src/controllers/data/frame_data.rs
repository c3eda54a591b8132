use std::time::Duration;

use crate::core::animation::motion::ZoomDirection;
use crate::core::data::raster_buffer::RasterBuffer;

/// One finished animation frame. The raster is owned by whoever receives it.
#[derive(Debug)]
pub struct FrameData {
    pub frame_index: u64,
    pub zoom: f64,
    pub direction: ZoomDirection,
    pub raster: RasterBuffer,
    pub render_duration: Duration,
}
