use crate::controllers::data::frame_data::FrameData;

/// Receives every frame the animation driver renders, in tick order.
pub trait FrameSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn submit(&mut self, frame: FrameData) -> Result<(), Self::Error>;
}
