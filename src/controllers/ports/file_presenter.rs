use std::path::Path;

use thiserror::Error;

use crate::core::data::raster_buffer::RasterBuffer;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to encode raster: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to prepare output location: {0}")]
    Io(#[from] std::io::Error),
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &RasterBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError>;
}
