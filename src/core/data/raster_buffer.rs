use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE_ALPHA: u8 = 255;

fn raster_byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterBufferError {
    #[error("pixel at x:{}, y:{} outside of {width}x{height} raster", pixel.x, pixel.y)]
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    #[error("raster size {expected} does not match buffer size {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

/// Row-major RGBA raster, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Fully transparent black raster.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; raster_byte_len(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterBufferError> {
        let expected = raster_byte_len(width, height);

        if expected != data.len() {
            return Err(RasterBufferError::BoundsMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        let index = self.index_of(pixel)?;
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);

        Some(rgba)
    }

    /// Writes an opaque pixel.
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RasterBufferError> {
        let index = self.index_of(pixel).ok_or(RasterBufferError::PixelOutsideBounds {
            pixel,
            width: self.width,
            height: self.height,
        })?;

        write_opaque(&mut self.data[index..index + BYTES_PER_PIXEL], colour);

        Ok(())
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        Some((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

/// Writes `colour` with full alpha into a 4-byte RGBA slot.
#[inline]
pub(crate) fn write_opaque(slot: &mut [u8], colour: Colour) {
    slot[0] = colour.r;
    slot[1] = colour.g;
    slot[2] = colour.b;
    slot[3] = OPAQUE_ALPHA;
}
