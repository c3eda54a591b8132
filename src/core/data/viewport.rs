use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_buffer::BYTES_PER_PIXEL;
use thiserror::Error;

pub const DEFAULT_ZOOM: f64 = 1.2;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("viewport {width}x{height} is too large to allocate a raster for")]
    TooLarge { width: u32, height: u32 },
    #[error("zoom must be a positive finite number, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("plane window size must be positive: {width}x{height}")]
    InvalidPlaneWindow { width: f64, height: f64 },
}

/// Pixel dimensions of the output raster plus the current zoom factor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    zoom: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32, zoom: f64) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ViewportError::TooLarge { width, height })?;

        validate_zoom(zoom)?;

        Ok(Self { width, height, zoom })
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
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Same pixel dimensions at a different zoom.
    pub fn with_zoom(self, zoom: f64) -> Result<Self, ViewportError> {
        validate_zoom(zoom)?;

        Ok(Self { zoom, ..self })
    }
}

fn validate_zoom(zoom: f64) -> Result<(), ViewportError> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(ViewportError::InvalidZoom { zoom });
    }

    Ok(())
}

/// The region of the complex plane shown at zoom 1, anchored at `origin`
/// (the plane coordinate of pixel `(0, 0)`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneWindow {
    width: f64,
    height: f64,
    origin: Complex,
}

impl PlaneWindow {
    pub fn new(width: f64, height: f64, origin: Complex) -> Result<Self, ViewportError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidPlaneWindow { width, height });
        }

        Ok(Self { width, height, origin })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }
}

impl Default for PlaneWindow {
    fn default() -> Self {
        Self {
            width: 3.6,
            height: 2.6,
            origin: Complex::new(-2.0, -1.3),
        }
    }
}
