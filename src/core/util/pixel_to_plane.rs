use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::{PlaneWindow, Viewport};

/// Affine pixel -> complex-plane mapping for one viewport, computed once per
/// render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToPlane {
    scale_x: f64,
    scale_y: f64,
    origin: Complex,
}

impl PixelToPlane {
    #[must_use]
    pub fn new(viewport: Viewport, window: PlaneWindow) -> Self {
        let zoom = viewport.zoom();

        Self {
            scale_x: window.width() / (f64::from(viewport.width()) * zoom),
            scale_y: window.height() / (f64::from(viewport.height()) * zoom),
            origin: window.origin(),
        }
    }

    #[inline]
    #[must_use]
    pub fn to_plane(&self, pixel: Point) -> Complex {
        Complex {
            real: f64::from(pixel.x) * self.scale_x + self.origin.real,
            imag: f64::from(pixel.y) * self.scale_y + self.origin.imag,
        }
    }
}
