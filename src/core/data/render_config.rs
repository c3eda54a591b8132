use crate::core::colour_maps::palette::HuePalette;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{PlaneWindow, Viewport};
use crate::core::errors::InvalidConfiguration;
use crate::core::fractals::fractal_kind::FractalKind;

pub const DEFAULT_MAX_ITERATIONS: u32 = 220;
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27015);

/// Everything one render pass depends on. Immutable for the duration of a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    kind: FractalKind,
    max_iterations: u32,
    viewport: Viewport,
    plane_window: PlaneWindow,
    julia_constant: Complex,
    palette: HuePalette,
}

impl RenderConfig {
    pub fn new(
        kind: FractalKind,
        width: u32,
        height: u32,
        zoom: f64,
    ) -> Result<Self, InvalidConfiguration> {
        Ok(Self::from_viewport(kind, Viewport::new(width, height, zoom)?))
    }

    #[must_use]
    pub fn from_viewport(kind: FractalKind, viewport: Viewport) -> Self {
        Self {
            kind,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            viewport,
            plane_window: PlaneWindow::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            palette: HuePalette::default(),
        }
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, InvalidConfiguration> {
        if max_iterations == 0 {
            return Err(InvalidConfiguration::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            ..self
        })
    }

    pub fn with_zoom(self, zoom: f64) -> Result<Self, InvalidConfiguration> {
        Ok(Self {
            viewport: self.viewport.with_zoom(zoom)?,
            ..self
        })
    }

    #[must_use]
    pub fn with_plane_window(self, plane_window: PlaneWindow) -> Self {
        Self {
            plane_window,
            ..self
        }
    }

    #[must_use]
    pub fn with_julia_constant(self, julia_constant: Complex) -> Self {
        Self {
            julia_constant,
            ..self
        }
    }

    #[must_use]
    pub fn with_palette(self, palette: HuePalette) -> Self {
        Self { palette, ..self }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plane_window(&self) -> PlaneWindow {
        self.plane_window
    }

    #[must_use]
    pub fn julia_constant(&self) -> Complex {
        self.julia_constant
    }

    #[must_use]
    pub fn palette(&self) -> HuePalette {
        self.palette
    }
}
