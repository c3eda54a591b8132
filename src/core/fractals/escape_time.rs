use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::fractal_kind::FractalKind;
use crate::core::util::pixel_to_plane::PixelToPlane;

/// Bailout radius 2, compared squared.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKind,
    max_iterations: u32,
    mapping: PixelToPlane,
    julia_constant: Complex,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            kind: config.kind(),
            max_iterations: config.max_iterations(),
            mapping: PixelToPlane::new(config.viewport(), config.plane_window()),
            julia_constant: config.julia_constant(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterations before the orbit of `point` leaves the bailout radius,
    /// capped at `max_iterations` (which marks an interior point).
    #[must_use]
    pub fn escape_count(&self, point: Complex) -> u32 {
        let (mut z, c) = self.seed(point);
        let mut iteration = 0;

        while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < self.max_iterations {
            z = self.step(z, c);
            iteration += 1;
        }

        iteration
    }

    /// Initial orbit value and the constant term for `point`.
    fn seed(&self, point: Complex) -> (Complex, Complex) {
        match self.kind {
            FractalKind::Mandelbrot | FractalKind::BurningShip => (Complex::ZERO, point),
            FractalKind::Julia => (point, self.julia_constant),
        }
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        match self.kind {
            FractalKind::Mandelbrot | FractalKind::Julia => z.square() + c,
            FractalKind::BurningShip => {
                let squared = z.square();
                Complex {
                    real: (squared.real + c.real).abs(),
                    imag: squared.imag.abs() + c.imag,
                }
            }
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    #[inline]
    fn compute(&self, pixel: Point) -> u32 {
        self.escape_count(self.mapping.to_plane(pixel))
    }
}

/// Iteration count for a single pixel under `config`.
#[must_use]
pub fn evaluate(pixel: Point, config: &RenderConfig) -> u32 {
    EscapeTimeAlgorithm::new(config).compute(pixel)
}
