use crate::core::animation::speed::AnimationSpeedError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::fractal_kind::FractalKindParseError;
use thiserror::Error;

/// Everything that can be wrong with caller-supplied render or animation
/// parameters. Raised before any pixel work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    FractalKind(#[from] FractalKindParseError),
    #[error(transparent)]
    AnimationSpeed(#[from] AnimationSpeedError),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}
