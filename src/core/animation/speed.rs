use thiserror::Error;

pub const MIN_SPEED: f64 = 0.005;
pub const MAX_SPEED: f64 = 0.05;
pub const DEFAULT_SPEED: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("animation speed must be within [{}, {}], got {speed}", MIN_SPEED, MAX_SPEED)]
pub struct AnimationSpeedError {
    pub speed: f64,
}

/// Zoom change per tick, validated to `[MIN_SPEED, MAX_SPEED]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpeed(f64);

impl AnimationSpeed {
    pub fn new(speed: f64) -> Result<Self, AnimationSpeedError> {
        // NaN fails both comparisons
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(AnimationSpeedError { speed });
        }

        Ok(Self(speed))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}
