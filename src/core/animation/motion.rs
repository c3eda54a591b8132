use crate::core::animation::bounds::ZoomBounds;
use crate::core::data::viewport::DEFAULT_ZOOM;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomDirection {
    #[default]
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub zoom: f64,
    pub direction: ZoomDirection,
}

impl AnimationState {
    /// Fresh oscillation starting at `zoom`, heading up.
    #[must_use]
    pub fn starting_at(zoom: f64) -> Self {
        Self {
            zoom,
            direction: ZoomDirection::Increasing,
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::starting_at(DEFAULT_ZOOM)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomStepReport {
    /// Set when this step reversed the direction.
    pub turned: Option<ZoomDirection>,
}

/// One animation tick: turn around if a bound was crossed, then move the zoom
/// by `speed` in the current direction. `speed` is taken as given.
pub fn step_zoom(state: &mut AnimationState, speed: f64, bounds: &ZoomBounds) -> ZoomStepReport {
    let previous = state.direction;

    if state.zoom > bounds.upper {
        state.direction = ZoomDirection::Decreasing;
    }
    if state.zoom < bounds.lower {
        state.direction = ZoomDirection::Increasing;
    }

    state.zoom = match state.direction {
        ZoomDirection::Increasing => state.zoom + speed,
        ZoomDirection::Decreasing => state.zoom - speed,
    };

    ZoomStepReport {
        turned: (state.direction != previous).then_some(state.direction),
    }
}
