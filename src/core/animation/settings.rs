use crate::core::animation::bounds::ZoomBounds;
use crate::core::animation::speed::AnimationSpeed;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationSettings {
    pub speed: AnimationSpeed,
    pub bounds: ZoomBounds,
}
