pub mod bounds;
pub mod motion;
pub mod settings;
pub mod speed;

pub use bounds::ZoomBounds;
pub use motion::{step_zoom, AnimationState, ZoomDirection, ZoomStepReport};
pub use settings::AnimationSettings;
pub use speed::{AnimationSpeed, AnimationSpeedError};
