mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::animation::driver::{AnimationDriver, DriverError};
pub use controllers::cli::render::CliRenderController;
pub use controllers::data::frame_data::FrameData;
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::ports::frame_sink::FrameSink;
pub use crate::core::actions::cancellation::{CancelToken, NeverCancel};
pub use crate::core::actions::render_raster::ports::colour_map::ColourMap;
pub use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_raster::render_raster::{
    render, render_raster_parallel, render_raster_serial,
};
pub use crate::core::animation::{
    AnimationSettings, AnimationSpeed, AnimationSpeedError, AnimationState, ZoomBounds,
    ZoomDirection, ZoomStepReport, step_zoom,
};
pub use crate::core::colour_maps::hsl::hsl_to_rgb;
pub use crate::core::colour_maps::hue_cycle::{HueCycleColourMap, colour_of};
pub use crate::core::colour_maps::palette::HuePalette;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_buffer::{RasterBuffer, RasterBufferError};
pub use crate::core::data::render_config::RenderConfig;
pub use crate::core::data::viewport::{PlaneWindow, Viewport, ViewportError};
pub use crate::core::errors::InvalidConfiguration;
pub use crate::core::fractals::escape_time::{EscapeTimeAlgorithm, evaluate};
pub use crate::core::fractals::fractal_kind::{FractalKind, FractalKindParseError};
pub use input::cli::args::{CliArgs, CliRequest};
pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::png_sequence::PngSequenceSink;
