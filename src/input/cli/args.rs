use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::animation::bounds::ZoomBounds;
use crate::core::animation::settings::AnimationSettings;
use crate::core::animation::speed::{AnimationSpeed, DEFAULT_SPEED};
use crate::core::data::render_config::{RenderConfig, DEFAULT_MAX_ITERATIONS};
use crate::core::data::viewport::DEFAULT_ZOOM;
use crate::core::errors::InvalidConfiguration;
use crate::core::fractals::fractal_kind::FractalKind;

pub const DEFAULT_WIDTH: u32 = 820;
pub const DEFAULT_HEIGHT: u32 = 540;
pub const DEFAULT_FRAMES: u64 = 120;

/// Render Mandelbrot, Julia or Burning Ship fractals to PNG.
#[derive(Debug, Clone, Parser)]
#[command(name = "escape-time-canvas", version, about)]
pub struct CliArgs {
    /// Fractal family: Mandelbrot, Julia or BurningShip.
    #[arg(long, default_value = "Mandelbrot")]
    pub kind: FractalKind,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Starting zoom factor.
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Render a zoom oscillation as a numbered PNG sequence.
    #[arg(long)]
    pub animate: bool,

    /// Zoom change per animation frame, within [0.005, 0.05].
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f64,

    /// Number of animation frames to render.
    #[arg(long, default_value_t = DEFAULT_FRAMES, value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: u64,

    /// Output file, or output directory with --animate.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliRequest {
    Still {
        config: RenderConfig,
        output: PathBuf,
    },
    Animation {
        config: RenderConfig,
        settings: AnimationSettings,
        frames: u64,
        output_dir: PathBuf,
    },
}

impl CliArgs {
    /// Validates every flag before any rendering happens.
    pub fn into_request(self) -> Result<CliRequest, InvalidConfiguration> {
        let config = RenderConfig::new(self.kind, self.width, self.height, self.zoom)?
            .with_max_iterations(self.max_iterations)?;

        if !self.animate {
            return Ok(CliRequest::Still {
                config,
                output: self
                    .output
                    .unwrap_or_else(|| PathBuf::from(format!("fractal_{}.png", timestamp_millis()))),
            });
        }

        let settings = AnimationSettings {
            speed: AnimationSpeed::new(self.speed)?,
            bounds: ZoomBounds::default(),
        };

        Ok(CliRequest::Animation {
            config,
            settings,
            frames: self.frames,
            output_dir: self
                .output
                .unwrap_or_else(|| PathBuf::from(format!("fractal_{}_frames", timestamp_millis()))),
        })
    }
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}
