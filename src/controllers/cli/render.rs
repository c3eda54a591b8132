use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::animation::driver::{AnimationDriver, DriverError};
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::controllers::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::render_raster::render_raster::render;
use crate::core::animation::settings::AnimationSettings;
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::render_config::RenderConfig;

pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<RasterBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &RenderConfig) {
        let viewport = config.viewport();

        info!(
            kind = config.kind().display_name(),
            width = viewport.width(),
            height = viewport.height(),
            zoom = viewport.zoom(),
            max_iterations = config.max_iterations(),
            "rendering fractal"
        );

        let start = Instant::now();
        let raster = render(config);
        let duration = start.elapsed();

        info!(?duration, "render complete");

        self.buffer = Some(raster);
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&RasterBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated raster. Does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }

    /// Runs a bounded zoom animation into `sink` and returns the sink with the
    /// number of frames rendered.
    pub fn animate<S: FrameSink>(
        &self,
        config: RenderConfig,
        settings: AnimationSettings,
        sink: S,
        frames: u64,
    ) -> Result<(S, u64), DriverError<S::Error>> {
        info!(
            kind = config.kind().display_name(),
            width = config.viewport().width(),
            height = config.viewport().height(),
            speed = settings.speed.get(),
            frames,
            "rendering animation"
        );

        let start = Instant::now();
        let mut driver = AnimationDriver::new(config, settings, sink);
        let rendered = driver.run(&NeverCancel, Some(frames))?;

        info!(
            rendered,
            final_zoom = driver.zoom(),
            duration = ?start.elapsed(),
            "animation complete"
        );

        Ok((driver.into_sink(), rendered))
    }
}
