use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::controllers::data::frame_data::FrameData;
use crate::controllers::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_raster::render_raster::render;
use crate::core::animation::motion::{step_zoom, AnimationState, ZoomDirection};
use crate::core::animation::settings::AnimationSettings;
use crate::core::data::raster_buffer::RasterBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::errors::InvalidConfiguration;

#[derive(Debug, Error)]
pub enum DriverError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Configuration(#[from] InvalidConfiguration),
    #[error("frame sink rejected frame: {0}")]
    Sink(#[source] E),
}

/// Discrete-time zoom oscillation. Each tick advances the zoom once, renders
/// one full frame at the new zoom and hands it to the sink before returning.
pub struct AnimationDriver<S: FrameSink> {
    config: RenderConfig,
    settings: AnimationSettings,
    state: AnimationState,
    running: bool,
    frame_index: u64,
    sink: S,
}

impl<S: FrameSink> AnimationDriver<S> {
    /// The oscillation starts from the zoom carried by `config`.
    pub fn new(config: RenderConfig, settings: AnimationSettings, sink: S) -> Self {
        Self {
            config,
            settings,
            state: AnimationState::starting_at(config.viewport().zoom()),
            running: false,
            frame_index: 0,
            sink,
        }
    }

    /// Resumes ticking from the last zoom, heading up again.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        self.running = true;
        self.state.direction = ZoomDirection::Increasing;
        debug!(zoom = self.state.zoom, "animation started");
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!(zoom = self.state.zoom, frames = self.frame_index, "animation stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    #[must_use]
    pub fn direction(&self) -> ZoomDirection {
        self.state.direction
    }

    /// Number of frames handed to the sink so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frame_index
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Renders the current zoom without advancing the oscillation.
    pub fn render_current(&self) -> Result<RasterBuffer, InvalidConfiguration> {
        let config = self.config.with_zoom(self.state.zoom)?;

        Ok(render(&config))
    }

    /// Returns the index of the submitted frame, or `None` while stopped.
    pub fn tick(&mut self) -> Result<Option<u64>, DriverError<S::Error>> {
        if !self.running {
            return Ok(None);
        }

        let report = step_zoom(
            &mut self.state,
            self.settings.speed.get(),
            &self.settings.bounds,
        );

        if let Some(direction) = report.turned {
            debug!(zoom = self.state.zoom, ?direction, "zoom oscillation turned");
        }

        let config = match self.config.with_zoom(self.state.zoom) {
            Ok(config) => config,
            Err(err) => {
                self.running = false;
                return Err(err.into());
            }
        };

        let start = Instant::now();
        let raster = render(&config);
        let render_duration = start.elapsed();

        let frame_index = self.frame_index;
        self.frame_index += 1;

        debug!(
            frame_index,
            zoom = self.state.zoom,
            direction = ?self.state.direction,
            ?render_duration,
            "animation frame rendered"
        );

        self.sink
            .submit(FrameData {
                frame_index,
                zoom: self.state.zoom,
                direction: self.state.direction,
                raster,
                render_duration,
            })
            .map_err(DriverError::Sink)?;

        Ok(Some(frame_index))
    }

    /// Ticks until `cancel` fires or `frame_limit` frames have been rendered
    /// by this call, then stops. Cancellation is polled between ticks only.
    pub fn run<C: CancelToken>(
        &mut self,
        cancel: &C,
        frame_limit: Option<u64>,
    ) -> Result<u64, DriverError<S::Error>> {
        self.start();

        let mut rendered = 0;

        while self.running && frame_limit.is_none_or(|limit| rendered < limit) {
            if cancel.is_cancelled() {
                debug!(rendered, "animation cancelled");
                break;
            }

            if let Err(err) = self.tick() {
                self.stop();
                return Err(err);
            }

            rendered += 1;
        }

        self.stop();

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::animation::bounds::ZoomBounds;
    use crate::core::animation::speed::AnimationSpeed;
    use crate::core::fractals::fractal_kind::FractalKind;
    use std::cell::Cell;
    use std::convert::Infallible;

    const EPSILON: f64 = 1e-9;

    #[derive(Default)]
    struct CollectingSink {
        frames: Vec<FrameData>,
    }

    impl FrameSink for CollectingSink {
        type Error = Infallible;

        fn submit(&mut self, frame: FrameData) -> Result<(), Self::Error> {
            self.frames.push(frame);
            Ok(())
        }
    }

    #[derive(Debug, Error)]
    #[error("sink is full")]
    struct SinkFull;

    struct RejectingSink;

    impl FrameSink for RejectingSink {
        type Error = SinkFull;

        fn submit(&mut self, _frame: FrameData) -> Result<(), Self::Error> {
            Err(SinkFull)
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig::new(FractalKind::Mandelbrot, 8, 6, 1.2).unwrap()
    }

    fn settings_with_speed(speed: f64) -> AnimationSettings {
        AnimationSettings {
            speed: AnimationSpeed::new(speed).unwrap(),
            bounds: ZoomBounds::default(),
        }
    }

    fn driver(speed: f64) -> AnimationDriver<CollectingSink> {
        AnimationDriver::new(
            small_config(),
            settings_with_speed(speed),
            CollectingSink::default(),
        )
    }

    #[test]
    fn new_driver_is_stopped_at_the_configured_zoom() {
        let driver = driver(0.03);

        assert!(!driver.is_running());
        assert_eq!(driver.zoom(), 1.2);
        assert_eq!(driver.direction(), ZoomDirection::Increasing);
        assert_eq!(driver.frames_rendered(), 0);
    }

    #[test]
    fn tick_while_stopped_does_nothing() {
        let mut driver = driver(0.03);

        assert_eq!(driver.tick().unwrap(), None);
        assert_eq!(driver.zoom(), 1.2);
        assert!(driver.sink().frames.is_empty());
    }

    #[test]
    fn each_tick_steps_once_and_submits_one_frame() {
        let mut driver = driver(0.03);
        driver.start();

        assert_eq!(driver.tick().unwrap(), Some(0));
        assert_eq!(driver.tick().unwrap(), Some(1));

        let frames = &driver.sink().frames;
        assert_eq!(frames.len(), 2);
        assert!((frames[0].zoom - 1.23).abs() < EPSILON);
        assert!((frames[1].zoom - 1.26).abs() < EPSILON);
        assert_eq!(frames[0].raster.width(), 8);
        assert_eq!(frames[0].raster.height(), 6);
        assert_eq!(frames[0].raster.data().len(), 8 * 6 * 4);
    }

    #[test]
    fn frame_raster_matches_a_direct_render_at_the_same_zoom() {
        let mut driver = driver(0.03);
        driver.start();
        driver.tick().unwrap();

        let frame = &driver.sink().frames[0];
        let expected = render(&small_config().with_zoom(frame.zoom).unwrap());

        assert_eq!(frame.raster, expected);
    }

    #[test]
    fn run_stops_after_frame_limit() {
        let mut driver = driver(0.03);

        let rendered = driver.run(&NeverCancel, Some(5)).unwrap();

        assert_eq!(rendered, 5);
        assert!(!driver.is_running());
        let indices: Vec<u64> = driver.sink().frames.iter().map(|f| f.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn run_observes_cancellation_between_ticks() {
        let mut driver = driver(0.03);
        let polls = Cell::new(0);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > 3
        };

        let rendered = driver.run(&cancel, None).unwrap();

        assert_eq!(rendered, 3);
        assert_eq!(driver.sink().frames.len(), 3);
        assert!(!driver.is_running());
    }

    #[test]
    fn restart_keeps_zoom_and_heads_up_again() {
        let mut driver = driver(0.05);
        driver.run(&NeverCancel, Some(20)).unwrap();

        assert_eq!(driver.direction(), ZoomDirection::Decreasing);
        let stopped_at = driver.zoom();

        driver.start();
        assert_eq!(driver.zoom(), stopped_at);
        assert_eq!(driver.direction(), ZoomDirection::Increasing);

        driver.tick().unwrap();
        assert!((driver.zoom() - (stopped_at + 0.05)).abs() < EPSILON);
        assert_eq!(driver.frames_rendered(), 21);
    }

    #[test]
    fn frames_record_the_oscillation_within_bounds() {
        let speed = 0.05;
        let mut driver = driver(speed);
        driver.run(&NeverCancel, Some(60)).unwrap();

        let frames = driver.into_sink().frames;
        assert!(frames.iter().any(|f| f.direction == ZoomDirection::Decreasing));
        assert!(frames.iter().any(|f| f.zoom < 1.1));
        for frame in &frames {
            assert!(frame.zoom <= 2.0 + speed + EPSILON);
            assert!(frame.zoom >= 1.1 - speed - EPSILON);
        }
    }

    #[test]
    fn render_current_does_not_advance() {
        let driver = driver(0.03);

        let raster = driver.render_current().unwrap();

        assert_eq!(raster, render(&small_config()));
        assert_eq!(driver.zoom(), 1.2);
    }

    #[test]
    fn sink_failure_stops_the_run() {
        let mut driver =
            AnimationDriver::new(small_config(), settings_with_speed(0.03), RejectingSink);

        let result = driver.run(&NeverCancel, None);

        assert!(matches!(result, Err(DriverError::Sink(SinkFull))));
        assert!(!driver.is_running());
    }

    #[test]
    fn zoom_leaving_the_valid_range_is_a_configuration_error() {
        let settings = AnimationSettings {
            speed: AnimationSpeed::new(0.05).unwrap(),
            bounds: ZoomBounds {
                lower: -10.0,
                upper: -5.0,
            },
        };
        let mut driver = AnimationDriver::new(small_config(), settings, CollectingSink::default());

        let result = driver.run(&NeverCancel, Some(100));

        assert!(matches!(
            result,
            Err(DriverError::Configuration(InvalidConfiguration::Viewport(_)))
        ));
        assert!(!driver.is_running());
    }
}
