use std::path::{Path, PathBuf};

use tracing::debug;

use crate::controllers::data::frame_data::FrameData;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::controllers::ports::frame_sink::FrameSink;
use crate::presenters::file::png::PngFilePresenter;

/// Frame sink that writes each frame to `<directory>/frame_NNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    directory: PathBuf,
    presenter: PngFilePresenter,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, PresentError> {
        let directory = directory.as_ref().to_path_buf();
        std::fs::create_dir_all(&directory)?;

        Ok(Self {
            directory,
            presenter: PngFilePresenter::new(),
            written: Vec::new(),
        })
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    #[must_use]
    pub fn frame_path(&self, frame_index: u64) -> PathBuf {
        self.directory.join(format!("frame_{:04}.png", frame_index))
    }
}

impl FrameSink for PngSequenceSink {
    type Error = PresentError;

    fn submit(&mut self, frame: FrameData) -> Result<(), Self::Error> {
        let path = self.frame_path(frame.frame_index);
        self.presenter.present(&frame.raster, &path)?;

        debug!(path = %path.display(), zoom = frame.zoom, "frame written");
        self.written.push(path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::motion::ZoomDirection;
    use crate::core::data::raster_buffer::RasterBuffer;
    use std::time::Duration;

    fn frame(frame_index: u64) -> FrameData {
        FrameData {
            frame_index,
            zoom: 1.2,
            direction: ZoomDirection::Increasing,
            raster: RasterBuffer::new(3, 2),
            render_duration: Duration::ZERO,
        }
    }

    #[test]
    fn frame_names_are_zero_padded() {
        let dir = tempfile::tempdir().unwrap();
        let sink = PngSequenceSink::new(dir.path()).unwrap();

        assert_eq!(sink.frame_path(7), dir.path().join("frame_0007.png"));
        assert_eq!(sink.frame_path(12345), dir.path().join("frame_12345.png"));
    }

    #[test]
    fn creates_the_directory_and_writes_each_frame() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("frames");
        let mut sink = PngSequenceSink::new(&target).unwrap();

        sink.submit(frame(0)).unwrap();
        sink.submit(frame(1)).unwrap();

        assert!(target.is_dir());
        assert_eq!(sink.written().len(), 2);
        for path in sink.written() {
            let decoded = image::open(path).unwrap().to_rgba8();
            assert_eq!(decoded.dimensions(), (3, 2));
        }
    }
}
