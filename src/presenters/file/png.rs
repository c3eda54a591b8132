use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::raster_buffer::RasterBuffer;

/// Writes rasters as 8-bit RGBA PNG files, creating missing parent directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFilePresenter;

impl PngFilePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &RasterBuffer, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        image::save_buffer_with_format(
            filepath,
            buffer.data(),
            buffer.width(),
            buffer.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_raster::render_raster::render;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::render_config::RenderConfig;
    use crate::core::fractals::fractal_kind::FractalKind;

    #[test]
    fn written_png_decodes_to_the_same_rgba_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fractal.png");
        let raster = render(&RenderConfig::new(FractalKind::Julia, 12, 9, 1.2).unwrap());

        PngFilePresenter::new().present(&raster, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (12, 9));
        assert_eq!(decoded.as_raw().as_slice(), raster.data());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        let mut raster = RasterBuffer::new(2, 1);
        raster
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 10, g: 20, b: 30 })
            .unwrap();

        PngFilePresenter::new().present(&raster, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn reports_io_failure_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = PngFilePresenter::new().present(&RasterBuffer::new(1, 1), blocker.join("out.png"));

        assert!(matches!(result, Err(PresentError::Io(_))));
    }
}
