use rayon::prelude::*;

use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::colour_maps::hue_cycle::HueCycleColourMap;
use crate::core::data::point::Point;
use crate::core::data::raster_buffer::{write_opaque, RasterBuffer, BYTES_PER_PIXEL};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;

/// Renders one full frame for `config`. Rows are computed in parallel; the
/// buffer is returned only once every row is written.
#[must_use]
pub fn render(config: &RenderConfig) -> RasterBuffer {
    let algorithm = EscapeTimeAlgorithm::new(config);
    let colour_map = HueCycleColourMap::new(config.palette(), config.max_iterations());

    render_raster_parallel(config.viewport(), &algorithm, &colour_map)
}

/// Row-major single-threaded composition.
pub fn render_raster_serial<Alg, CMap>(
    viewport: Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) -> RasterBuffer
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    let mut raster = RasterBuffer::new(viewport.width(), viewport.height());
    let stride = raster.row_stride();

    for (y, row) in raster.data_mut().chunks_exact_mut(stride).enumerate() {
        render_row(y as u32, row, algorithm, colour_map);
    }

    raster
}

/// Composition with one rayon task per row. Each task owns a disjoint
/// mutable row slice, so no synchronisation is needed.
pub fn render_raster_parallel<Alg, CMap>(
    viewport: Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) -> RasterBuffer
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap + Sync,
{
    let mut raster = RasterBuffer::new(viewport.width(), viewport.height());
    let stride = raster.row_stride();

    raster
        .data_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| render_row(y as u32, row, algorithm, colour_map));

    raster
}

#[inline]
fn render_row<Alg, CMap>(y: u32, row: &mut [u8], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap,
{
    for (x, slot) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let pixel = Point { x: x as u32, y };
        let iterations = algorithm.compute(pixel);

        write_opaque(slot, colour_map.map(pixel, iterations));
    }
}
