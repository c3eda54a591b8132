pub mod ports;
pub mod render_raster;
