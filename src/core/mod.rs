pub mod actions;
pub mod animation;
pub mod colour_maps;
pub mod data;
pub mod errors;
pub mod fractals;
pub mod util;
