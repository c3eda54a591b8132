pub mod hsl;
pub mod hue_cycle;
pub mod palette;
