pub mod png;
pub mod png_sequence;
