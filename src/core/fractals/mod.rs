pub mod escape_time;
pub mod fractal_kind;
