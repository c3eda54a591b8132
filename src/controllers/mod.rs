pub mod animation;
pub mod cli;
pub mod data;
pub mod ports;
