//! Input adapters for the renderer.
//!
//! Adapters here receive input from outside the process and translate it
//! into validated domain requests.

pub mod cli;
