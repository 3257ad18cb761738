//! Turns a static screen layout into the images and the C layout definition
//! the firmware build links in.

pub mod config;
mod error;
pub mod keyboard;
pub mod renderer;

pub use error::{Error, Result};
