use embedded_graphics::{pixelcolor::Rgb888, primitives::Rectangle};

use crate::{keyboard::KeyCap, Result};

mod canvas;
mod codegen;
mod embed;
mod raster;

pub use canvas::Canvas;
pub use codegen::{Codegen, Input, InputType};
pub use embed::image_source;
pub use raster::{ImageState, Palette, RasterRenderer};

/// Sink driven by [`crate::keyboard::render`]. Each implementation collects
/// what it needs and produces its artifact in [`Renderer::write`].
pub trait Renderer {
    fn fill(&mut self, color: Rgb888);

    fn key(&mut self, keycap: &KeyCap, bounds: Rectangle);

    fn arrows(&mut self, bounds: Rectangle);

    fn trackpad(&mut self, bounds: Rectangle);

    fn trackpad_buttons(&mut self, bounds: Rectangle);

    fn write(self) -> Result<()>
    where
        Self: Sized;
}
