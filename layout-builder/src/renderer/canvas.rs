use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{DrawTarget, OriginDimensions, Pixel, RgbColor, Size},
};
use image::{imageops, Rgb, RgbImage};

/// In-memory RGB surface that embedded-graphics draws on. Pixels outside the
/// surface are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 720;

    pub fn new() -> Self {
        Self::with_size(Size::new(Self::WIDTH, Self::HEIGHT))
    }

    pub fn with_size(size: Size) -> Self {
        Canvas {
            image: RgbImage::new(size.width, size.height),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        (x < self.image.width() && y < self.image.height()).then(|| {
            let Rgb([r, g, b]) = *self.image.get_pixel(x, y);
            Rgb888::new(r, g, b)
        })
    }

    /// The surface turned 90 degrees counter-clockwise, as the panel is
    /// mounted in portrait.
    pub fn rotated(&self) -> RgbImage {
        imageops::rotate270(&self.image)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < width && (coord.y as u32) < height
            {
                self.image.put_pixel(
                    coord.x as u32,
                    coord.y as u32,
                    Rgb([color.r(), color.g(), color.b()]),
                );
            }
        }
        Ok(())
    }
}
