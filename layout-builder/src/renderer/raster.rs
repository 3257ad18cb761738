use std::fs;

use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::{DrawTarget, Point, Primitive, RgbColor, Size},
    primitives::{
        Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
        StrokeAlignment, Triangle,
    },
    text::{Alignment, Baseline, Text, TextStyleBuilder},
    Drawable,
};
use image::{codecs::jpeg::JpegEncoder, ImageFormat};
use snafu::ResultExt;

use super::{image_source, Canvas, Renderer};
use crate::{
    config::{LayoutDescriptor, OutputConfig},
    error::{EncodeImageSnafu, SaveImageSnafu, WriteSourceSnafu},
    keyboard::{ArrowCluster, KeyCap, TrackpadButtons},
    Result,
};

const CORNER_RADIUS: u32 = 6;
const GLYPH_SIZE: i32 = 8;
const JPEG_QUALITY: u8 = 90;
const BORDER_COLOR: Rgb888 = Rgb888::new(0x66, 0x66, 0x66);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Normal,
    Active,
}

impl ImageState {
    pub const ALL: [ImageState; 2] = [ImageState::Normal, ImageState::Active];

    pub fn name(&self) -> &'static str {
        match self {
            ImageState::Normal => "normal",
            ImageState::Active => "active",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ImageState::Normal => Palette {
                background: Rgb888::BLACK,
                key: Rgb888::BLACK,
                text: Rgb888::WHITE,
            },
            ImageState::Active => Palette {
                background: Rgb888::BLACK,
                key: Rgb888::new(0x33, 0x33, 0x33),
                text: Rgb888::WHITE,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb888,
    pub key: Rgb888,
    pub text: Rgb888,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Draws the layout as the firmware shows it on screen.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    descriptor: LayoutDescriptor,
    state: ImageState,
    palette: Palette,
    config: OutputConfig,
    canvas: Canvas,
}

impl RasterRenderer {
    pub fn new(descriptor: LayoutDescriptor, state: ImageState, config: OutputConfig) -> Self {
        RasterRenderer {
            descriptor,
            state,
            palette: state.palette(),
            config,
            canvas: Canvas::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}.png", self.descriptor.id, self.state.name())
    }

    fn round_rect(&mut self, bounds: Rectangle) {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(self.palette.key)
            .stroke_color(BORDER_COLOR)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        RoundedRectangle::with_equal_corners(bounds, Size::new(CORNER_RADIUS, CORNER_RADIUS))
            .into_styled(style)
            .draw(&mut self.canvas)
            .ok();
    }

    fn label(&mut self, text: &str, bounds: Rectangle) {
        if text.is_empty() {
            return;
        }
        let character_style = MonoTextStyle::new(&FONT_10X20, self.palette.text);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(text, bounds.center(), character_style, text_style)
            .draw(&mut self.canvas)
            .ok();
    }

    fn glyph(&mut self, direction: Direction, bounds: Rectangle) {
        let c = bounds.center();
        let s = GLYPH_SIZE;
        let triangle = match direction {
            Direction::Left => Triangle::new(
                c + Point::new(-s, 0),
                c + Point::new(s, -s),
                c + Point::new(s, s),
            ),
            Direction::Right => Triangle::new(
                c + Point::new(s, 0),
                c + Point::new(-s, -s),
                c + Point::new(-s, s),
            ),
            Direction::Up => Triangle::new(
                c + Point::new(0, -s),
                c + Point::new(-s, s),
                c + Point::new(s, s),
            ),
            Direction::Down => Triangle::new(
                c + Point::new(0, s),
                c + Point::new(-s, -s),
                c + Point::new(s, -s),
            ),
        };
        triangle
            .into_styled(PrimitiveStyle::with_fill(self.palette.text))
            .draw(&mut self.canvas)
            .ok();
    }

    fn separator(&mut self, start: Point, end: Point) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(BORDER_COLOR, 1))
            .draw(&mut self.canvas)
            .ok();
    }

    fn write_image_source(&self, image: &image::RgbImage) -> Result<()> {
        let symbol = self.descriptor.image_symbol(self.state.name());
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
            .encode_image(image)
            .context(EncodeImageSnafu { symbol: &symbol })?;
        let path = self.config.path(&format!("{symbol}.c"));
        fs::write(&path, image_source(&symbol, &jpeg))
            .context(WriteSourceSnafu { path: &path })?;
        log::info!("wrote {} ({} bytes of JPEG)", path.display(), jpeg.len());
        Ok(())
    }
}

impl Renderer for RasterRenderer {
    fn fill(&mut self, color: Rgb888) {
        self.canvas.clear(color).ok();
    }

    fn key(&mut self, keycap: &KeyCap, bounds: Rectangle) {
        let inner = bounds.offset(-2);
        self.round_rect(inner);
        self.label(keycap.label(), inner);
    }

    fn arrows(&mut self, bounds: Rectangle) {
        let cluster = ArrowCluster::split(bounds);
        let left = cluster.left.offset(-2);
        let right = cluster.right.offset(-2);
        self.round_rect(left);
        self.glyph(Direction::Left, left);
        self.round_rect(right);
        self.glyph(Direction::Right, right);

        // up and down are drawn as one cap in the middle column
        let shift = Point::new(cluster.left.size.width as i32, 0);
        let up = Rectangle::new(cluster.up.top_left + shift, cluster.up.size);
        let down = Rectangle::new(cluster.down.top_left + shift, cluster.down.size);
        let column = Rectangle::new(up.top_left, Size::new(up.size.width, bounds.size.height))
            .offset(-2);
        self.round_rect(column);
        self.glyph(Direction::Up, up);
        self.glyph(Direction::Down, down);
        let y = down.top_left.y - 1;
        self.separator(
            Point::new(column.top_left.x + 8, y),
            Point::new(column.top_left.x + column.size.width as i32 - 9, y),
        );
    }

    fn trackpad(&mut self, bounds: Rectangle) {
        self.round_rect(bounds.offset(-2));
    }

    fn trackpad_buttons(&mut self, bounds: Rectangle) {
        self.round_rect(bounds.offset(-1));
        let x = TrackpadButtons::split(bounds).right.top_left.x;
        let top = bounds.top_left.y + 10;
        let bottom = bounds.top_left.y + bounds.size.height as i32 - 11;
        self.separator(Point::new(x, top), Point::new(x, bottom));
    }

    fn write(self) -> Result<()> {
        let rotated = self.canvas.rotated();
        self.config.ensure_out_dir()?;
        let path = self.config.path(&self.file_name());
        rotated
            .save_with_format(&path, ImageFormat::Png)
            .context(SaveImageSnafu { path: &path })?;
        log::info!(
            "wrote {} ({}x{})",
            path.display(),
            rotated.width(),
            rotated.height()
        );

        if self.config.embed_images {
            self.write_image_source(&rotated)?;
        }
        Ok(())
    }
}
