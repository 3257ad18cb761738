use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use super::Layout;
use crate::renderer::Renderer;

/// Replays `layout` into `renderer`: rows top to bottom, keys left to right,
/// then the arrow cluster, the trackpad and the trackpad buttons.
pub fn render<R: Renderer + ?Sized>(layout: &Layout, renderer: &mut R) {
    let mut y = 0;
    for row in layout.rows {
        let mut x = 0;
        for keycap in row.keys {
            let bounds = Rectangle::new(Point::new(x, y), Size::new(keycap.width, row.height));
            renderer.key(keycap, bounds);
            x += keycap.width as i32;
        }
        y += row.height as i32;
    }

    renderer.arrows(layout.arrows);
    renderer.trackpad(layout.trackpad);
    renderer.trackpad_buttons(layout.trackpad_buttons);
}
