use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use super::Key;

/// Inverted-T arrow keys carved out of one bounding box.
///
/// Left and right take a third of the width each and sit in the lower half,
/// one pixel taller than the up and down keys. Up and down share the left
/// edge of the box and keep the remaining width, stacked with a 1 pixel gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowCluster {
    pub left: Rectangle,
    pub right: Rectangle,
    pub up: Rectangle,
    pub down: Rectangle,
}

impl ArrowCluster {
    pub const LEN: usize = 4;

    pub fn split(bounds: Rectangle) -> Self {
        let Rectangle {
            top_left: Point { x, y },
            size: Size { width, height },
        } = bounds;
        let lr_width = width / 3;
        let ud_width = width - lr_width * 2;
        let half = height / 2;
        let middle = y + half as i32;

        ArrowCluster {
            left: Rectangle::new(Point::new(x, middle), Size::new(lr_width, half + 1)),
            right: Rectangle::new(
                Point::new(x + (width - lr_width) as i32, middle),
                Size::new(lr_width, half + 1),
            ),
            up: Rectangle::new(Point::new(x, y), Size::new(ud_width, half)),
            down: Rectangle::new(Point::new(x, middle + 1), Size::new(ud_width, half)),
        }
    }

    /// Regions in emission order.
    pub fn keys(&self) -> [(Key, Rectangle); Self::LEN] {
        [
            (Key::Left, self.left),
            (Key::Right, self.right),
            (Key::Up, self.up),
            (Key::Down, self.down),
        ]
    }
}

/// Left and right mouse buttons side by side; an odd pixel goes to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackpadButtons {
    pub left: Rectangle,
    pub right: Rectangle,
}

impl TrackpadButtons {
    pub const LEN: usize = 2;

    pub fn split(bounds: Rectangle) -> Self {
        let half = bounds.size.width / 2;
        TrackpadButtons {
            left: Rectangle::new(bounds.top_left, Size::new(half, bounds.size.height)),
            right: Rectangle::new(
                bounds.top_left + Point::new(half as i32, 0),
                Size::new(bounds.size.width - half, bounds.size.height),
            ),
        }
    }

    pub fn keys(&self) -> [(Key, Rectangle); Self::LEN] {
        [
            (Key::MouseButtonLeft, self.left),
            (Key::MouseButtonRight, self.right),
        ]
    }
}
