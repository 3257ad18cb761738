use embedded_graphics::primitives::Rectangle;

use super::{ArrowCluster, Key, TrackpadButtons};

/// A key cap in a row. Its height comes from the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    pub key: Key,
    pub label: Option<&'static str>,
    pub width: u32,
}

impl KeyCap {
    pub const fn new(key: Key, width: u32) -> Self {
        KeyCap {
            key,
            label: None,
            width,
        }
    }

    pub const fn labeled(key: Key, label: &'static str, width: u32) -> Self {
        KeyCap {
            key,
            label: Some(label),
            width,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label.unwrap_or(self.key.legend())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub height: u32,
    pub keys: &'static [KeyCap],
}

/// A complete screen layout: key rows flowing from the top-left corner and
/// the controls placed at fixed positions.
///
/// Widths are not checked against the screen; rows that do not add up to the
/// screen width simply leave a gap or run off the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub rows: &'static [Row],
    pub arrows: Rectangle,
    pub trackpad: Rectangle,
    pub trackpad_buttons: Rectangle,
}

impl Layout {
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(|row| row.keys.len()).sum()
    }

    /// Number of input regions the layout produces, trackpad included.
    pub fn input_count(&self) -> usize {
        self.key_count() + ArrowCluster::LEN + 1 + TrackpadButtons::LEN
    }
}
