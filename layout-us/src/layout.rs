use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};
use layout_builder::{
    config::LayoutDescriptor,
    keyboard::{Key, KeyCap, Layout, Row},
};

pub const DESCRIPTOR: LayoutDescriptor = LayoutDescriptor {
    id: "us",
    name: "1. US",
};

const FN: u32 = 60;
const ROW: u32 = 80;
const K: u32 = 89; // regular key

const FUNCTION_ROW: [KeyCap; 14] = [
    KeyCap::new(Key::Escape, 92),
    KeyCap::new(Key::F1, 92),
    KeyCap::new(Key::F2, 91),
    KeyCap::new(Key::F3, 91),
    KeyCap::new(Key::F4, 92),
    KeyCap::new(Key::F5, 91),
    KeyCap::new(Key::F6, 91),
    KeyCap::new(Key::F7, 92),
    KeyCap::new(Key::F8, 91),
    KeyCap::new(Key::F9, 91),
    KeyCap::new(Key::F10, 92),
    KeyCap::new(Key::F11, 91),
    KeyCap::new(Key::F12, 91),
    KeyCap::new(Key::Delete, 92),
];

const NUMBER_ROW: [KeyCap; 14] = [
    KeyCap::new(Key::Grave, K),
    KeyCap::new(Key::Digit1, K),
    KeyCap::new(Key::Digit2, K),
    KeyCap::new(Key::Digit3, K),
    KeyCap::new(Key::Digit4, K),
    KeyCap::new(Key::Digit5, K),
    KeyCap::new(Key::Digit6, K),
    KeyCap::new(Key::Digit7, K),
    KeyCap::new(Key::Digit8, K),
    KeyCap::new(Key::Digit9, K),
    KeyCap::new(Key::Digit0, K),
    KeyCap::new(Key::Minus, K),
    KeyCap::new(Key::Equal, K),
    KeyCap::new(Key::Backspace, 123),
];

const TAB_ROW: [KeyCap; 14] = [
    KeyCap::new(Key::Tab, 123),
    KeyCap::new(Key::Q, K),
    KeyCap::new(Key::W, K),
    KeyCap::new(Key::E, K),
    KeyCap::new(Key::R, K),
    KeyCap::new(Key::T, K),
    KeyCap::new(Key::Y, K),
    KeyCap::new(Key::U, K),
    KeyCap::new(Key::I, K),
    KeyCap::new(Key::O, K),
    KeyCap::new(Key::P, K),
    KeyCap::new(Key::LeftBracket, K),
    KeyCap::new(Key::RightBracket, K),
    KeyCap::new(Key::Backslash, K),
];

const CAPS_ROW: [KeyCap; 13] = [
    KeyCap::new(Key::CapsLock, 150),
    KeyCap::new(Key::A, K),
    KeyCap::new(Key::S, K),
    KeyCap::new(Key::D, K),
    KeyCap::new(Key::F, K),
    KeyCap::new(Key::G, K),
    KeyCap::new(Key::H, K),
    KeyCap::new(Key::J, K),
    KeyCap::new(Key::K, K),
    KeyCap::new(Key::L, K),
    KeyCap::new(Key::Semicolon, K),
    KeyCap::new(Key::Quote, K),
    KeyCap::new(Key::Enter, 151),
];

const SHIFT_ROW: [KeyCap; 12] = [
    KeyCap::new(Key::LeftShift, 195),
    KeyCap::new(Key::Z, K),
    KeyCap::new(Key::X, K),
    KeyCap::new(Key::C, K),
    KeyCap::new(Key::V, K),
    KeyCap::new(Key::B, K),
    KeyCap::new(Key::N, K),
    KeyCap::new(Key::M, K),
    KeyCap::new(Key::Comma, K),
    KeyCap::new(Key::Dot, K),
    KeyCap::new(Key::Slash, K),
    KeyCap::new(Key::RightShift, 195),
];

const BOTTOM_ROW: [KeyCap; 7] = [
    KeyCap::new(Key::LeftCtrl, 112),
    KeyCap::new(Key::LeftGui, 112),
    KeyCap::new(Key::LeftAlt, 112),
    KeyCap::labeled(Key::Space, "", 608),
    KeyCap::new(Key::RightAlt, 112),
    KeyCap::new(Key::RightGui, 112),
    KeyCap::new(Key::RightCtrl, 112),
];

pub static LAYOUT: Layout = Layout {
    rows: &[
        Row {
            height: FN,
            keys: &FUNCTION_ROW,
        },
        Row {
            height: ROW,
            keys: &NUMBER_ROW,
        },
        Row {
            height: ROW,
            keys: &TAB_ROW,
        },
        Row {
            height: ROW,
            keys: &CAPS_ROW,
        },
        Row {
            height: ROW,
            keys: &SHIFT_ROW,
        },
        Row {
            height: ROW,
            keys: &BOTTOM_ROW,
        },
    ],
    arrows: Rectangle::new(Point::new(916, 539), Size::new(344, 161)),
    trackpad: Rectangle::new(Point::new(384, 460), Size::new(512, 260)),
    trackpad_buttons: Rectangle::new(Point::new(20, 600), Size::new(344, 100)),
};
