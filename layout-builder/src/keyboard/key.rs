macro_rules! keys {
    ($($variant:ident => ($ident:literal, $legend:literal),)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Name of the key code in the firmware's `HID_DEVICE_KEY_*` namespace.
            pub const fn ident(&self) -> &'static str {
                match self {
                    $(Key::$variant => $ident,)*
                }
            }

            /// Legend printed on the key cap unless the layout overrides it.
            pub const fn legend(&self) -> &'static str {
                match self {
                    $(Key::$variant => $legend,)*
                }
            }
        }
    };
}

keys! {
    A => ("A", "A"),
    B => ("B", "B"),
    C => ("C", "C"),
    D => ("D", "D"),
    E => ("E", "E"),
    F => ("F", "F"),
    G => ("G", "G"),
    H => ("H", "H"),
    I => ("I", "I"),
    J => ("J", "J"),
    K => ("K", "K"),
    L => ("L", "L"),
    M => ("M", "M"),
    N => ("N", "N"),
    O => ("O", "O"),
    P => ("P", "P"),
    Q => ("Q", "Q"),
    R => ("R", "R"),
    S => ("S", "S"),
    T => ("T", "T"),
    U => ("U", "U"),
    V => ("V", "V"),
    W => ("W", "W"),
    X => ("X", "X"),
    Y => ("Y", "Y"),
    Z => ("Z", "Z"),
    Digit1 => ("1", "1"),
    Digit2 => ("2", "2"),
    Digit3 => ("3", "3"),
    Digit4 => ("4", "4"),
    Digit5 => ("5", "5"),
    Digit6 => ("6", "6"),
    Digit7 => ("7", "7"),
    Digit8 => ("8", "8"),
    Digit9 => ("9", "9"),
    Digit0 => ("0", "0"),
    Enter => ("ENTER", "Enter"),
    Escape => ("ESCAPE", "Esc"),
    Backspace => ("BACKSPACE", "Back"),
    Tab => ("TAB", "Tab"),
    Space => ("SPACE", "Space"),
    Minus => ("MINUS", "-"),
    Equal => ("EQUAL", "="),
    LeftBracket => ("LEFT_BRACKET", "["),
    RightBracket => ("RIGHT_BRACKET", "]"),
    Backslash => ("BACKSLASH", "\\"),
    Semicolon => ("SEMICOLON", ";"),
    Quote => ("QUOTE", "'"),
    Grave => ("GRAVE", "`"),
    Comma => ("COMMA", ","),
    Dot => ("DOT", "."),
    Slash => ("SLASH", "/"),
    CapsLock => ("CAPS_LOCK", "Caps"),
    F1 => ("F1", "F1"),
    F2 => ("F2", "F2"),
    F3 => ("F3", "F3"),
    F4 => ("F4", "F4"),
    F5 => ("F5", "F5"),
    F6 => ("F6", "F6"),
    F7 => ("F7", "F7"),
    F8 => ("F8", "F8"),
    F9 => ("F9", "F9"),
    F10 => ("F10", "F10"),
    F11 => ("F11", "F11"),
    F12 => ("F12", "F12"),
    Delete => ("DELETE", "Del"),
    Right => ("RIGHT", "Right"),
    Left => ("LEFT", "Left"),
    Down => ("DOWN", "Down"),
    Up => ("UP", "Up"),
    LeftCtrl => ("LEFT_CTRL", "Ctrl"),
    LeftShift => ("LEFT_SHIFT", "Shift"),
    LeftAlt => ("LEFT_ALT", "Alt"),
    LeftGui => ("LEFT_GUI", "Win"), // Win key(Windows), Command key(Mac), Meta key
    RightCtrl => ("RIGHT_CTRL", "Ctrl"),
    RightShift => ("RIGHT_SHIFT", "Shift"),
    RightAlt => ("RIGHT_ALT", "Alt"),
    RightGui => ("RIGHT_GUI", "Win"),
    MouseButtonLeft => ("MOUSE_BUTTON_1", "L"),
    MouseButtonRight => ("MOUSE_BUTTON_2", "R"),
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Key;

    #[test]
    fn idents_are_unique_c_identifiers() {
        let mut seen = HashSet::new();
        for key in Key::ALL {
            let ident = key.ident();
            assert!(seen.insert(ident), "duplicate ident {ident}");
            assert!(ident
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    #[test]
    fn legends_fall_back_to_printable_ascii() {
        assert_eq!(Key::Escape.legend(), "Esc");
        assert_eq!(Key::Backslash.legend(), "\\");
        assert!(Key::ALL
            .iter()
            .all(|key| key.legend().chars().all(|c| c.is_ascii_graphic())));
    }
}
