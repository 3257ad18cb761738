use core::fmt;
use std::fs;

use embedded_graphics::{pixelcolor::Rgb888, primitives::Rectangle};
use snafu::ResultExt;

use super::{ImageState, Renderer};
use crate::{
    config::{LayoutDescriptor, OutputConfig},
    error::WriteSourceSnafu,
    keyboard::{ArrowCluster, Key, KeyCap, TrackpadButtons},
    Result,
};

const KEY_PREFIX: &str = "HID_DEVICE_KEY_";
const INPUT_TYPE_PREFIX: &str = "LAYOUT_INPUT_TYPE_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Key(Key),
    Trackpad,
}

impl InputType {
    pub fn tag(&self) -> &'static str {
        match self {
            InputType::Key(_) => "KEY",
            InputType::Trackpad => "TRACKPAD",
        }
    }
}

/// One touch region of the layout as the firmware sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    pub kind: InputType,
    pub region: Rectangle,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rectangle { top_left, size } = self.region;
        write!(
            f,
            "{{ .type = {INPUT_TYPE_PREFIX}{}, .region = {{ {}, {}, {}, {} }}",
            self.kind.tag(),
            top_left.x,
            top_left.y,
            size.width,
            size.height
        )?;
        if let InputType::Key(key) = self.kind {
            write!(f, ", .key = {KEY_PREFIX}{}", key.ident())?;
        }
        f.write_str(" }")
    }
}

/// Collects input regions and writes them as a C layout definition.
#[derive(Debug, Clone)]
pub struct Codegen {
    descriptor: LayoutDescriptor,
    config: OutputConfig,
    inputs: Vec<Input>,
}

impl Codegen {
    pub fn new(descriptor: LayoutDescriptor, config: OutputConfig) -> Self {
        Codegen {
            descriptor,
            config,
            inputs: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn file_name(&self) -> String {
        format!("{}_layout.c", self.descriptor.id)
    }

    pub fn source(&self) -> String {
        SourceFile {
            descriptor: &self.descriptor,
            inputs: &self.inputs,
            embed_images: self.config.embed_images,
        }
        .to_string()
    }

    fn push_key(&mut self, key: Key, region: Rectangle) {
        self.inputs.push(Input {
            kind: InputType::Key(key),
            region,
        });
    }
}

impl Renderer for Codegen {
    fn fill(&mut self, _color: Rgb888) {}

    fn key(&mut self, keycap: &KeyCap, bounds: Rectangle) {
        self.push_key(keycap.key, bounds);
    }

    fn arrows(&mut self, bounds: Rectangle) {
        for (key, region) in ArrowCluster::split(bounds).keys() {
            self.push_key(key, region);
        }
    }

    fn trackpad(&mut self, bounds: Rectangle) {
        self.inputs.push(Input {
            kind: InputType::Trackpad,
            region: bounds,
        });
    }

    fn trackpad_buttons(&mut self, bounds: Rectangle) {
        for (key, region) in TrackpadButtons::split(bounds).keys() {
            self.push_key(key, region);
        }
    }

    fn write(self) -> Result<()> {
        let source = self.source();
        self.config.ensure_out_dir()?;
        let path = self.config.path(&self.file_name());
        fs::write(&path, source).context(WriteSourceSnafu { path: &path })?;
        log::info!(
            "wrote {} with {} inputs",
            path.display(),
            self.inputs.len()
        );
        Ok(())
    }
}

/// Body of a C string literal; only backslashes and quotes are escaped.
struct CLiteral<'a>(&'a str);

impl fmt::Display for CLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' | '"' => write!(f, "\\{c}")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

struct SourceFile<'a> {
    descriptor: &'a LayoutDescriptor,
    inputs: &'a [Input],
    embed_images: bool,
}

impl fmt::Display for SourceFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [base, active] = ImageState::ALL.map(|state| self.descriptor.image_symbol(state.name()));

        writeln!(f, "#include \"hid_device_key.h\"")?;
        writeln!(f, "#include \"layouts/layout.h\"")?;
        writeln!(f)?;
        if self.embed_images {
            writeln!(f, "extern const layout_image_t {base};")?;
            writeln!(f, "extern const layout_image_t {active};")?;
            writeln!(f)?;
        }

        writeln!(f, "static const layout_input_t layout_inputs[] = {{")?;
        for input in self.inputs {
            writeln!(f, "    {input},")?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(f, "static const layout_config_t layout_config = {{")?;
        writeln!(f, "    .name = \"{}\",", CLiteral(self.descriptor.name))?;
        writeln!(f, "    .inputs = layout_inputs,")?;
        writeln!(f, "    .count = {},", self.inputs.len())?;
        if self.embed_images {
            writeln!(f, "    .base_image = &{base},")?;
            writeln!(f, "    .active_image = &{active},")?;
        }
        writeln!(f, "}};")?;
        writeln!(f, "LAYOUT_REGISTER(layout_config)")
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::{Point, Size};

    use super::*;
    use crate::keyboard::{render, Layout, Row};

    const DESCRIPTOR: LayoutDescriptor = LayoutDescriptor {
        id: "test",
        name: "9. Test",
    };

    const ROWS: &[Row] = &[
        Row {
            height: 160,
            keys: &[KeyCap::new(Key::Escape, 100)],
        },
        Row {
            height: 80,
            keys: &[KeyCap::new(Key::A, 89), KeyCap::new(Key::S, 89)],
        },
    ];

    const LAYOUT: Layout = Layout {
        rows: ROWS,
        arrows: Rectangle::new(Point::new(916, 539), Size::new(344, 161)),
        trackpad: Rectangle::new(Point::new(384, 460), Size::new(512, 260)),
        trackpad_buttons: Rectangle::new(Point::new(20, 600), Size::new(344, 100)),
    };

    fn rect(x: i32, y: i32, width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    fn generate(config: OutputConfig) -> Codegen {
        let mut codegen = Codegen::new(DESCRIPTOR, config);
        render(&LAYOUT, &mut codegen);
        codegen
    }

    #[test]
    fn collects_inputs_in_traversal_order() {
        let codegen = generate(OutputConfig::default());
        let inputs = codegen.inputs();
        assert_eq!(inputs.len(), LAYOUT.input_count());
        assert_eq!(inputs.len(), 3 + 7);
        assert_eq!(
            inputs[1],
            Input {
                kind: InputType::Key(Key::A),
                region: rect(0, 160, 89, 80),
            }
        );
        assert_eq!(
            inputs[2],
            Input {
                kind: InputType::Key(Key::S),
                region: rect(89, 160, 89, 80),
            }
        );
        let kinds: Vec<_> = inputs[3..].iter().map(|input| input.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InputType::Key(Key::Left),
                InputType::Key(Key::Right),
                InputType::Key(Key::Up),
                InputType::Key(Key::Down),
                InputType::Trackpad,
                InputType::Key(Key::MouseButtonLeft),
                InputType::Key(Key::MouseButtonRight),
            ]
        );
    }

    #[test]
    fn formats_key_and_trackpad_inputs() {
        let key = Input {
            kind: InputType::Key(Key::LeftBracket),
            region: rect(1, 2, 3, 4),
        };
        assert_eq!(
            key.to_string(),
            "{ .type = LAYOUT_INPUT_TYPE_KEY, .region = { 1, 2, 3, 4 }, .key = HID_DEVICE_KEY_LEFT_BRACKET }"
        );
        let trackpad = Input {
            kind: InputType::Trackpad,
            region: rect(384, 460, 512, 260),
        };
        assert_eq!(
            trackpad.to_string(),
            "{ .type = LAYOUT_INPUT_TYPE_TRACKPAD, .region = { 384, 460, 512, 260 } }"
        );
    }

    #[test]
    fn source_without_images() {
        let source = generate(OutputConfig::default()).source();
        assert!(source.starts_with("#include \"hid_device_key.h\"\n#include \"layouts/layout.h\"\n\n"));
        assert!(source.contains(
            "    { .type = LAYOUT_INPUT_TYPE_KEY, .region = { 0, 0, 100, 160 }, .key = HID_DEVICE_KEY_ESCAPE },\n"
        ));
        assert!(source.contains(
            "static const layout_config_t layout_config = {\n    .name = \"9. Test\",\n    .inputs = layout_inputs,\n    .count = 10,\n};\n"
        ));
        assert!(source.ends_with("LAYOUT_REGISTER(layout_config)\n"));
        assert!(!source.contains("image"));
    }

    #[test]
    fn source_with_images() {
        let source = generate(OutputConfig {
            embed_images: true,
            ..OutputConfig::default()
        })
        .source();
        assert!(source.contains("extern const layout_image_t test_normal_image;\n"));
        assert!(source.contains("extern const layout_image_t test_active_image;\n"));
        assert!(source.contains(
            "    .count = 10,\n    .base_image = &test_normal_image,\n    .active_image = &test_active_image,\n};\n"
        ));
    }

    #[test]
    fn emits_mouse_buttons_as_numbered_keys() {
        let source = generate(OutputConfig::default()).source();
        assert!(source.contains(
            "    { .type = LAYOUT_INPUT_TYPE_KEY, .region = { 20, 600, 172, 100 }, .key = HID_DEVICE_KEY_MOUSE_BUTTON_1 },\n    { .type = LAYOUT_INPUT_TYPE_KEY, .region = { 192, 600, 172, 100 }, .key = HID_DEVICE_KEY_MOUSE_BUTTON_2 },\n};\n"
        ));
    }

    #[test]
    fn emits_arrow_keys_at_the_cluster_edge() {
        let source = generate(OutputConfig::default()).source();
        assert!(source.contains(
            "{ .type = LAYOUT_INPUT_TYPE_KEY, .region = { 916, 539, 116, 80 }, .key = HID_DEVICE_KEY_UP },"
        ));
        assert!(source.contains(
            "{ .type = LAYOUT_INPUT_TYPE_KEY, .region = { 916, 620, 116, 80 }, .key = HID_DEVICE_KEY_DOWN },"
        ));
    }

    #[test]
    fn escapes_name_as_c_literal() {
        assert_eq!(CLiteral("a \"b\" \\ é").to_string(), "a \\\"b\\\" \\\\ é");
        let mut codegen = Codegen::new(
            LayoutDescriptor {
                id: "fr",
                name: "2. Français",
            },
            OutputConfig::default(),
        );
        render(&LAYOUT, &mut codegen);
        assert!(codegen.source().contains("    .name = \"2. Français\",\n"));
    }

    #[test]
    fn source_is_deterministic() {
        assert_eq!(
            generate(OutputConfig::default()).source(),
            generate(OutputConfig::default()).source()
        );
    }

    #[test]
    fn writes_source_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            out_dir: dir.path().join("out"),
            embed_images: false,
        };
        let codegen = generate(config.clone());
        let expected = codegen.source();
        codegen.write().unwrap();
        let written = std::fs::read_to_string(config.path("test_layout.c")).unwrap();
        assert_eq!(written, expected);
    }

    #[test]
    fn reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let codegen = generate(OutputConfig {
            out_dir: blocker.join("out"),
            embed_images: false,
        });
        assert!(matches!(
            codegen.write(),
            Err(crate::Error::CreateOutputDir { .. })
        ));
    }
}
