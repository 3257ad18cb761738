use core::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// C source defining `symbol` as a `layout_image_t` over `data`.
pub fn image_source(symbol: &str, data: &[u8]) -> String {
    let mut source = String::with_capacity(data.len() * 6 + 256);
    writeln!(source, "#include \"layouts/layout.h\"\n").ok();
    writeln!(source, "static const uint8_t {symbol}_data[] = {{").ok();
    for chunk in data.chunks(BYTES_PER_LINE) {
        source.push_str("   ");
        for byte in chunk {
            write!(source, " 0x{byte:02x},").ok();
        }
        source.push('\n');
    }
    writeln!(source, "}};\n").ok();
    writeln!(source, "const layout_image_t {symbol} = {{").ok();
    writeln!(source, "    .data = {symbol}_data,").ok();
    writeln!(source, "    .size = sizeof({symbol}_data),").ok();
    writeln!(source, "}};").ok();
    source
}
