//! Fixed-width rendering of embedded byte payloads.

/// Byte literals per generated source line.
pub const BYTES_PER_LINE: usize = 12;

const LINE_INDENT: &str = "    ";

/// Render a byte sequence as the body of a fixed-size array literal.
///
/// Each byte becomes a 3-digit zero-padded decimal; entries within a
/// line are joined by `", "`, every [`BYTES_PER_LINE`]th entry is
/// followed by a line break instead, and there is no trailing comma.
/// The layout is part of the output contract and must stay bit-for-bit
/// reproducible.
pub fn render_byte_lines(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 5);

    for (i, byte) in bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.push_str(LINE_INDENT);
        }
        out.push_str(&format!("{byte:03}"));

        if i + 1 != bytes.len() {
            out.push(',');
            if (i + 1) % BYTES_PER_LINE == 0 {
                out.push('\n');
            } else {
                out.push(' ');
            }
        }
    }

    out
}
