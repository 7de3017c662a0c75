//! Per-file source module emission.

use crate::namespace::NamespacePath;
use crate::render::render_byte_lines;

/// Marker comment at the top of every generated file.
pub const AUTOGENERATED_MARKER: &str = "// AUTOGENERATED";

/// Render one self-contained source module embedding `bytes`.
///
/// The module opens the root namespace, then each namespace in the
/// path, defines the array with an explicit length equal to the byte
/// count, and closes every namespace in reverse order with a comment
/// naming it. Modules carry no dependency on each other or on emission
/// order.
pub fn render_module(
    root_namespace: &str,
    namespace_path: &NamespacePath,
    array_name: &str,
    bytes: &[u8],
) -> String {
    let mut out = String::with_capacity(bytes.len() * 5 + 256);

    out.push_str(AUTOGENERATED_MARKER);
    out.push_str("\n\n#include <array>\n#include <cstdint>\n\n");

    out.push_str(&format!("namespace {root_namespace} {{\n"));
    for ns in namespace_path.segments() {
        out.push_str(&format!("namespace {ns} {{\n"));
    }

    out.push_str(&format!(
        "\nstd::array<uint8_t, {}> {} = {{\n\n",
        bytes.len(),
        array_name
    ));
    out.push_str(&render_byte_lines(bytes));
    out.push_str("\n\n};\n\n");

    for ns in namespace_path.segments().iter().rev() {
        out.push_str(&format!("}} // end of namespace {ns}\n"));
    }
    out.push_str(&format!("}} // end of namespace {root_namespace}\n"));

    out
}
