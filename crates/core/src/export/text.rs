/// Joins lines with `\n` into one UTF-8 buffer, without a trailing newline.
pub fn export_lines(lines: &[String]) -> Vec<u8> {
    lines.join("\n").into_bytes()
}
