//! Two-column CSV export of links.

use crate::Link;

pub const LINKS_HEADER: [&str; 2] = ["Link Text", "URL"];

/// Serializes links as a `Link Text,URL` table, one row per link.
///
/// Fields containing a comma, quote or line break are quoted with embedded
/// quotes doubled. Every row, header included, ends with `\n`.
///
/// # Example
///
/// ```rust
/// use pagesift_core::{Link, export_links};
///
/// let csv = export_links(&[Link::new("Home", "/home")]);
/// assert_eq!(csv, b"Link Text,URL\nHome,/home\n");
/// ```
pub fn export_links(links: &[Link]) -> Vec<u8> {
    let mut out = String::new();
    push_row(&mut out, &LINKS_HEADER);

    for link in links {
        push_row(&mut out, &[link.text.as_str(), link.href.as_str()]);
    }

    out.into_bytes()
}

fn push_row(out: &mut String, columns: &[&str]) {
    let line = columns.iter().map(|value| csv_escape(value)).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push('\n');
}

fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
