//! SVG text emission helpers: colour naming, XML escaping, and the
//! placeholder rectangle used for object types we don't understand.

use crate::objects::header::ColourType;
use crate::tables::colour_names::NAMED_COLOURS;

/// Resolves a colour to a CSS name if one is registered for its exact RGB
/// value, falling back to `#rrggbb`. Where more than one CSS name shares a
/// value (e.g. Cyan/Aqua), the *last* entry in the table wins, matching a
/// plain `dict` built by iterating the name list in order.
pub fn colour_name(c: ColourType) -> String {
    let rgb = c.rgb_u32();
    match NAMED_COLOURS.iter().rev().find(|(v, _)| *v == rgb) {
        Some((_, name)) => name.to_string(),
        None => format!("#{rgb:06x}"),
    }
}

/// Escapes the five XML predefined entities for use in text nodes and
/// attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Placeholder markup for an object type we don't render (unknown type
/// codes, or a sub-object whose decode failed), drawn as a dashed grey box
/// spanning its declared bounding box.
pub fn placeholder_rect(x0: f64, y0: f64, x1: f64, y1: f64, label: &str) -> String {
    format!(
        "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"none\" stroke=\"grey\" stroke-dasharray=\"4 2\" /><!-- {} -->\n",
        x0.min(x1),
        y0.min(y1),
        (x1 - x0).abs(),
        (y1 - y0).abs(),
        escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_resolves_to_name() {
        let c = ColourType { reserved: 0, red: 0, green: 0, blue: 0 };
        assert_eq!(colour_name(c), "Black");
    }

    #[test]
    fn unregistered_colour_falls_back_to_hex() {
        let c = ColourType { reserved: 0, red: 0x12, green: 0x34, blue: 0x56 };
        assert_eq!(colour_name(c), "#123456");
    }

    #[test]
    fn escape_handles_all_entities() {
        assert_eq!(escape("<a & \"b\" 'c'>"), "&lt;a &amp; &quot;b&quot; &apos;c&apos;&gt;");
    }
}
