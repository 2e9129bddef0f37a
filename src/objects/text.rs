//! Font-table objects, plain text objects, and the transformed-text /
//! transformed-sprite wrapper objects.

use crate::coords::{CoordinateConversion, Coords, DrawMatrixRaw, Pt};
use crate::encoding::decode_bytes_to_utf8;
use crate::error::Result;
use crate::objects::header::{FontDesc, TextHeader};
use crate::reader::DrawReader;
use crate::svg::{colour_name, escape};
use std::collections::HashMap;

/// Threshold below which the transformed-text width-recovery formula
/// switches to its degenerate fallback branch.
const DEGENERATE_COS_THRESHOLD: f64 = 0.001;

/// Slot 0 always resolves to "system" at 24x24pt even when the file carries
/// no font-table object at all.
pub fn default_font_table(font_replacements: &HashMap<String, String>) -> HashMap<u8, FontDesc> {
    let mut map = HashMap::new();
    map.insert(0u8, FontDesc::new("System", 24.0, 24.0, font_replacements));
    map
}

/// Reads one entry of a `FontTable` object: a 1-byte slot number then a
/// NUL-terminated name, repeated until a zero slot number terminates the
/// table or `end` (the object's declared byte boundary) is reached.
pub fn read_font_table_object(
    r: &mut DrawReader,
    end: usize,
    font_replacements: &HashMap<String, String>,
) -> Result<HashMap<u8, FontDesc>> {
    let mut table = default_font_table(font_replacements);
    while r.ptr < end {
        let slot = r.read_u8()?;
        if slot == 0 {
            r.align4();
            break;
        }
        let name_bytes = r.read_bytes_until_zero()?;
        let name = crate::encoding::latin1_to_utf8(&name_bytes);
        table.insert(slot, FontDesc::new(&name, 24.0, 24.0, font_replacements));
    }
    Ok(table)
}

fn text_style_bits(style: u32) -> (u8, bool, bool) {
    let slot = (style & 0xff) as u8;
    let underline = (style >> 8) & 1 != 0;
    let rtl = (style >> 9) & 1 != 0;
    (slot, underline, rtl)
}

/// Renders a plain (non-area) `Text` object: one `<text>` element per
/// embedded newline-separated line.
#[allow(clippy::too_many_arguments)]
pub fn read_text_object(
    r: &mut DrawReader,
    cc: &CoordinateConversion,
    fonts: &HashMap<u8, FontDesc>,
    text_count: &mut usize,
    use_bbox: bool,
    basic_underlines: bool,
    object_low: Coords,
) -> Result<String> {
    let header = TextHeader::read(r)?;
    // The object's bounding-box left edge is used instead of the raw
    // baseline x, to cope with producers (e.g. Vector's "Metro.c56") that
    // anchor the baseline halfway along the box.
    let bottom_left_x = cc.draw_to_svg_point(object_low).x;
    let baseline = cc.draw_to_svg_point(header.baseline);
    let pos = Pt::new(bottom_left_x, baseline.y);
    read_text_object_body(r, cc, fonts, &header, text_count, use_bbox, basic_underlines, Some(pos), None)
}

/// Shared body for [`read_text_object`] and [`read_trans_text_object`]:
/// decodes the text bytes and emits one `<text>` per line. `pos_override`
/// replaces the header's baseline point (used for the bounding-box
/// correction above, and reset to the origin for transformed text, which
/// positions itself entirely via its enclosing `<g transform>`).
/// `width_override` replaces the header's raw box width with a text width
/// recovered from [`get_proper_text_width`].
#[allow(clippy::too_many_arguments)]
fn read_text_object_body(
    r: &mut DrawReader,
    cc: &CoordinateConversion,
    fonts: &HashMap<u8, FontDesc>,
    header: &TextHeader,
    text_count: &mut usize,
    use_bbox: bool,
    basic_underlines: bool,
    pos_override: Option<Pt>,
    width_override: Option<f64>,
) -> Result<String> {
    let (slot, underline, rtl) = text_style_bits(header.style);
    let font = fonts.get(&slot).cloned().unwrap_or_else(|| {
        FontDesc::new("System", 24.0, 24.0, &HashMap::new())
    });

    let remaining = r.remaining();
    let bytes = r.read_bytes(remaining)?;
    let trimmed: &[u8] = {
        let end = bytes.iter().rposition(|&b| b != 0).map(|p| p + 1).unwrap_or(0);
        &bytes[..end]
    };
    let text = decode_bytes_to_utf8(trimmed, &font.originalname, &font.alphabet);

    let baseline = cc.draw_to_svg_point(header.baseline);
    let pos = pos_override.unwrap_or(baseline);
    let size = cc.draw_to_svg_size(Coords { x: header.xsize as i32, y: header.ysize as i32 });
    let width = width_override.unwrap_or(size.x.abs());
    let font_size_pt = CoordinateConversion::px_to_pt(size.y.abs());
    let font_size_pt = if font.originalname.eq_ignore_ascii_case("system") {
        font_size_pt * 4.0 / 3.0
    } else {
        font_size_pt
    };

    let mut out = String::new();
    let lines: Vec<&str> = text.split('\n').collect();
    let line_height = size.y.abs();

    for (i, line) in lines.iter().enumerate() {
        let x = pos.x;
        let y = pos.y + i as f64 * line_height;
        let mut attrs = format!(
            "id=\"draw_text{text_count}\" x=\"{:.4}\" y=\"{:.4}\" font-family=\"{}\" font-size=\"{:.4}\" font-weight=\"{}\" font-style=\"{}\" fill=\"{}\"",
            x,
            y,
            font.name,
            font_size_pt,
            font.weight,
            font.style,
            colour_name(header.colour),
        );
        if underline {
            if basic_underlines {
                attrs.push_str(" text-decoration=\"underline\"");
            } else {
                attrs.push_str(&format!(
                    " text-decoration=\"underline\" text-decoration-color=\"{}\"",
                    colour_name(header.colour)
                ));
            }
        }
        if rtl {
            attrs.push_str(" transform=\"scale(-1,1)\"");
        }
        if use_bbox && lines.len() == 1 {
            attrs.push_str(&format!(" textLength=\"{width:.4}\""));
        }
        out.push_str(&format!("<text {attrs}>{}</text>\n", escape(line)));
        *text_count += 1;
    }
    Ok(out)
}

/// Recovers pre-transform text width from a transformed-text object's
/// post-transform bounding box.
///
/// Draw doesn't store the true width of transformed text: it stores the
/// 2x2 part of the transform matrix `(a,b,c,d)` plus the post-transform
/// bounding box `(w,h)`. The width is recovered by picking `theta`/`phi`
/// from the quadrant of `(a,b)` and `(c,d)` respectively, then solving the
/// resulting system — falling back to the font height in the degenerate
/// case where the chosen angles make that system singular.
#[allow(clippy::too_many_arguments)]
pub fn get_proper_text_width(
    w: f64,
    h: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    rotation: f64,
    x_skew: f64,
    font_height: f64,
) -> f64 {
    let mut cossx = x_skew.cos();
    if cossx.abs() < DEGENERATE_COS_THRESHOLD {
        cossx = DEGENERATE_COS_THRESHOLD;
    }
    let transformed_font_height = font_height / cossx;

    let index1 = 2 * (b < 0.0) as u8 + (a < 0.0) as u8;
    let index2 = 2 * (d < 0.0) as u8 + (c < 0.0) as u8;

    let theta = match index1 {
        0 => rotation,
        1 => std::f64::consts::PI - rotation,
        2 => -rotation,
        _ => std::f64::consts::PI + rotation,
    };
    let phi = match index2 {
        0 => x_skew - rotation,
        1 => -(x_skew - rotation),
        2 => std::f64::consts::PI - (x_skew - rotation),
        _ => std::f64::consts::PI + (x_skew - rotation),
    };

    let costp = (phi + theta).cos();
    if costp.abs() < DEGENERATE_COS_THRESHOLD {
        let cost = theta.cos();
        if cost.abs() < DEGENERATE_COS_THRESHOLD {
            h - transformed_font_height
        } else {
            (w - transformed_font_height * phi.sin()) / cost
        }
    } else {
        (w * phi.cos() - h * phi.sin()) / costp
    }
}

/// Decomposes a transformed-text object's matrix and derives the width,
/// position, and SVG `transform=` components needed to render it, mirroring
/// the source's `get_text_transform_info`.
pub fn get_text_transform_info(
    mat: &crate::coords::Mat,
    cc: &CoordinateConversion,
    object_low: Coords,
    object_high: Coords,
    header: &TextHeader,
) -> (Pt, f64, Pt, Pt, f64) {
    let (translation, rotation, skew, mut scale) = mat.decompose();
    let _ = translation;

    let bottom_left = cc.draw_to_svg_point(object_low);
    let top_right = cc.draw_to_svg_point(object_high);

    let mut svg_fontsize_px = cc.draw_to_svg_size(Coords { x: header.xsize as i32, y: header.ysize as i32 });
    const EPSILON: f64 = 1e-9;
    if svg_fontsize_px.x.abs() < EPSILON {
        svg_fontsize_px.x = EPSILON;
    }

    let pos = cc.draw_to_svg_point(header.baseline);

    let box_width = top_right.x - bottom_left.x;
    let box_height = bottom_left.y - top_right.y;
    let font_aspect_ratio = svg_fontsize_px.y / svg_fontsize_px.x;

    let text_width = get_proper_text_width(
        box_width,
        box_height,
        mat.a,
        mat.b,
        mat.c,
        mat.d,
        -rotation,
        -skew.x,
        svg_fontsize_px.y,
    );

    scale.y *= font_aspect_ratio;
    (pos, rotation, skew, scale, text_width)
}

pub fn get_sprite_transform(m: &DrawMatrixRaw, cc: &CoordinateConversion) -> (Pt, f64, Pt, Pt) {
    cc.draw_to_svg_matrix(m).decompose()
}

/// Reads a `TransformedText` object: a `DrawMatrix`, a 32-bit font-flags
/// word (bit 1 marks right-to-left text), then an ordinary text object
/// body, rendered at the recovered `text_width` rather than the object's
/// raw bounding box width.
pub fn read_trans_text_object(
    r: &mut DrawReader,
    cc: &CoordinateConversion,
    fonts: &HashMap<u8, FontDesc>,
    text_count: &mut usize,
    use_bbox: bool,
    basic_underlines: bool,
    object_low: Coords,
    object_high: Coords,
) -> Result<String> {
    let raw = DrawMatrixRaw::read(r)?;
    let mat = cc.draw_to_svg_matrix(&raw);
    let font_flags = r.read_u32()?;

    let header = TextHeader::read(r)?;
    let (pos, rotation, skew, scale, text_width) =
        get_text_transform_info(&mat, cc, object_low, object_high, &header);
    let rtl = font_flags & 2 != 0;

    let inner = read_text_object_body(r, cc, fonts, &header, text_count, use_bbox, basic_underlines, Some(Pt::new(0.0, 0.0)), Some(text_width))?;

    let mut attrs = format!(
        "transform=\"translate({:.4} {:.4}) rotate({:.4}) skewX({:.4}) skewY({:.4}) scale({:.4} {:.4})\"",
        pos.x,
        pos.y,
        rotation.to_degrees(),
        skew.x.to_degrees(),
        skew.y.to_degrees(),
        scale.x,
        scale.y,
    );
    if rtl {
        attrs.push_str(" direction=\"rtl\"");
    }
    Ok(format!("<g {attrs}>\n{inner}</g>\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_recovers_exact_width() {
        let w = get_proper_text_width(100.0, 20.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 20.0);
        assert!((w - 100.0).abs() < 1e-6);
    }

    #[test]
    fn rotated_quarter_turn_swaps_box_axes() {
        // a=0,b=1,c=-1,d=0 is a 90-degree rotation: index1=0 (b=1 not<0,a=0 not<0),
        // index2=3 (d=0 not<0 so bit0=0... c=-1<0 -> bit stays); exercise the
        // degenerate branch rather than assert an exact numeric width.
        let w = get_proper_text_width(20.0, 100.0, 0.0, 1.0, -1.0, 0.0, std::f64::consts::FRAC_PI_2, 0.0, 20.0);
        assert!(w.is_finite());
    }

    #[test]
    fn default_font_table_has_system_slot() {
        let table = default_font_table(&HashMap::new());
        assert!(table.contains_key(&0));
        assert_eq!(table[&0].weight, "bold");
    }
}
