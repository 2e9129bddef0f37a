//! Two-pass conversion driver.
//!
//! Pass 1 walks the object stream just far enough to find an `Options`
//! object (for the page size it declares); pass 2 walks it again with a
//! [`crate::coords::CoordinateConversion`] in hand and does the real
//! rendering. Keeping the passes separate avoids needing to know the page
//! size before any other object can be placed in SVG space.

use std::collections::HashMap;

use regex::Regex;

use crate::config::Config;
use crate::coords::{CoordinateConversion, Coords, DrawMatrixRaw, Pt};
use crate::error::Result;
use crate::objects::header::{
    DrawFileHeader, FontDesc, ObjectHeader, ObjectType, OBJECT_HEADER_SIZE,
};
use crate::objects::misc::{self, JpegHeader, Options, TaggedHeader};
use crate::objects::path::read_path_object;
use crate::objects::sprite::{self, SpriteCtrlBlock};
use crate::objects::text::{
    default_font_table, read_font_table_object, read_text_object, read_trans_text_object,
};
use crate::objects::textarea::read_text_area_object;
use crate::reader::DrawReader;
use crate::svg::{escape, placeholder_rect};

/// mm-to-pixel ratio used only by the default-paper-size fallback search.
/// Deliberately distinct from [`CoordinateConversion::pt_to_px`]'s 96/72
/// ratio: this one is the page-fitting heuristic's own 96/25.4 approximation.
const FALLBACK_MM_TO_PX: f64 = 3.7795;

const MM_TO_DRAW_UNITS: f64 = 46080.0 / 25.4;

/// Converts a whole Draw file to a standalone SVG document.
pub fn convert_to_svg(data: &[u8], config: &Config) -> Result<String> {
    let mut r = DrawReader::new(data);
    let file_header = DrawFileHeader::read(&mut r)?;
    let objects_start = r.ptr;

    let mut scan_reader = DrawReader::new(data);
    scan_reader.seek(objects_start);
    let found_options = scan_for_options(&mut scan_reader, config.one_byte_types, data.len())?;

    let options = found_options.unwrap_or_else(|| default_paper_size(&file_header));
    let (paper_w_mm, paper_h_mm) =
        options.paper_size_mm().unwrap_or(misc::PAPER_SIZES_MM[misc::DEFAULT_PAPER_SIZE]);

    let size_in_pixels = (paper_w_mm * FALLBACK_MM_TO_PX, paper_h_mm * FALLBACK_MM_TO_PX);
    let size_in_draw_units = (paper_w_mm * MM_TO_DRAW_UNITS, paper_h_mm * MM_TO_DRAW_UNITS);
    let cc = CoordinateConversion::new(
        size_in_draw_units.0,
        size_in_draw_units.1,
        size_in_pixels.0,
        size_in_pixels.1,
    );

    let mut r2 = DrawReader::new(data);
    r2.seek(objects_start);
    let mut fonts = default_font_table(&config.font_replacements);
    let ctx = Ctx { config, cc: &cc };
    let mut body = String::new();
    let mut path_count = 0usize;
    let mut cap_count = 0usize;
    let mut text_count = 0usize;
    read_objects(
        &mut r2,
        data.len(),
        &ctx,
        &mut fonts,
        &mut path_count,
        &mut cap_count,
        &mut text_count,
        &mut body,
    )?;

    let bottom_left = cc.draw_to_svg_point(file_header.low_box);
    let top_right = cc.draw_to_svg_point(file_header.high_box);
    let (vb_x, vb_y, vb_w, vb_h) =
        compute_viewbox(config.fit_border.as_deref(), bottom_left, top_right, size_in_pixels);

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    doc.push_str(&format!(
        "<!-- converted from a {} Draw file, format {}.{} -->\n",
        escape(file_header.creator.trim()),
        file_header.major,
        file_header.minor,
    ));
    doc.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{:.4}\" height=\"{:.4}\" viewBox=\"{:.4} {:.4} {:.4} {:.4}\">\n",
        size_in_pixels.0, size_in_pixels.1, vb_x, vb_y, vb_w, vb_h,
    ));
    doc.push_str(&body);
    if config.show_bounding_boxes {
        doc.push_str(&bbox_rect(&cc, file_header.low_box, file_header.high_box, "green"));
    }
    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Computes the page size to fall back on when the file has no `Options`
/// object: the file's own declared bounding box, converted pt->px, matched
/// against the smallest `A4_AND_UP` paper size it fits inside.
fn default_paper_size(file_header: &DrawFileHeader) -> Options {
    let pt_dims = (file_header.high_box.x as f64 / 640.0, file_header.high_box.y as f64 / 640.0);
    let px_dims = (CoordinateConversion::pt_to_px(pt_dims.0), CoordinateConversion::pt_to_px(pt_dims.1));
    let mm_dims = (px_dims.0 / FALLBACK_MM_TO_PX, px_dims.1 / FALLBACK_MM_TO_PX);
    match misc::smallest_fitting_paper(mm_dims.0, mm_dims.1) {
        Some((idx, landscape)) => {
            Options { paper_size: (idx as u32) << 8, paper_limits: if landscape { 0x10 } else { 0 } }
        }
        None => Options { paper_size: (misc::DEFAULT_PAPER_SIZE as u32) << 8, paper_limits: 0 },
    }
}

/// Parses `--fit-border`'s `"<amount><unit>"` syntax and returns the SVG
/// `viewBox` it implies; with no border configured, the viewBox is simply
/// `0 0 width height` over the full page.
fn compute_viewbox(
    fit_border: Option<&str>,
    bottom_left: Pt,
    top_right: Pt,
    size_in_pixels: (f64, f64),
) -> (f64, f64, f64, f64) {
    let Some(spec) = fit_border else {
        return (0.0, 0.0, size_in_pixels.0, size_in_pixels.1);
    };
    let re = Regex::new(r"^([+\-.\d]+)(.*)$").expect("static regex");
    let (amount, unit) = match re.captures(spec.trim()) {
        Some(caps) => {
            let amount = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()).unwrap_or(0.0);
            let unit = caps.get(2).map(|m| m.as_str().trim().to_string()).unwrap_or_default();
            (amount, unit)
        }
        None => (0.0, String::new()),
    };

    let box_w = top_right.x - bottom_left.x;
    let box_h = bottom_left.y - top_right.y;
    let (border_x, border_y) =
        if unit == "%" { (box_w * amount / 100.0, box_h * amount / 100.0) } else { (amount, amount) };

    let x0 = bottom_left.x - border_x;
    let y0 = top_right.y - border_y;
    let x1 = top_right.x + border_x;
    let y1 = bottom_left.y + border_y;
    (x0, y0, x1 - x0, y1 - y0)
}

fn bbox_rect(cc: &CoordinateConversion, low: Coords, high: Coords, stroke: &str) -> String {
    let bl = cc.draw_to_svg_point(low);
    let tr = cc.draw_to_svg_point(high);
    format!(
        "<rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"0.5\" />\n",
        bl.x.min(tr.x),
        tr.y.min(bl.y),
        (tr.x - bl.x).abs(),
        (bl.y - tr.y).abs(),
    )
}

/// Walks the object stream looking only for a top-level `Options` object.
/// Every other object - including `Group` and `Tagged` wrappers - is skipped
/// via its declared length without being decoded at all; pass 1 never
/// recurses into nested objects, matching the original's own Pass-1 branch
/// (which only special-cases `OBJECT_OPTIONS` and otherwise falls through
/// to the length-based seek).
fn scan_for_options(r: &mut DrawReader, one_byte_types: bool, end: usize) -> Result<Option<Options>> {
    let mut found = None;
    while r.ptr < end && end - r.ptr >= OBJECT_HEADER_SIZE as usize {
        let start = r.ptr;
        let header = ObjectHeader::read(r, one_byte_types)?;
        if header.obj_length < OBJECT_HEADER_SIZE {
            break;
        }
        let next = start + header.obj_length as usize;
        if header.obj_type == ObjectType::Options {
            found = Some(Options::read(r)?);
        }
        r.seek(next.min(end));
    }
    Ok(found)
}

struct Ctx<'a> {
    config: &'a Config,
    cc: &'a CoordinateConversion,
}

/// Renders every object in `[r.ptr, end)` and appends its markup to `out`.
/// A recoverable failure on one object (an unsupported sprite mode, say)
/// is logged and replaced with a dashed placeholder box rather than
/// aborting the rest of the file.
#[allow(clippy::too_many_arguments)]
fn read_objects(
    r: &mut DrawReader,
    end: usize,
    ctx: &Ctx,
    fonts: &mut HashMap<u8, FontDesc>,
    path_count: &mut usize,
    cap_count: &mut usize,
    text_count: &mut usize,
    out: &mut String,
) -> Result<()> {
    let mut index = 0usize;
    while r.ptr < end && end - r.ptr >= OBJECT_HEADER_SIZE as usize {
        let (header, next, result) =
            read_one_object(r, end, ctx, fonts, path_count, cap_count, text_count)?;

        if ctx.config.show_debug_index {
            out.push_str(&format!("<!-- object {index}: {:?} -->\n", header.obj_type));
        }
        match result {
            Ok(markup) => {
                if let Some(m) = markup {
                    out.push_str(&m);
                }
            }
            Err(e) => {
                log::warn!("skipping {:?} object at offset {}: {e}", header.obj_type, r.ptr);
                let bl = ctx.cc.draw_to_svg_point(header.low);
                let tr = ctx.cc.draw_to_svg_point(header.high);
                out.push_str(&placeholder_rect(bl.x, bl.y, tr.x, tr.y, &format!("{:?} (decode failed)", header.obj_type)));
            }
        }
        if ctx.config.show_bounding_boxes {
            out.push_str(&bbox_rect(ctx.cc, header.low, header.high, "red"));
        }
        r.seek(next.min(end));
        index += 1;
    }
    Ok(())
}

/// Reads one object's header and dispatches its body. Returns the header
/// (for placeholder/bounding-box rendering on error), the absolute offset
/// of the next object, and the render result.
#[allow(clippy::too_many_arguments)]
fn read_one_object(
    r: &mut DrawReader,
    end: usize,
    ctx: &Ctx,
    fonts: &mut HashMap<u8, FontDesc>,
    path_count: &mut usize,
    cap_count: &mut usize,
    text_count: &mut usize,
) -> Result<(ObjectHeader, usize, Result<Option<String>>)> {
    let start = r.ptr;
    let header = ObjectHeader::read(r, ctx.config.one_byte_types)?;
    if header.obj_length < OBJECT_HEADER_SIZE {
        return Ok((header, end, Ok(None)));
    }
    let next = start + header.obj_length as usize;
    let markup = dispatch_one(r, &header, start, next, ctx, fonts, path_count, cap_count, text_count);
    Ok((header, next, markup))
}

#[allow(clippy::too_many_arguments)]
fn dispatch_one(
    r: &mut DrawReader,
    header: &ObjectHeader,
    start: usize,
    next: usize,
    ctx: &Ctx,
    fonts: &mut HashMap<u8, FontDesc>,
    path_count: &mut usize,
    cap_count: &mut usize,
    text_count: &mut usize,
) -> Result<Option<String>> {
    match header.obj_type {
        ObjectType::FontTable => {
            // The nominal bbox fields in a FontTable's header are unused;
            // the real entries start right after type+length.
            r.seek(start + 8);
            *fonts = read_font_table_object(r, next, &ctx.config.font_replacements)?;
            Ok(None)
        }
        ObjectType::Options | ObjectType::TextColumn => Ok(None),
        ObjectType::Text => Ok(Some(read_text_object(
            r,
            ctx.cc,
            fonts,
            text_count,
            ctx.config.use_bbox,
            ctx.config.basic_underlines,
            header.low,
        )?)),
        ObjectType::TransformedText => Ok(Some(read_trans_text_object(
            r,
            ctx.cc,
            fonts,
            text_count,
            ctx.config.use_bbox,
            ctx.config.basic_underlines,
            header.low,
            header.high,
        )?)),
        ObjectType::Path => Ok(Some(read_path_object(r, ctx.cc, header, path_count, cap_count)?)),
        ObjectType::Group => {
            let name = misc::read_group_name(r)?;
            let mut inner = String::new();
            read_objects(r, next, ctx, fonts, path_count, cap_count, text_count, &mut inner)?;
            let attr = if name.is_empty() { String::new() } else { format!(" data-name=\"{}\"", escape(&name)) };
            Ok(Some(format!("<g{attr}>\n{inner}</g>\n")))
        }
        ObjectType::Tagged => {
            let _tag = TaggedHeader::read(r)?;
            let (inner_header, inner_next, inner_result) =
                read_one_object(r, next, ctx, fonts, path_count, cap_count, text_count)?;
            let markup = match inner_result {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("skipping tagged child {:?}: {e}", inner_header.obj_type);
                    Some(bbox_rect(ctx.cc, inner_header.low, inner_header.high, "grey"))
                }
            };
            r.seek(inner_next.min(next));
            Ok(markup)
        }
        ObjectType::TextArea => Ok(Some(read_text_area_object(
            r,
            ctx.cc,
            ctx.config.one_byte_types,
            &ctx.config.font_replacements,
            ctx.config.utf8,
            ctx.config.use_tspans,
            ctx.config.basic_underlines,
        )?)),
        ObjectType::Sprite => Ok(Some(read_sprite_object(r, header, next, ctx, false)?)),
        ObjectType::TransformedSprite => Ok(Some(read_sprite_object(r, header, next, ctx, true)?)),
        ObjectType::Jpeg => Ok(Some(read_jpeg_object(r, ctx)?)),
        ObjectType::Unknown(code) => {
            let bl = ctx.cc.draw_to_svg_point(header.low);
            let tr = ctx.cc.draw_to_svg_point(header.high);
            Ok(Some(placeholder_rect(bl.x, bl.y, tr.x, tr.y, &format!("unknown object type {code}"))))
        }
    }
}

/// Reads a `Sprite` or `TransformedSprite` object's control block, optional
/// palette, pixel data and (for `TransformedSprite`) leading matrix, and
/// emits an `<image>` element embedding the decoded bitmap as a PNG data URL.
fn read_sprite_object(
    r: &mut DrawReader,
    header: &ObjectHeader,
    end: usize,
    ctx: &Ctx,
    transformed: bool,
) -> Result<String> {
    let raw_matrix = if transformed { Some(DrawMatrixRaw::read(r)?) } else { None };
    let sprite_block = SpriteCtrlBlock::read(r)?;
    let bpp = sprite::mode_bpp(sprite_block.mode)?;
    let palette = sprite::read_sprite_palette(r, &sprite_block, bpp)?;

    let body_start = r.ptr;
    let body = r.read_bytes(end.saturating_sub(body_start))?;

    let boundary = sprite_block.image_offset.min(sprite_block.mask_offset) as usize;
    let rel = |off: u32| (off as usize).saturating_sub(boundary).min(body.len());
    let image_bytes = &body[rel(sprite_block.image_offset)..];
    let mask_bytes = if sprite_block.has_mask() { Some(&body[rel(sprite_block.mask_offset)..]) } else { None };

    let (w, h, rgba) =
        sprite::decode_sprite_pixels(image_bytes, mask_bytes, &sprite_block, palette.as_deref())?;
    let data_url = sprite::rgba_to_png_data_url(w, h, &rgba)?;

    let transform = if let Some(raw) = raw_matrix {
        let mat = ctx.cc.draw_to_svg_matrix(&raw);
        let (dpi_x, dpi_y) = sprite::sprite_dpi(sprite_block.mode).unwrap_or((90, 90));
        let (sx, sy) = (96.0 / dpi_x.max(1) as f64, 96.0 / dpi_y.max(1) as f64);
        format!(
            "matrix({:.6} {:.6} {:.6} {:.6} {:.4} {:.4}) scale({:.6} {:.6}) translate(0 {:.4})",
            mat.a, mat.b, mat.c, mat.d, mat.e, mat.f, sx, sy, -(h as f64),
        )
    } else {
        let bottom_left = ctx.cc.draw_to_svg_point(header.low);
        let top_right = ctx.cc.draw_to_svg_point(header.high);
        let box_w = (top_right.x - bottom_left.x).abs();
        let box_h = (bottom_left.y - top_right.y).abs();
        format!(
            "translate({:.4} {:.4}) scale({:.6} {:.6})",
            bottom_left.x,
            top_right.y,
            box_w / (w.max(1) as f64),
            box_h / (h.max(1) as f64),
        )
    };

    Ok(format!(
        "<image transform=\"{transform}\" width=\"{w}\" height=\"{h}\" xlink:href=\"{data_url}\" image-rendering=\"pixelated\" />\n"
    ))
}

/// Reads a `Jpeg` object: its fixed header (size, DPI, transform) followed
/// by raw JFIF data of the declared length, passed through untouched and
/// embedded as a base64 `data:` URL.
fn read_jpeg_object(r: &mut DrawReader, ctx: &Ctx) -> Result<String> {
    use base64::Engine;

    let jpeg = JpegHeader::read(r)?;
    let data = r.read_bytes(jpeg.length as usize)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    let data_url = format!("data:image/jpeg;base64,{encoded}");

    let mat = ctx.cc.draw_to_svg_matrix(&jpeg.transform);
    let size = ctx.cc.draw_to_svg_size(Coords { x: jpeg.width as i32, y: jpeg.height as i32 });
    let transform = format!(
        "matrix({:.6} {:.6} {:.6} {:.6} {:.4} {:.4}) translate(0 {:.4})",
        mat.a,
        mat.b,
        mat.c,
        mat.d,
        mat.e,
        mat.f,
        -size.y.abs(),
    );

    Ok(format!(
        "<image transform=\"{transform}\" width=\"{:.4}\" height=\"{:.4}\" xlink:href=\"{data_url}\" />\n",
        size.x.abs(),
        size.y.abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> DrawFileHeader {
        DrawFileHeader {
            magic: crate::objects::header::DRAW_MAGIC,
            major: 201,
            minor: 0,
            creator: "test".to_string(),
            low_box: Coords { x: 0, y: 0 },
            high_box: Coords { x: 640 * 210, y: 640 * 297 },
        }
    }

    #[test]
    fn default_paper_size_picks_a4_for_a4_sized_drawing() {
        let opts = default_paper_size(&sample_header());
        assert_eq!(opts.paper_size >> 8, 5);
    }

    #[test]
    fn viewbox_with_no_border_spans_full_page() {
        let (x, y, w, h) = compute_viewbox(None, Pt::new(0.0, 100.0), Pt::new(200.0, 0.0), (300.0, 400.0));
        assert_eq!((x, y, w, h), (0.0, 0.0, 300.0, 400.0));
    }

    #[test]
    fn viewbox_percent_border_scales_with_box_size() {
        let (x, y, w, h) = compute_viewbox(Some("10%"), Pt::new(0.0, 100.0), Pt::new(200.0, 0.0), (300.0, 400.0));
        assert_eq!(x, -20.0);
        assert_eq!(y, -10.0);
        assert_eq!(w, 240.0);
        assert_eq!(h, 120.0);
    }

    #[test]
    fn viewbox_pixel_border_is_constant() {
        let (x, _y, w, _h) = compute_viewbox(Some("5px"), Pt::new(0.0, 100.0), Pt::new(200.0, 0.0), (300.0, 400.0));
        assert_eq!(x, -5.0);
        assert_eq!(w, 210.0);
    }

    #[test]
    fn scan_for_options_finds_top_level_object() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&11u32.to_le_bytes()); // Options type
        bytes.extend_from_slice(&32u32.to_le_bytes()); // length
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
        bytes.extend_from_slice(&((5u32) << 8).to_le_bytes()); // paper_size = A4
        bytes.extend_from_slice(&0u32.to_le_bytes()); // paper_limits
        let mut r = DrawReader::new(&bytes);
        let found = scan_for_options(&mut r, false, bytes.len()).unwrap();
        assert_eq!(found.unwrap().paper_size >> 8, 5);
    }
}
