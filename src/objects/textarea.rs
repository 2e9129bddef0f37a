//! `TextArea` objects: a list of column bounding boxes, a byte stream of
//! plain text interleaved with backslash escape sequences, and the line/
//! column flow algorithm that lays the decoded runs out into `<text>` (or
//! `<tspan>`) elements.
//!
//! The escape grammar and the line-breaking heuristics below are ported
//! directly from the source tool rather than redesigned: they encode
//! RISC OS's own text-area formatting rules, which have no simpler
//! equivalent. Runs are Rust value types (`#[derive(Clone)]`) rather than
//! the source's deep-copied objects, since nothing here needs shared
//! mutable state once a run is closed.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::coords::{CoordinateConversion, Pt};
use crate::encoding::decode_bytes_to_utf8;
use crate::objects::header::{ColourType, FontDesc, ObjectHeader};
use crate::reader::DrawReader;
use crate::svg::escape;

/// Per-run formatting state: font table, margins, alignment, spacing and
/// the pending line/paragraph break counts that drive the flow algorithm.
#[derive(Debug, Clone)]
struct TextAreaState {
    fonts: HashMap<u8, FontDesc>,
    font_index: u8,
    line_spacing_px: f64,
    paragraph_spacing_px: f64,
    alignment: char,
    num_columns: usize,
    left_margin_px: f64,
    right_margin_px: f64,
    text_colour: ColourType,
    underline_pos: i32,
    underline_thickness: i32,
    vertical_move_px: f64,
    prefix_para_breaks: u32,
    prefix_line_breaks: u32,
}

impl TextAreaState {
    fn new(font_replacements: &HashMap<String, String>) -> Self {
        let mut fonts = HashMap::new();
        fonts.insert(0u8, FontDesc::new("system", 24.0, 24.0, font_replacements));
        TextAreaState {
            fonts,
            font_index: 0,
            line_spacing_px: CoordinateConversion::pt_to_px(10.0),
            paragraph_spacing_px: CoordinateConversion::pt_to_px(10.0),
            alignment: 'L',
            num_columns: 1,
            left_margin_px: CoordinateConversion::pt_to_px(1.0),
            right_margin_px: CoordinateConversion::pt_to_px(1.0),
            text_colour: ColourType::default(),
            underline_pos: 0,
            underline_thickness: 0,
            vertical_move_px: 0.0,
            prefix_para_breaks: 0,
            prefix_line_breaks: 0,
        }
    }
}

/// A closed run of plain text sharing one `TextAreaState` snapshot. Bytes
/// are kept undecoded until parsing finishes, since the font active when a
/// run closes decides which encoding table applies.
struct RawRun {
    state: TextAreaState,
    bytes: Vec<u8>,
}

#[derive(Clone, Copy, PartialEq)]
enum Cmd {
    Version,
    Background,
    Colour,
    Columns,
    FontSize,
    FontSizeWidth,
    LineLeading,
    Margins,
    ParagraphLeading,
    Underline,
    Alignment,
    UnderlineEnd,
    VerticalMove,
    SoftHyphen,
    LineBreak,
    Slash,
    SetFont,
    Comment,
}

/// Ordered escape-command table. Order matters: `\F`'s "font size" pattern
/// is a strict prefix of "font size width", so the narrower one must be
/// tried first or it would never match.
static PATTERNS: LazyLock<Vec<(Regex, Cmd)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"^\\! *[0-9]+[/ \n]").unwrap(), Cmd::Version),
        (Regex::new(r"^\\B *([0-9]+)[ \t]+([0-9]+)[ \t]+([0-9]+)[ \t]*[/\n]").unwrap(), Cmd::Background),
        (Regex::new(r"^\\C *([0-9]+)[ \t]+([0-9]+)[ \t]+([0-9]+)[ \t]*[/\n]").unwrap(), Cmd::Colour),
        (Regex::new(r"^\\D *([0-9]+)[/ \n]").unwrap(), Cmd::Columns),
        (Regex::new(r"^\\F[ \t]*([0-9]+)[ \t]*([^ \t]*)[ \t]*([0-9]+)[ \t]*[/\n]").unwrap(), Cmd::FontSize),
        (Regex::new(r"^\\F[ \t]*([0-9]+)[ \t]*([^ \t]*)[ \t]*([0-9]+)[ \t]*([0-9]+)[ \t]*[/\n]").unwrap(), Cmd::FontSizeWidth),
        (Regex::new(r"^\\L *(-?[0-9]+)[/\n]").unwrap(), Cmd::LineLeading),
        (Regex::new(r"^\\M *([0-9]+) +([0-9]+)[/\n]").unwrap(), Cmd::Margins),
        (Regex::new(r"^\\P *(-?[0-9]+)[/\n]").unwrap(), Cmd::ParagraphLeading),
        (Regex::new(r"^\\U *(-?[0-9]+) +(-?[0-9]+) *[/\n]").unwrap(), Cmd::Underline),
        (Regex::new(r"^\\A(.)/?").unwrap(), Cmd::Alignment),
        (Regex::new(r"^\\U\./?").unwrap(), Cmd::UnderlineEnd),
        (Regex::new(r"^\\V(-?[0-9]+)/?").unwrap(), Cmd::VerticalMove),
        (Regex::new(r"^\\-/?").unwrap(), Cmd::SoftHyphen),
        (Regex::new(r"^\\\n/?").unwrap(), Cmd::LineBreak),
        (Regex::new(r"^\\\\/?").unwrap(), Cmd::Slash),
        (Regex::new(r"^\\([0-9]+)/?").unwrap(), Cmd::SetFont),
        (Regex::new(r"^\\;(.*)?\n").unwrap(), Cmd::Comment),
    ]
});

fn group_as_str(caps: &regex::bytes::Captures, i: usize) -> String {
    caps.get(i).map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned()).unwrap_or_default()
}

/// Font names embedded in `\F` escapes are Latin-1, like the font-table's
/// own names, not UTF-8.
fn group_as_latin1_str(caps: &regex::bytes::Captures, i: usize) -> String {
    caps.get(i).map(|m| crate::encoding::latin1_to_utf8(m.as_bytes())).unwrap_or_default()
}

fn group_as_i64(caps: &regex::bytes::Captures, i: usize) -> i64 {
    group_as_str(caps, i).parse().unwrap_or(0)
}

/// Control characters are stripped except TAB (mapped to a space) and LF,
/// matching the source's first sanitization pass over the raw text bytes.
fn sanitize(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for &c in bytes {
        if c == 9 {
            out.push(32);
        } else if c < 32 && c != 10 {
            continue;
        } else {
            out.push(c);
        }
    }
    out
}

fn store_run(runs: &mut Vec<RawRun>, state: &mut TextAreaState, bytes: &mut Vec<u8>) {
    if !bytes.is_empty() {
        runs.push(RawRun { state: state.clone(), bytes: std::mem::take(bytes) });
        state.prefix_para_breaks = 0;
        state.prefix_line_breaks = 0;
    }
}

/// Previous byte marker used by the newline-resolution state machine. A
/// plain byte value covers space/tab/newline/anything-else; `Alignment`
/// marks "the last thing we saw was an `\A` alignment command".
#[derive(Clone, Copy, PartialEq)]
enum PrevByte {
    None,
    Alignment,
    Byte(u8),
}

fn parse_escaped_text(
    text_bytes: &[u8],
    num_text_columns: usize,
    font_replacements: &HashMap<String, String>,
) -> Vec<RawRun> {
    let bytes = sanitize(text_bytes);
    let mut state = TextAreaState::new(font_replacements);
    state.num_columns = num_text_columns.max(1);

    let mut runs: Vec<RawRun> = Vec::new();
    let mut plain_bytes: Vec<u8> = Vec::new();
    let mut no_text_output_yet = true;
    let mut beginning_of_paragraph = true;
    let mut previous_byte = PrevByte::None;

    let mut cursor = 0usize;
    while cursor < bytes.len() {
        let remaining = &bytes[cursor..];
        let mut offset = 1usize;

        for (re, cmd) in PATTERNS.iter() {
            if let Some(caps) = re.captures(remaining) {
                let m = caps.get(0).unwrap();
                if m.start() != 0 {
                    continue;
                }
                offset = m.end();

                match cmd {
                    Cmd::Slash => {
                        plain_bytes.push(b'\\');
                        previous_byte = PrevByte::Byte(b'\\');
                        no_text_output_yet = false;
                        beginning_of_paragraph = false;
                    }
                    Cmd::Comment => {}
                    Cmd::SoftHyphen => {
                        plain_bytes.push(0xad);
                        previous_byte = PrevByte::Byte(0xad);
                    }
                    _ => {
                        store_run(&mut runs, &mut state, &mut plain_bytes);
                        match cmd {
                            Cmd::Version => {}
                            Cmd::LineBreak => {
                                state.prefix_line_breaks += 1;
                                beginning_of_paragraph = true;
                                previous_byte = PrevByte::Byte(10);
                            }
                            Cmd::Alignment => {
                                if let Some(c) = caps.get(1).and_then(|m| m.as_bytes().first().copied()) {
                                    state.alignment = c as char;
                                }
                                if !beginning_of_paragraph {
                                    state.prefix_line_breaks += 1;
                                    beginning_of_paragraph = true;
                                }
                                previous_byte = PrevByte::Alignment;
                            }
                            Cmd::Background => {}
                            Cmd::Colour => {
                                state.text_colour = ColourType {
                                    reserved: 0,
                                    red: group_as_i64(&caps, 1) as u8,
                                    green: group_as_i64(&caps, 2) as u8,
                                    blue: group_as_i64(&caps, 3) as u8,
                                };
                            }
                            Cmd::Columns => {
                                state.num_columns = group_as_i64(&caps, 1).max(1) as usize;
                            }
                            Cmd::FontSize => {
                                let idx = group_as_i64(&caps, 1) as u8;
                                let name = group_as_latin1_str(&caps, 2);
                                let size = group_as_i64(&caps, 3) as f64;
                                state.fonts.insert(idx, FontDesc::new(&name, size, size, font_replacements));
                            }
                            Cmd::FontSizeWidth => {
                                let idx = group_as_i64(&caps, 1) as u8;
                                let name = group_as_latin1_str(&caps, 2);
                                let height = group_as_i64(&caps, 3) as f64;
                                let width = group_as_i64(&caps, 4) as f64;
                                state.fonts.insert(idx, FontDesc::new(&name, height, width, font_replacements));
                            }
                            Cmd::SetFont => {
                                state.font_index = group_as_i64(&caps, 1) as u8;
                            }
                            Cmd::LineLeading => {
                                state.line_spacing_px = CoordinateConversion::pt_to_px(group_as_i64(&caps, 1) as f64);
                            }
                            Cmd::Margins => {
                                state.left_margin_px = CoordinateConversion::pt_to_px(group_as_i64(&caps, 1) as f64);
                                state.right_margin_px = CoordinateConversion::pt_to_px(group_as_i64(&caps, 2) as f64);
                            }
                            Cmd::ParagraphLeading => {
                                state.paragraph_spacing_px = CoordinateConversion::pt_to_px(group_as_i64(&caps, 1) as f64);
                            }
                            Cmd::Underline => {
                                state.underline_pos = group_as_i64(&caps, 1) as i32;
                                state.underline_thickness = group_as_i64(&caps, 2) as i32;
                            }
                            Cmd::UnderlineEnd => {
                                state.underline_pos = 0;
                                state.underline_thickness = 0;
                            }
                            Cmd::VerticalMove => {
                                state.vertical_move_px += CoordinateConversion::pt_to_px(group_as_i64(&caps, 1) as f64);
                            }
                            _ => unreachable!(),
                        }
                    }
                }
                break;
            }
        }

        if offset == 1 {
            let b0 = bytes[cursor];
            let mut should_output_char = true;
            let mut keep_previous_byte: Option<PrevByte> = None;
            // Some(32) when the newline is rewritten to an emitted space;
            // None leaves the effective byte as the literal LF (10).
            let mut virtual_byte: Option<u8> = None;

            if b0 == 10 {
                should_output_char = false;
                if no_text_output_yet {
                    store_run(&mut runs, &mut state, &mut plain_bytes);
                    state.prefix_para_breaks += 1;
                    beginning_of_paragraph = true;
                } else {
                    let next_byte = bytes.get(cursor + 1).copied();
                    if next_byte == Some(32) || next_byte == Some(9) {
                        store_run(&mut runs, &mut state, &mut plain_bytes);
                        if state.prefix_line_breaks == 0 {
                            state.prefix_line_breaks += 1;
                        }
                        state.prefix_para_breaks += 1;
                        beginning_of_paragraph = true;
                    } else if previous_byte == PrevByte::Byte(10) {
                        store_run(&mut runs, &mut state, &mut plain_bytes);
                        if state.prefix_line_breaks == 0 {
                            state.prefix_line_breaks += 1;
                            keep_previous_byte = Some(PrevByte::Byte(10));
                        }
                        state.prefix_para_breaks += 1;
                        beginning_of_paragraph = true;
                        virtual_byte = Some(32);
                    } else if previous_byte == PrevByte::Alignment {
                        state.prefix_para_breaks += 1;
                        beginning_of_paragraph = true;
                        virtual_byte = Some(32);
                    } else if previous_byte == PrevByte::Byte(32) || previous_byte == PrevByte::Byte(9) {
                        // Drop the newline.
                    } else if next_byte != Some(10) {
                        virtual_byte = Some(32);
                        should_output_char = true;
                    }
                }
            }

            let effective_byte = virtual_byte.unwrap_or(b0);
            previous_byte = keep_previous_byte.unwrap_or(PrevByte::Byte(effective_byte));

            if should_output_char && effective_byte >= 32 {
                plain_bytes.push(effective_byte);
                no_text_output_yet = false;
                beginning_of_paragraph = false;
            }
        }

        cursor += offset;
    }

    store_run(&mut runs, &mut state, &mut plain_bytes);
    runs
}

/// A decoded, measured run ready for line flow.
#[derive(Clone)]
struct FlowRun {
    state: TextAreaState,
    text: String,
    length: f64,
}

fn current_font<'a>(state: &'a TextAreaState, fallback: &'a FontDesc) -> &'a FontDesc {
    state.fonts.get(&state.font_index).unwrap_or(fallback)
}

/// Advance width of one character as a fraction of the font's em-height,
/// used to approximate text measurement without a TrueType rasterizer.
fn char_advance_em(c: char, monospace: bool) -> f64 {
    if monospace {
        return 0.6;
    }
    match c {
        ' ' | '.' | ',' | '\'' | '!' | 'i' | 'l' | 'j' | 'I' | '|' | ':' | ';' => 0.28,
        'm' | 'M' | 'w' | 'W' | '@' => 0.9,
        c if c.is_ascii_uppercase() => 0.72,
        c if c.is_ascii_digit() => 0.55,
        _ => 0.5,
    }
}

fn measure_text_px(text: &str, font: &FontDesc) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let height_px = CoordinateConversion::pt_to_px(font.height_pts);
    let lower = font.name.to_lowercase();
    let monospace = lower.contains("monospace") || lower.contains("courier");
    let bold_mul = if font.weight == "bold" { 1.08 } else { 1.0 };
    let sum: f64 = text.chars().map(|c| char_advance_em(c, monospace) * height_px * bold_mul).sum();
    sum * font.width_pts / font.height_pts
}

impl FlowRun {
    fn measure(&mut self, fallback: &FontDesc) {
        let font = current_font(&self.state, fallback).clone();
        self.length = measure_text_px(&self.text, &font);
    }
}

/// Reads the `TextColumn` objects preceding a text area's body: a sequence
/// of generic object headers terminated by an object-type-zero sentinel
/// (itself followed by two further reserved words).
fn read_text_columns(r: &mut DrawReader, cc: &CoordinateConversion, one_byte_types: bool) -> crate::error::Result<Vec<(Pt, Pt)>> {
    let mut columns = Vec::new();
    loop {
        let peeked = r.peek_u32()?;
        if peeked != 0 {
            let header = ObjectHeader::read(r, one_byte_types)?;
            let bottom_left = cc.draw_to_svg_point(header.low);
            let top_right = cc.draw_to_svg_point(header.high);
            if top_right.x - bottom_left.x > 0.0 {
                columns.push((bottom_left, top_right));
            }
        } else {
            r.read_u32()?;
            r.read_u32()?;
            r.read_u32()?;
            break;
        }
    }
    Ok(columns)
}

/// Reads a complete `TextArea` object and renders it to SVG markup: the
/// column headers, the foreground/background hint colours, the NUL-
/// terminated text body, then escape-sequence parsing and line flow.
#[allow(clippy::too_many_arguments)]
pub fn read_text_area_object(
    r: &mut DrawReader,
    cc: &CoordinateConversion,
    one_byte_types: bool,
    font_replacements: &HashMap<String, String>,
    utf8_mode: bool,
    use_tspans: bool,
    basic_underlines: bool,
) -> crate::error::Result<String> {
    let columns = read_text_columns(r, cc, one_byte_types)?;
    let _foreground_colour = ColourType::read(r)?;
    let _background_hint_colour = ColourType::read(r)?;
    let text_bytes = r.read_bytes_until_zero()?;

    let raw_runs = parse_escaped_text(&text_bytes, columns.len(), font_replacements);

    let decoded: Vec<(TextAreaState, String)> = raw_runs
        .into_iter()
        .map(|run| {
            let font = run.state.fonts.get(&run.state.font_index).cloned().unwrap_or_else(|| {
                FontDesc::new("system", 24.0, 24.0, font_replacements)
            });
            let text = if utf8_mode {
                String::from_utf8_lossy(&run.bytes).into_owned()
            } else {
                decode_bytes_to_utf8(&run.bytes, &font.originalname.to_lowercase(), &font.alphabet)
            };
            (run.state, text)
        })
        .collect();

    Ok(format_text_area(decoded, &columns, use_tspans, basic_underlines))
}

/// Lays decoded runs out across the text columns into `<text>`/`<tspan>`
/// elements, following the source's line-breaking and justification rules.
fn format_text_area(
    runs: Vec<(TextAreaState, String)>,
    columns: &[(Pt, Pt)],
    use_tspans: bool,
    basic_underlines: bool,
) -> String {
    if runs.is_empty() || columns.is_empty() {
        return String::new();
    }

    let fallback_font = FontDesc::new("system", 24.0, 24.0, &HashMap::new());

    let mut remaining: Vec<FlowRun> = runs
        .into_iter()
        .map(|(state, text)| {
            let mut fr = FlowRun { state, text, length: 0.0 };
            fr.measure(&fallback_font);
            fr
        })
        .collect();

    let mut out = String::new();
    let mut is_first_line = true;

    let mut col_idx = 0usize;
    let (mut bottom_left, mut top_right) = columns[0];
    let mut y = top_right.y + remaining[0].state.line_spacing_px;
    let mut is_start_of_column = true;

    while !remaining.is_empty() {
        let mut last_line_of_paragraph = false;
        let mut x = bottom_left.x;

        if remaining[0].state.prefix_line_breaks > 0 {
            let lb = remaining[0].state.prefix_line_breaks;
            y += remaining[0].state.line_spacing_px + remaining[0].state.paragraph_spacing_px * (lb as f64 - 1.0);
        }
        if !is_start_of_column {
            let pb = remaining[0].state.prefix_para_breaks;
            y += remaining[0].state.paragraph_spacing_px * pb as f64;
        }
        remaining[0].state.prefix_line_breaks = 0;
        remaining[0].state.prefix_para_breaks = 0;

        let mut text_area_width =
            top_right.x - bottom_left.x - remaining[0].state.left_margin_px - remaining[0].state.right_margin_px;

        if y >= bottom_left.y {
            col_idx += 1;
            if col_idx < columns.len() {
                let (bl, tr) = columns[col_idx];
                bottom_left = bl;
                top_right = tr;
                text_area_width =
                    top_right.x - bottom_left.x - remaining[0].state.left_margin_px - remaining[0].state.right_margin_px;
                x = bottom_left.x;
                y = top_right.y + remaining[0].state.line_spacing_px;
                is_start_of_column = true;
            } else {
                break;
            }
        }

        let mut current_width = 0.0;
        let mut line_runs: Vec<FlowRun> = Vec::new();
        while !remaining.is_empty() && current_width < text_area_width {
            let end_of_paragraph = remaining[0].state.prefix_line_breaks > 0 || remaining[0].state.prefix_para_breaks > 0;
            if !line_runs.is_empty() && end_of_paragraph {
                last_line_of_paragraph = true;
                break;
            }
            let mut run = remaining.remove(0);
            run.measure(&fallback_font);
            current_width += run.length;
            line_runs.push(run);
        }

        if line_runs.is_empty() {
            break;
        }

        if current_width > text_area_width {
            let last_idx = line_runs.len() - 1;
            let full_text_chars: Vec<char> = line_runs[last_idx].text.chars().collect();
            let mut test_chars = full_text_chars.clone();
            let mut test_state = line_runs[last_idx].state.clone();
            test_state.prefix_line_breaks = 0;
            test_state.prefix_para_breaks = 0;

            let previous_width = current_width - line_runs[last_idx].length;
            let number_of_spaces: usize =
                line_runs[..last_idx].iter().map(|r| r.text.chars().filter(|&c| c == ' ').count()).sum();

            let measure_chars = |chars: &[char], state: &TextAreaState| -> f64 {
                let font = current_font(state, &fallback_font).clone();
                let s: String = chars.iter().collect();
                measure_text_px(&s, &font)
            };

            current_width = previous_width + measure_chars(&test_chars, &test_state);

            while current_width > text_area_width && test_chars.len() > 1 {
                let last_space = test_chars.iter().rposition(|&c| c == ' ');
                let last_soft_hyphen = test_chars.iter().rposition(|&c| c == '\u{ad}');

                if let Some(sh) = last_soft_hyphen.filter(|&sh| sh > 0 && last_space.map_or(true, |sp| sh > sp)) {
                    test_chars.truncate(sh);
                    test_chars.push('-');
                } else if let Some(sp) = last_space.filter(|&sp| sp > 0) {
                    test_chars.truncate(sp);
                } else if number_of_spaces == 0 {
                    test_chars.pop();
                } else {
                    test_chars.clear();
                    current_width = previous_width + measure_chars(&test_chars, &test_state);
                    if last_idx >= 1 {
                        let trimmed = line_runs[last_idx - 1].text.trim_end().to_string();
                        line_runs[last_idx - 1].text = trimmed;
                        line_runs[last_idx - 1].measure(&fallback_font);
                    }
                    break;
                }

                current_width = previous_width + measure_chars(&test_chars, &test_state);
            }

            let char_start = test_chars.len().min(full_text_chars.len());
            let remainder: String = full_text_chars[char_start..].iter().collect::<String>().trim_start().to_string();

            if !remainder.is_empty() {
                let mut new_run = line_runs[last_idx].clone();
                new_run.state.prefix_line_breaks = 0;
                new_run.state.prefix_para_breaks = 0;
                new_run.state.vertical_move_px = 0.0;
                new_run.text = remainder;
                new_run.measure(&fallback_font);
                remaining.insert(0, new_run);
            }

            line_runs[last_idx].text = test_chars.into_iter().collect();
            line_runs[last_idx].state = test_state;
            line_runs[last_idx].measure(&fallback_font);
            current_width = line_runs.iter().map(|r| r.length).sum();
        }

        last_line_of_paragraph = last_line_of_paragraph || remaining.is_empty();

        let last_state = line_runs.last().unwrap().state.clone();
        let mut line_offset_x = last_state.left_margin_px;
        if last_state.alignment == 'R' {
            line_offset_x += text_area_width - current_width;
        } else if last_state.alignment == 'C' {
            line_offset_x += (text_area_width - current_width) / 2.0;
        }

        let num_chars_on_line: usize = line_runs.iter().map(|r| r.text.chars().count()).sum();
        let num_gaps = num_chars_on_line as i64 - 1;

        let mut letter_spacing = 0.0;
        if last_state.alignment == 'D' && !last_line_of_paragraph && num_gaps > 0 {
            letter_spacing = (text_area_width - current_width) / num_gaps as f64;
        }

        for run in &line_runs {
            let font = current_font(&run.state, &fallback_font).clone();
            let mut text_decoration = String::new();
            if run.state.underline_thickness > 0 && font.height_pts > 0.0 {
                if basic_underlines {
                    text_decoration = " text-decoration=\"underline\"".to_string();
                } else {
                    text_decoration = format!(
                        " text-decoration=\"underline {:.4}pt {}\"",
                        run.state.underline_thickness as f64 * font.height_pts / 256.0,
                        crate::svg::colour_name(run.state.text_colour)
                    );
                }
            }

            let style = format!(
                "font-family=\"{}\" font-size=\"{:.4}pt\" font-weight=\"{}\" font-style=\"{}\" letter-spacing=\"{:.4}\" fill=\"{}\"{} xml:space=\"preserve\" transform=\"translate({:.4} {:.4}) scale({:.4} 1)\"",
                font.name,
                font.height_pts,
                font.weight,
                font.style,
                letter_spacing,
                crate::svg::colour_name(run.state.text_colour),
                text_decoration,
                x + line_offset_x,
                y - run.state.vertical_move_px,
                font.width_pts / font.height_pts,
            );

            if use_tspans {
                if is_first_line {
                    out.push_str(&format!("<text {style}>{}\n", escape(&run.text)));
                    is_first_line = false;
                } else {
                    out.push_str(&format!("<tspan {style}>{}</tspan>\n", escape(&run.text)));
                }
            } else {
                out.push_str(&format!("<text {style}>{}</text>\n", escape(&run.text)));
            }
            x += run.length + (run.text.chars().count() as f64 - 1.0) * letter_spacing;
        }

        is_start_of_column = false;
        if !remaining.is_empty()
            && remaining[0].state.prefix_line_breaks == 0
            && remaining[0].state.prefix_para_breaks == 0
        {
            remaining[0].state.prefix_line_breaks = 1;
        }
    }

    if use_tspans {
        out.push_str("</text>\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reps() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("system".to_string(), "System,monospace".to_string());
        m.insert("_default".to_string(), "sans-serif".to_string());
        m
    }

    #[test]
    fn plain_text_becomes_one_run() {
        let runs = parse_escaped_text(b"hello", 1, &reps());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].bytes, b"hello");
    }

    #[test]
    fn double_newline_starts_new_paragraph() {
        let runs = parse_escaped_text(b"one\n\ntwo", 1, &reps());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].bytes, b"one");
        assert_eq!(runs[1].bytes, b"two");
        assert_eq!(runs[1].state.prefix_para_breaks, 1);
    }

    #[test]
    fn single_newline_becomes_space() {
        let runs = parse_escaped_text(b"one\ntwo", 1, &reps());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].bytes, b"one two");
    }

    #[test]
    fn setfont_command_switches_slot() {
        let runs = parse_escaped_text(b"a\\1b", 1, &reps());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].state.font_index, 1);
    }

    #[test]
    fn format_text_area_emits_text_elements() {
        let mut state = TextAreaState::new(&reps());
        state.alignment = 'L';
        let columns = vec![(Pt::new(0.0, 100.0), Pt::new(200.0, 0.0))];
        let markup = format_text_area(vec![(state, "hi".to_string())], &columns, false, false);
        assert!(markup.contains("<text"));
        assert!(markup.contains("hi"));
    }
}
