//! Path opcode interpreter: segment collection, cap/dash synthesis, and SVG
//! `<path>` emission.

use kurbo::{CubicBez, ParamCurve, Point};

use crate::coords::{CoordinateConversion, Coords, Pt};
use crate::error::Result;
use crate::objects::header::{
    ObjectHeader, PathHeader, PATH_BEZIER, PATH_CLOSE_SUB, PATH_DRAW, PATH_END, PATH_MOVE,
};
use crate::reader::DrawReader;
use crate::svg::colour_name;

const EPSILON: f64 = 1e-4;

/// One drawing-pen operation, tagged per spec.md §9 (`enum PathSegment`).
#[derive(Debug, Clone, Copy)]
enum PenOp {
    Move(Pt),
    Draw(Pt),
    Bezier1(Pt),
    Bezier2(Pt),
    Bezier3(Pt),
    Close,
}

/// A straight-line approximation of one piece of the path, used only for
/// arc-length walking when placing dashes and caps (never for the emitted
/// `d` geometry itself).
#[derive(Debug, Clone, Copy)]
struct Segment(Pt, Pt);

impl Segment {
    fn length(&self) -> f64 {
        self.0.dist(self.1)
    }
}

/// Evaluates the cubic Bézier `a b c d` at `t` using `kurbo`'s `ParamCurve`,
/// rather than hand-rolling the Bernstein-polynomial expansion.
fn cubic_bezier(a: Pt, b: Pt, c: Pt, d: Pt, t: f64) -> Pt {
    let curve = CubicBez::new(
        Point::new(a.x, a.y),
        Point::new(b.x, b.y),
        Point::new(c.x, c.y),
        Point::new(d.x, d.y),
    );
    let p = curve.eval(t);
    Pt::new(p.x, p.y)
}

enum StepResult {
    Moved,
    InProgress,
    Closed,
    Finished,
}

/// One dash boundary: whether it starts a drawn dash, and its distance from
/// the previous boundary (or from path start for the first entry).
#[derive(Debug, Clone, Copy)]
struct DashEntry {
    is_start_cap: bool,
    dist: f64,
}

struct CapInfo {
    pos: Pt,
    dir: f64,
    is_start_cap: bool,
}

/// Per-sub-path scratch state while walking the opcode stream.
struct PathWalker<'a> {
    reader: &'a mut DrawReader<'a>,
    cc: &'a CoordinateConversion,
    points: Vec<PenOp>,
    segments: Vec<Segment>,
}

impl<'a> PathWalker<'a> {
    fn step(&mut self) -> Result<StepResult> {
        let tag = self.reader.read_int(4)? as u32 & 0x7f;
        match tag {
            PATH_END => Ok(StepResult::Finished),
            PATH_MOVE => {
                let p = Coords::read(self.reader)?;
                let svg = self.cc.draw_to_svg_point(p);
                self.points.push(PenOp::Move(svg));
                Ok(StepResult::Moved)
            }
            PATH_CLOSE_SUB => {
                self.points.push(PenOp::Close);
                Ok(StepResult::Closed)
            }
            PATH_DRAW => {
                let p = Coords::read(self.reader)?;
                let svg = self.cc.draw_to_svg_point(p);
                let prev = last_point(&self.points);
                self.points.push(PenOp::Draw(svg));
                if let Some(prev) = prev {
                    self.segments.push(Segment(prev, svg));
                }
                Ok(StepResult::InProgress)
            }
            PATH_BEZIER => {
                let prev = last_point(&self.points).unwrap_or(Pt::new(0.0, 0.0));
                let p1 = self.cc.draw_to_svg_point(Coords::read(self.reader)?);
                let p2 = self.cc.draw_to_svg_point(Coords::read(self.reader)?);
                let p3 = self.cc.draw_to_svg_point(Coords::read(self.reader)?);
                self.points.push(PenOp::Bezier1(p1));
                self.points.push(PenOp::Bezier2(p2));
                self.points.push(PenOp::Bezier3(p3));

                const NUM_SEGMENTS: usize = 50;
                let mut old_point = cubic_bezier(prev, p1, p2, p3, 0.0);
                for t in 1..=NUM_SEGMENTS {
                    let new_point = cubic_bezier(prev, p1, p2, p3, t as f64 / NUM_SEGMENTS as f64);
                    self.segments.push(Segment(old_point, new_point));
                    old_point = new_point;
                }
                Ok(StepResult::InProgress)
            }
            _ => Ok(StepResult::Finished),
        }
    }
}

fn last_point(points: &[PenOp]) -> Option<Pt> {
    points.iter().rev().find_map(|p| match p {
        PenOp::Move(p) | PenOp::Draw(p) | PenOp::Bezier3(p) => Some(*p),
        _ => None,
    })
}

fn write_points(out: &mut String, points: &[PenOp]) {
    let mut first = true;
    for point in points {
        if !first {
            out.push('\n');
        }
        first = false;
        match point {
            PenOp::Move(p) => out.push_str(&format!("M{:.4} {:.4}", p.x, p.y)),
            PenOp::Draw(p) => out.push_str(&format!("L{:.4} {:.4}", p.x, p.y)),
            PenOp::Bezier1(p) => out.push_str(&format!("C{:.4} {:.4} ", p.x, p.y)),
            PenOp::Bezier2(p) => out.push_str(&format!("{:.4} {:.4} ", p.x, p.y)),
            PenOp::Bezier3(p) => out.push_str(&format!("{:.4} {:.4}", p.x, p.y)),
            PenOp::Close => out.push('Z'),
        }
    }
}

/// Walks the sub-path's straight-line approximation and emits cap markup at
/// every dash boundary (round circle, square/triangular polygon), matching
/// `gather_simple_path_caps`. `cap_count` is a running id counter shared
/// across the whole path object.
fn gather_caps(
    segments: &[Segment],
    path: &PathHeader,
    caps: Option<&[DashEntry]>,
    svg_width: f64,
    offset: f64,
    cap_count: &mut usize,
) -> String {
    let total_length: f64 = segments.iter().map(Segment::length).sum();
    if total_length < EPSILON {
        return String::new();
    }

    let owned_single;
    let caps: &[DashEntry] = match caps {
        Some(c) if !c.is_empty() => c,
        _ => {
            owned_single = [DashEntry { is_start_cap: false, dist: total_length }];
            &owned_single
        }
    };
    let mut caps = caps.to_vec();
    if caps.len() % 2 != 0 {
        caps.push(DashEntry { is_start_cap: true, dist: total_length });
    }

    let mut cap_index = 0usize;
    let mut current_cap_distance = offset;
    while current_cap_distance > caps[cap_index].dist {
        current_cap_distance -= caps[cap_index].dist;
        cap_index = (cap_index + 1) % caps.len();
    }

    let mut is_start_cap = !caps[cap_index].is_start_cap;
    let mut initial_offset_in_gap = !is_start_cap;

    let mut cap_infos: Vec<CapInfo> = Vec::new();
    let mut done = false;

    while !done {
        let mut cap_pos = None;
        let mut cap_dir = 0.0;
        let mut length_so_far = 0.0;
        let mut last_segment = segments.last().copied();

        for segment in segments {
            let length = segment.length();
            if current_cap_distance <= length_so_far + length {
                if length > EPSILON {
                    let ratio = (current_cap_distance - length_so_far) / length;
                    cap_pos = Some(segment.0.lerp(segment.1, ratio));
                    cap_dir = (segment.1.y - segment.0.y).atan2(segment.1.x - segment.0.x);
                } else {
                    cap_pos = Some(segment.0);
                    cap_dir = 0.0;
                }
                last_segment = Some(*segment);
                break;
            }
            length_so_far += length;
        }

        if !initial_offset_in_gap {
            if let Some(pos) = cap_pos {
                cap_infos.push(CapInfo { pos, dir: cap_dir, is_start_cap });
            } else if !is_start_cap {
                if let Some(seg) = last_segment {
                    let dir = (seg.1.y - seg.0.y).atan2(seg.1.x - seg.0.x);
                    cap_infos.push(CapInfo { pos: seg.1, dir, is_start_cap: false });
                }
                done = true;
            } else {
                done = true;
            }
        }
        initial_offset_in_gap = false;

        if done {
            break;
        }

        current_cap_distance += caps[cap_index].dist;
        is_start_cap = caps[cap_index].is_start_cap;
        cap_index = (cap_index + 1) % caps.len();
    }

    let fill_caps = format!("fill=\"{}\"", colour_name(path.outlinecolour));
    let scale_x = svg_width * path.style.tricaplength as f64 / 16.0;
    let scale_y = svg_width * path.style.tricapwidth as f64 / 16.0;

    let mut out = String::new();
    for cap in &cap_infos {
        let angle = cap.dir.to_degrees();
        let style = if cap.is_start_cap { path.style.startcapstyle } else { path.style.endcapstyle };
        let tag = if cap.is_start_cap { "start" } else { "end" };
        match style {
            1 => {
                out.push_str(&format!(
                    "<circle id=\"cap{}_{}_round\" {} stroke=\"none\" r=\"{:.4}\" cx=\"{:.4}\" cy=\"{:.4}\" />\n",
                    cap_count, tag, fill_caps, svg_width / 2.0, cap.pos.x, cap.pos.y
                ));
                *cap_count += 1;
            }
            2 => {
                let d = if cap.is_start_cap { "M-1 -1 L-1 1 L0.02 1 L0.02 -1 z" } else { "M-0.02 -1 L-0.02 1 L1 1 L1 -1 z" };
                out.push_str(&format!(
                    "<path id=\"cap{}_{}_square\" {} stroke=\"none\" transform=\"translate({:.4} {:.4}) rotate({:.4}) scale({:.4} {:.4})\" d=\"{}\" />\n",
                    cap_count, tag, fill_caps, cap.pos.x, cap.pos.y, angle, svg_width / 2.0, svg_width / 2.0, d
                ));
                *cap_count += 1;
            }
            3 => {
                let d = if cap.is_start_cap { "M0.02 -1 L0.02 1 L-1 0 z" } else { "M-0.02 -1 L1 0 L-0.02 1 z" };
                out.push_str(&format!(
                    "<path id=\"cap{}_{}_triangle\" {} stroke=\"none\" transform=\"translate({:.4} {:.4}) rotate({:.4}) scale({:.4} {:.4})\" d=\"{}\" />\n",
                    cap_count, tag, fill_caps, cap.pos.x, cap.pos.y, angle, scale_x, scale_y, d
                ));
                *cap_count += 1;
            }
            _ => {}
        }
    }
    out
}

/// Reads and renders one `Path` object. `path_count`/`cap_count` are shared
/// running counters used to build stable per-path/per-cap SVG element ids.
pub fn read_path_object(
    reader: &mut DrawReader,
    cc: &CoordinateConversion,
    _header: &ObjectHeader,
    path_count: &mut usize,
    cap_count: &mut usize,
) -> Result<String> {
    let path = PathHeader::read(reader)?;

    let fill = if path.fillcolour.is_transparent() {
        "fill=\"none\"".to_string()
    } else {
        format!("fill=\"{}\"", colour_name(path.fillcolour))
    };

    let mut stroke = format!("stroke=\"{}\"", colour_name(path.outlinecolour));
    if path.outlinecolour.is_transparent() {
        stroke.push_str(" stroke-opacity=\"0\"");
    }

    let svg_width = if path.outlinewidth == 0 { 1.0 } else { cc.draw_to_svg_width(path.outlinewidth as f64) };

    let mut dash_array_string = String::new();
    let mut offset = 0.0;
    let mut dash_entries: Option<Vec<DashEntry>> = None;
    if path.style.dash {
        let raw_offset = reader.read_int(4)?;
        offset = cc.draw_to_svg_width(raw_offset as f64);
        let dash_count = reader.read_u32()?;

        if offset > 0.0 {
            dash_array_string.push_str(&format!("stroke-dashoffset=\"{offset:.4}\" "));
        }
        dash_array_string.push_str("style=\"stroke-dasharray:");

        let mut is_start_cap = true;
        let mut entries = Vec::with_capacity(dash_count as usize);
        for _ in 0..dash_count {
            let raw = reader.read_u32()?;
            let dash_offset = cc.draw_to_svg_width(raw as f64);
            is_start_cap = !is_start_cap;
            entries.push(DashEntry { is_start_cap, dist: dash_offset });
            dash_array_string.push_str(&format!(" {dash_offset:.4}"));
        }
        dash_array_string.push('"');
        dash_entries = Some(entries);
    }

    let mut out = String::new();
    let started_group = path.style.startcapstyle != 0 || path.style.endcapstyle != 0;
    let fill_attr;
    if started_group {
        out.push_str(&format!("<g id=\"draw_path{path_count}\">\n"));
        fill_attr = fill;
    } else {
        fill_attr = format!("id=\"draw_path{path_count}\" {fill}");
    }
    *path_count += 1;

    let path_header = format!(
        "<path {} fill-rule=\"{}\" {} stroke-width=\"{:.4}\" stroke-linejoin=\"{}\" {} d=\"",
        fill_attr,
        if path.style.winding == 0 { "nonzero" } else { "evenodd" },
        stroke,
        svg_width,
        match path.style.joinstyle {
            0 => "miter",
            1 => "round",
            _ => "bevel",
        },
        dash_array_string,
    );
    out.push_str(&path_header);

    let mut walker = PathWalker { reader, cc, points: Vec::new(), segments: Vec::new() };
    let mut caps_output = String::new();
    let mut path_body = String::new();
    let mut old_status_in_progress = false;

    loop {
        let status = walker.step()?;
        let finished = matches!(status, StepResult::Finished);
        let moved = matches!(status, StepResult::Moved);

        if (moved && old_status_in_progress) || finished {
            let move_point = if moved { last_point(&walker.points) } else { None };

            let mut chunk = String::new();
            write_points(&mut chunk, &walker.points);
            path_body.push_str(&chunk);

            caps_output.push_str(&gather_caps(&walker.segments, &path, dash_entries.as_deref(), svg_width, offset, cap_count));

            walker.points.clear();
            if let Some(p) = move_point {
                walker.points.push(PenOp::Move(p));
            }
            walker.segments.clear();

            if moved {
                old_status_in_progress = false;
            }
        }

        if finished {
            break;
        }
        old_status_in_progress = true;
    }

    out.push_str(&path_body);
    out.push_str("\" />\n");
    if !caps_output.is_empty() {
        out.push_str(&caps_output);
    }
    if started_group {
        out.push_str("</g>\n");
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_bezier_endpoints_match_control_points() {
        let a = Pt::new(0.0, 0.0);
        let d = Pt::new(10.0, 0.0);
        let b = Pt::new(3.0, 3.0);
        let c = Pt::new(7.0, 3.0);
        let start = cubic_bezier(a, b, c, d, 0.0);
        let end = cubic_bezier(a, b, c, d, 1.0);
        assert!((start.x - a.x).abs() < 1e-9 && (start.y - a.y).abs() < 1e-9);
        assert!((end.x - d.x).abs() < 1e-9 && (end.y - d.y).abs() < 1e-9);
    }

    #[test]
    fn zero_length_path_produces_no_caps() {
        let segments = [Segment(Pt::new(0.0, 0.0), Pt::new(0.0, 0.0))];
        let path = PathHeader {
            fillcolour: Default::default(),
            outlinecolour: Default::default(),
            outlinewidth: 4,
            style: crate::objects::header::PathStyleType {
                joinstyle: 0,
                endcapstyle: 1,
                startcapstyle: 1,
                winding: 0,
                dash: false,
                tricapwidth: 0,
                tricaplength: 0,
            },
        };
        let mut cap_count = 0;
        let result = gather_caps(&segments, &path, None, 4.0, 0.0, &mut cap_count);
        assert!(result.is_empty());
    }
}
