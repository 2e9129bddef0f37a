//! Objects that don't carry their own file: page options, groups, tagged
//! wrappers, and JPEGs.

use crate::coords::DrawMatrixRaw;
use crate::error::{DrawError, Result};
use crate::reader::DrawReader;

/// Physical page sizes Draw knows about, in millimetres (width, height),
/// portrait orientation. Index `i` corresponds to the on-disk `paper_size`
/// code `i << 8` (0x000 = 2A0 down to 0xb00 = A10).
pub const PAPER_SIZES_MM: &[(f64, f64)] = &[
    (1189.0, 1682.0), // 2A0
    (841.0, 1189.0),  // A0
    (594.0, 841.0),   // A1
    (420.0, 594.0),   // A2
    (297.0, 420.0),   // A3
    (210.0, 297.0),   // A4
    (148.0, 210.0),   // A5
    (105.0, 148.0),   // A6
    (74.0, 105.0),    // A7
    (52.0, 74.0),     // A8
    (37.0, 52.0),     // A9
    (26.0, 37.0),     // A10
];

/// Indices of {A4, A3, A2, A1, A0, 2A0}, in smallest-first order: the
/// fallback search tries each in turn and keeps the smallest that fits.
pub const A4_AND_UP: &[usize] = &[5, 4, 3, 2, 1, 0];

/// Index of A0, the default paper size when Pass 1 finds no Options object
/// and nothing in `A4_AND_UP` fits the drawing either.
pub const DEFAULT_PAPER_SIZE: usize = 1;

/// Landscape bit within `paper_limits`.
const LANDSCAPE_BIT: u32 = 0x10;

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub paper_size: u32,
    pub paper_limits: u32,
}

impl Options {
    /// Reads the two leading words of an `Options` object; the remaining
    /// grid/zoom/editor-state fields (up to the object's declared length)
    /// are never consulted by the converter and are skipped by the
    /// dispatcher's unconditional seek-to-next-object.
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        let paper_size = r.read_u32()?;
        let paper_limits = r.read_u32()?;
        Ok(Options { paper_size, paper_limits })
    }

    /// `(width_mm, height_mm)`, with the landscape flag applied.
    pub fn paper_size_mm(&self) -> Option<(f64, f64)> {
        let idx = (self.paper_size >> 8) as usize;
        let (w, h) = *PAPER_SIZES_MM.get(idx)?;
        if self.paper_limits & LANDSCAPE_BIT != 0 {
            Some((h, w))
        } else {
            Some((w, h))
        }
    }
}

/// Reads a `Group` object body (bbox + 12-byte name already consumed by the
/// caller via `ObjectHeader`), returning the raw bytes of its children so
/// the orchestrator can recurse with a fresh reader over them.
pub fn read_group_name(r: &mut DrawReader) -> Result<String> {
    let name = r.read_fixed_name(12)?;
    Ok(crate::encoding::latin1_to_utf8(&name))
}

/// A `Tagged` object: a 4-byte identifying tag followed by exactly one
/// nested object (possibly itself a `Group`, to allow further nesting),
/// read via the usual object dispatch. Any trailing word-aligned padding
/// within the declared length is ignored.
pub struct TaggedHeader {
    pub tag: u32,
}

impl TaggedHeader {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(TaggedHeader { tag: r.read_u32()? })
    }
}

/// A `Jpeg` object's fixed header: pixel size, resolution, and the same
/// 16.16-fixed transform used by transformed sprites, followed by the raw
/// JFIF data of the declared `length`.
pub struct JpegHeader {
    pub width: u32,
    pub height: u32,
    pub xdpi: u32,
    pub ydpi: u32,
    pub transform: DrawMatrixRaw,
    pub length: u32,
}

impl JpegHeader {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(JpegHeader {
            width: r.read_u32()?,
            height: r.read_u32()?,
            xdpi: r.read_u32()?,
            ydpi: r.read_u32()?,
            transform: DrawMatrixRaw::read(r)?,
            length: r.read_u32()?,
        })
    }
}

/// Smallest A4-and-up paper size that contains `(width_mm, height_mm)`,
/// preferring landscape orientation when both fit. Returns `None` when no
/// catalogued size is big enough.
pub fn smallest_fitting_paper(width_mm: f64, height_mm: f64) -> Option<(usize, bool)> {
    let mut best: Option<(usize, bool, f64)> = None;
    for &idx in A4_AND_UP {
        let (w, h) = PAPER_SIZES_MM[idx];
        // Landscape checked before portrait so a tie in area keeps landscape.
        for &landscape in &[true, false] {
            let (pw, ph) = if landscape { (h, w) } else { (w, h) };
            if width_mm < pw && height_mm < ph {
                let area = pw * ph;
                if best.map(|(_, _, a)| area < a).unwrap_or(true) {
                    best = Some((idx, landscape, area));
                }
            }
        }
    }
    best.map(|(idx, landscape, _)| (idx, landscape))
}

pub fn require_paper_size(idx: usize) -> Result<(f64, f64)> {
    PAPER_SIZES_MM.get(idx).copied().ok_or(DrawError::UnknownPaperSize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_bit_swaps_dimensions() {
        let opts = Options { paper_size: 5 << 8, paper_limits: 0x10 };
        assert_eq!(opts.paper_size_mm(), Some((297.0, 210.0)));
    }

    #[test]
    fn small_drawing_fits_a4() {
        let (idx, landscape) = smallest_fitting_paper(100.0, 50.0).unwrap();
        assert_eq!(idx, 5);
        assert!(landscape);
    }

    #[test]
    fn oversize_drawing_fits_nothing_in_a4_and_up() {
        assert!(smallest_fitting_paper(5000.0, 5000.0).is_none());
    }
}
