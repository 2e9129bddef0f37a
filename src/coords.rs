//! Affine geometry for Draw-unit ↔ SVG-pixel conversion.
//!
//! `Pt` mirrors the source's own little `Point` class rather than reusing
//! `kurbo::Point` here: the matrix math below (3x3 homogeneous, `matmat`/
//! `matpoint`/`decompose`) is bespoke and doesn't benefit from `kurbo::Affine`'s
//! row-major layout. `kurbo` is used instead in [`crate::objects::path`] where
//! its `CubicBez`/`PathEl` line up directly with Draw's own Bézier opcodes.

use crate::error::Result;
use crate::reader::DrawReader;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

impl Pt {
    pub fn new(x: f64, y: f64) -> Self {
        Pt { x, y }
    }

    pub fn dist(&self, other: Pt) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn lerp(&self, other: Pt, t: f64) -> Pt {
        Pt::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// A point in Draw-unit integer coordinates, as stored on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(Coords {
            x: r.read_int(4)?,
            y: r.read_int(4)?,
        })
    }
}

/// A 2x3 affine transform `(a c e; b d f; 0 0 1)`, matching the source's `Mat`.
#[derive(Debug, Clone, Copy)]
pub struct Mat {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Mat {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Mat { a, b, c, d, e, f }
    }

    pub fn identity() -> Self {
        Mat::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn matpoint(&self, point: Pt) -> Pt {
        Pt::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Returns (translation, rotation, skew, scale), matching the source's
    /// `decompose()`. Rotation and x-skew are negated because Draw's Y axis
    /// is mirrored going into SVG space.
    pub fn decompose(&self) -> (Pt, f64, Pt, Pt) {
        let delta = self.a * self.d - self.b * self.c;
        let translation = Pt::new(self.e, self.f);

        let r = (self.a * self.a + self.b * self.b).sqrt();
        let scale = if r != 0.0 {
            Pt::new(r, delta / r)
        } else {
            let s = (self.c * self.c + self.d * self.d).sqrt();
            if s != 0.0 {
                Pt::new(delta / s, s)
            } else {
                Pt::new(0.0, 0.0)
            }
        };

        let rotation = self.b.atan2(self.a);
        let skew_x = self.c.atan2(self.d) + rotation;

        (translation, -rotation, Pt::new(-skew_x, 0.0), scale)
    }
}

/// Raw 16.16-fixed-point transform as stored in a Draw transformed text,
/// sprite, or JPEG object.
#[derive(Debug, Clone, Copy)]
pub struct DrawMatrixRaw {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
    pub f: i32,
}

impl DrawMatrixRaw {
    pub fn identity() -> Self {
        DrawMatrixRaw { a: 0x10000, b: 0, c: 0, d: 0x10000, e: 0, f: 0 }
    }

    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(DrawMatrixRaw {
            a: r.read_int(4)?,
            b: r.read_int(4)?,
            c: r.read_int(4)?,
            d: r.read_int(4)?,
            e: r.read_int(4)?,
            f: r.read_int(4)?,
        })
    }
}

/// Converts between Draw-unit page space and SVG-pixel page space.
pub struct CoordinateConversion {
    dpsx: f64,
    dpsy: f64,
    spsx: f64,
    spsy: f64,
    draw_to_svg_mat: Mat,
}

impl CoordinateConversion {
    pub fn new(dpsx: f64, dpsy: f64, spsx: f64, spsy: f64) -> Self {
        let draw_to_svg_mat = Mat::new(spsx / dpsx, 0.0, 0.0, -spsy / dpsy, 0.0, spsy);
        CoordinateConversion { dpsx, dpsy, spsx, spsy, draw_to_svg_mat }
    }

    pub fn draw_to_svg_width(&self, width: f64) -> f64 {
        width * self.spsx / self.dpsx
    }

    pub fn draw_to_svg_size(&self, size: Coords) -> Pt {
        Pt::new(
            size.x as f64 * self.spsx / self.dpsx,
            size.y as f64 * self.spsy / self.dpsy,
        )
    }

    pub fn draw_to_svg_point(&self, point: Coords) -> Pt {
        self.draw_to_svg_mat.matpoint(Pt::new(point.x as f64, point.y as f64))
    }

    pub fn draw_to_svg_matrix(&self, m: &DrawMatrixRaw) -> Mat {
        let convert = |unit: i32| unit as f64 / 65536.0;
        let svg_point = self.draw_to_svg_point(Coords { x: m.e, y: m.f });
        Mat::new(convert(m.a), convert(m.b), convert(m.c), convert(m.d), svg_point.x, svg_point.y)
    }

    pub fn pt_to_px(v: f64) -> f64 {
        v * 4.0 / 3.0
    }

    pub fn px_to_pt(v: f64) -> f64 {
        v * 0.75
    }

    pub fn px_to_pt_point(p: Pt) -> Pt {
        Pt::new(Self::px_to_pt(p.x), Self::px_to_pt(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn identity_matrix_has_zero_rotation() {
        let (t, rotation, skew, scale) = Mat::identity().decompose();
        assert_approx_eq!(t.x, 0.0);
        assert_approx_eq!(t.y, 0.0);
        assert_approx_eq!(rotation, 0.0);
        assert_approx_eq!(skew.x, 0.0);
        assert_approx_eq!(scale.x, 1.0);
        assert_approx_eq!(scale.y, 1.0);
    }

    #[test]
    fn draw_point_flips_y_axis() {
        let cc = CoordinateConversion::new(1000.0, 1000.0, 100.0, 100.0);
        let p = cc.draw_to_svg_point(Coords { x: 0, y: 0 });
        assert_approx_eq!(p.x, 0.0);
        assert_approx_eq!(p.y, 100.0);
    }

    #[test]
    fn pt_px_round_trip() {
        assert_approx_eq!(CoordinateConversion::px_to_pt(CoordinateConversion::pt_to_px(12.0)), 12.0);
    }
}
