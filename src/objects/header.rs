//! Object header, file header, and the small fixed-layout structs shared by
//! several object kinds (colour, text header, path style).

use crate::coords::Coords;
use crate::encoding::latin1_to_utf8;
use crate::error::Result;
use crate::reader::DrawReader;

pub const PATH_END: u32 = 0;
pub const PATH_MOVE: u32 = 2;
pub const PATH_CLOSE_SUB: u32 = 5;
pub const PATH_BEZIER: u32 = 6;
pub const PATH_DRAW: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    FontTable,
    Text,
    Path,
    Sprite,
    Group,
    Tagged,
    TextArea,
    TextColumn,
    Options,
    TransformedText,
    TransformedSprite,
    Jpeg,
    Unknown(u32),
}

impl From<u32> for ObjectType {
    fn from(v: u32) -> Self {
        match v {
            0 => ObjectType::FontTable,
            1 => ObjectType::Text,
            2 => ObjectType::Path,
            5 => ObjectType::Sprite,
            6 => ObjectType::Group,
            7 => ObjectType::Tagged,
            9 => ObjectType::TextArea,
            10 => ObjectType::TextColumn,
            11 => ObjectType::Options,
            12 => ObjectType::TransformedText,
            13 => ObjectType::TransformedSprite,
            16 => ObjectType::Jpeg,
            other => ObjectType::Unknown(other),
        }
    }
}

/// Size in bytes of an `ObjectHeader` on disk (type + length + two `Coords`).
pub const OBJECT_HEADER_SIZE: u32 = 8 + 2 * 8;

#[derive(Debug, Clone, Copy)]
pub struct ObjectHeader {
    pub obj_type: ObjectType,
    pub obj_length: u32,
    pub low: Coords,
    pub high: Coords,
}

impl ObjectHeader {
    /// The on-disk type word is always 4 bytes wide; `one_byte_types` only
    /// changes how many of its low bits are the real type (8 vs. the usual
    /// 16), for the handful of producers that repurpose the upper bytes.
    pub fn read(r: &mut DrawReader, one_byte_types: bool) -> Result<Self> {
        let raw_type = r.read_u32()?;
        let raw_type = if one_byte_types { raw_type & 0xff } else { raw_type & 0xffff };
        let obj_length = r.read_u32()?;
        let low = Coords::read(r)?;
        let high = Coords::read(r)?;
        Ok(ObjectHeader { obj_type: raw_type.into(), obj_length, low, high })
    }
}

pub struct DrawFileHeader {
    pub magic: u32,
    pub major: u32,
    pub minor: u32,
    pub creator: String,
    pub low_box: Coords,
    pub high_box: Coords,
}

pub const DRAW_MAGIC: u32 = 0x7761_7244;

impl DrawFileHeader {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        use crate::error::DrawError;
        let magic = r.read_u32()?;
        if magic != DRAW_MAGIC {
            return Err(DrawError::WrongMagic(magic));
        }
        let major = r.read_u32()?;
        let minor = r.read_u32()?;
        let creator = latin1_to_utf8(&r.read_fixed_name(12)?);
        let low_box = Coords::read(r)?;
        let high_box = Coords::read(r)?;
        Ok(DrawFileHeader { magic, major, minor, creator, low_box, high_box })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColourType {
    pub reserved: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColourType {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(ColourType {
            reserved: r.read_uint(1)? as u8,
            red: r.read_uint(1)? as u8,
            green: r.read_uint(1)? as u8,
            blue: r.read_uint(1)? as u8,
        })
    }

    /// `reserved == 0xff` marks "no colour" (fill-none / zero stroke opacity).
    pub fn is_transparent(&self) -> bool {
        self.reserved == 0xff
    }

    pub fn rgb_u32(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathStyleType {
    pub joinstyle: u8,
    pub endcapstyle: u8,
    pub startcapstyle: u8,
    pub winding: u8,
    pub dash: bool,
    pub tricapwidth: u8,
    pub tricaplength: u8,
}

impl PathStyleType {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        let byte1 = r.read_uint(1)?;
        let joinstyle = (byte1 & 3) as u8;
        let endcapstyle = ((byte1 >> 2) & 3) as u8;
        let startcapstyle = ((byte1 >> 4) & 3) as u8;
        let winding = ((byte1 >> 6) & 1) as u8;
        let dash = ((byte1 >> 7) & 1) != 0;
        let _reserved = r.read_uint(1)?;
        let tricapwidth = r.read_uint(1)? as u8;
        let tricaplength = r.read_uint(1)? as u8;
        Ok(PathStyleType { joinstyle, endcapstyle, startcapstyle, winding, dash, tricapwidth, tricaplength })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PathHeader {
    pub fillcolour: ColourType,
    pub outlinecolour: ColourType,
    pub outlinewidth: u32,
    pub style: PathStyleType,
}

impl PathHeader {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(PathHeader {
            fillcolour: ColourType::read(r)?,
            outlinecolour: ColourType::read(r)?,
            outlinewidth: r.read_u32()?,
            style: PathStyleType::read(r)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextHeader {
    pub colour: ColourType,
    pub bgcolourhint: ColourType,
    pub style: u32,
    pub xsize: u32,
    pub ysize: u32,
    pub baseline: Coords,
}

impl TextHeader {
    pub fn read(r: &mut DrawReader) -> Result<Self> {
        Ok(TextHeader {
            colour: ColourType::read(r)?,
            bgcolourhint: ColourType::read(r)?,
            style: r.read_u32()?,
            xsize: r.read_u32()?,
            ysize: r.read_u32()?,
            baseline: Coords::read(r)?,
        })
    }

    /// Size on disk: two colours + style/xsize/ysize (4 bytes each) + baseline.
    pub const SIZE: u32 = 2 * 4 + 12 + 8;
}

/// A parsed font-table entry: `\Fname\Ealphabet` tags stripped, then the
/// remainder split on `.` into base name and style modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDesc {
    pub originalfullname: String,
    pub originalname: String,
    pub alphabet: String,
    pub name: String,
    pub weight: String,
    pub style: String,
    pub height_pts: f64,
    pub width_pts: f64,
}

impl FontDesc {
    pub fn new(
        raw_name: &str,
        height_pts: f64,
        width_pts: f64,
        font_replacements: &std::collections::HashMap<String, String>,
    ) -> Self {
        let mut originalname_full = raw_name.to_string();
        let mut alphabet = String::new();

        if let Some(idx) = originalname_full.find("\\F") {
            originalname_full = originalname_full[idx + 2..].to_string();
        }
        if let Some(idx) = raw_name.find("\\E") {
            alphabet = raw_name[idx + 2..].to_string();
        }

        let parts: Vec<&str> = originalname_full.split('.').collect();
        let base = parts.first().copied().unwrap_or("");
        let lower_name = base.to_lowercase();

        let name = match font_replacements.get(&lower_name) {
            Some(stack) => stack.clone(),
            None => {
                log::warn!("Unknown font '{base}'");
                format!(
                    "{base}{}",
                    font_replacements.get("_default").map(|s| s.as_str()).unwrap_or("")
                )
            }
        };

        let mut weight = "normal".to_string();
        let mut style = "normal".to_string();
        let sans_serif = lower_name == "swiss" || lower_name == "system";
        let mut final_name = name;

        // System font is hard-coded bold: an intentional BBC-Micro calibration.
        if lower_name == "system" {
            weight = "bold".to_string();
        }

        for part in parts.iter().skip(1) {
            match part.to_lowercase().as_str() {
                "monospaced" => {
                    final_name = if sans_serif {
                        "\"Menlo\",\"Lucida Console\",\"Courier New\",Courier,monospace".to_string()
                    } else {
                        "\"Courier New\",Courier,\"Lucida Console\",monospace".to_string()
                    };
                }
                "italic" | "oblique" => style = "italic".to_string(),
                "bold" => weight = "bold".to_string(),
                _ => {}
            }
        }

        FontDesc {
            originalfullname: originalname_full,
            originalname: base.to_string(),
            alphabet,
            name: final_name,
            weight,
            style,
            height_pts,
            width_pts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn same_tag_and_size_parse_to_equal_font_desc() {
        let mut reps = HashMap::new();
        reps.insert("trinity".to_string(), "Trinity,serif".to_string());
        reps.insert("_default".to_string(), "sans-serif".to_string());
        let a = FontDesc::new("Trinity.Bold", 18.0, 18.0, &reps);
        let b = FontDesc::new("Trinity.Bold", 18.0, 18.0, &reps);
        assert_eq!(a, b);
    }

    #[test]
    fn system_font_is_bold_with_system_stack() {
        let mut reps = HashMap::new();
        reps.insert("system".to_string(), "System,monospace".to_string());
        reps.insert("_default".to_string(), "sans-serif".to_string());
        let fd = FontDesc::new("System", 24.0, 24.0, &reps);
        assert_eq!(fd.weight, "bold");
        assert_eq!(fd.name, "System,monospace");
    }

    #[test]
    fn italic_modifier_sets_style() {
        let mut reps = HashMap::new();
        reps.insert("trinity".to_string(), "Trinity,serif".to_string());
        reps.insert("_default".to_string(), "sans-serif".to_string());
        let fd = FontDesc::new("Trinity.Italic", 12.0, 12.0, &reps);
        assert_eq!(fd.style, "italic");
    }

    #[test]
    fn font_identifier_tags_are_stripped() {
        let mut reps = HashMap::new();
        reps.insert("trinity".to_string(), "Trinity,serif".to_string());
        reps.insert("_default".to_string(), "sans-serif".to_string());
        let fd = FontDesc::new("Trinity.Medium\\ELatin1", 12.0, 12.0, &reps);
        assert_eq!(fd.alphabet, "Latin1");
        assert_eq!(fd.originalname, "Trinity");
    }
}
