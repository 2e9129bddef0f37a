//! Compile-time static data: per-(font, alphabet) byte→Unicode tables, the
//! two-level font lookup built on top of them, and the CSS colour-name table.

#[allow(clippy::all)]
pub mod encoding_tables;
pub mod font_alphabet_map;
pub mod colour_names;

pub use encoding_tables::UND;
