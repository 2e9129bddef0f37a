//! Maps Draw's legacy 8-bit font/alphabet byte streams to UTF-8.

use crate::tables::encoding_tables::{RISCOS_LATIN1_TO_UTF8, UND};
use crate::tables::font_alphabet_map::FONT_ALPHABET_TABLES;

const OVERLINE: &str = "OVERLINE";
const COMBINING_OVERLINE: &str = "\u{0305}";

fn lookup_alphabet_table(font_name: &str, alphabet: &str) -> Option<&'static [&'static str; 256]> {
    let font_name = font_name.to_lowercase();
    let alphabet = alphabet.to_lowercase();
    let dotted_head = font_name.split('.').next().unwrap_or("").to_string();

    let has_key = |k: &str| FONT_ALPHABET_TABLES.iter().any(|(fk, _)| *fk == k);

    let key: String = if has_key(&font_name) {
        font_name
    } else if has_key(&format!("{font_name}*")) {
        format!("{font_name}*")
    } else if has_key(&dotted_head) {
        dotted_head
    } else if has_key(&format!("{dotted_head}*")) {
        format!("{dotted_head}*")
    } else {
        String::new()
    };

    find_key_table(&key, &alphabet)
}

fn find_key_table(key: &str, alphabet: &str) -> Option<&'static [&'static str; 256]> {
    let (_, alphabets) = FONT_ALPHABET_TABLES.iter().find(|(k, _)| *k == key)?;
    alphabets
        .iter()
        .find(|(tag, _)| *tag == alphabet)
        .map(|(_, table)| *table)
}

/// Decodes a byte buffer using the per-(font, alphabet) translation table,
/// handling the overline combining marker, LF, and trailing soft hyphen.
pub fn decode_bytes_to_utf8(bytes: &[u8], font_name: &str, alphabet: &str) -> String {
    let alphabet_lower = alphabet.to_lowercase();
    let table = lookup_alphabet_table(font_name, &alphabet_lower);

    let mut result = String::new();
    let mut append_next: &str = "";

    for &byte in bytes {
        if byte == 10 {
            result.push('\n');
            append_next = "";
            continue;
        }

        let c: &str = match table {
            Some(t) => t[byte as usize],
            None if alphabet_lower == "utf8" => {
                // One Unicode scalar per byte value, matching the source's
                // fallback `[chr(x) for x in range(256)]`.
                result.push(char::from_u32(byte as u32).unwrap_or('\u{fffd}'));
                result.push_str(append_next);
                append_next = "";
                continue;
            }
            None => UND,
        };

        if c == OVERLINE {
            append_next = COMBINING_OVERLINE;
            result.push(' ');
        } else {
            result.push_str(c);
            result.push_str(append_next);
            append_next = "";
        }
    }

    if !append_next.is_empty() {
        result.push(' ');
        result.push_str(append_next);
    }

    if result.ends_with('\u{ad}') {
        result.pop();
        result.push('-');
    }

    result
}

/// Decodes a fixed-width name field (creator string, sprite name) using the
/// default Latin-1 table, matching `Convertor.latin1_to_utf8`.
pub fn latin1_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| RISCOS_LATIN1_TO_UTF8[b as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_round_trips_through_default_table() {
        let decoded = decode_bytes_to_utf8(b"Hi", "", "latin1");
        assert_eq!(decoded, "Hi");
    }

    #[test]
    fn unknown_font_alphabet_yields_undefined_glyphs() {
        let decoded = decode_bytes_to_utf8(&[0x01], "nonexistent.font", "klingon");
        assert_eq!(decoded, UND);
    }

    #[test]
    fn utf8_alphabet_bypasses_tables() {
        let decoded = decode_bytes_to_utf8(b"A", "anything", "utf8");
        assert_eq!(decoded, "A");
    }

    #[test]
    fn line_feed_becomes_newline() {
        let decoded = decode_bytes_to_utf8(&[b'A', 10, b'B'], "", "latin1");
        assert_eq!(decoded, "A\nB");
    }
}
