//! Conversion options, equivalent to the source tool's `Configure` class.

use std::collections::HashMap;

/// Every CLI-controlled knob that affects how a Draw file is converted.
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose_level: u8,
    pub utf8: bool,
    pub use_tspans: bool,
    pub show_debug_index: bool,
    pub show_bounding_boxes: bool,
    pub basic_underlines: bool,
    pub use_bbox: bool,
    pub one_byte_types: bool,
    pub fit_border: Option<String>,
    pub font_replacements: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose_level: 0,
            utf8: false,
            use_tspans: false,
            show_debug_index: false,
            show_bounding_boxes: false,
            basic_underlines: false,
            use_bbox: true,
            one_byte_types: false,
            fit_border: None,
            font_replacements: default_font_replacements(),
        }
    }
}

/// Web-safe font stacks used when no `--fonts` ini file is supplied.
pub fn default_font_replacements() -> HashMap<String, String> {
    let pairs: &[(&str, &str)] = &[
        ("_default", "Arial,Helvetica,Verdana,sans-serif"),
        ("corpus", "Corpus,\"Courier New\",Courier,\"Lucida Console\",monospace"),
        ("homerton", "Homerton,Arial,Helvetica,Verdana,sans-serif"),
        ("newhall", "NewHall,Century,\"Century Schoolbook\",serif"),
        ("swiss", "Swiss,Arial,Helvetica,Verdana,sans-serif"),
        (
            "trinity",
            "Trinity,TimesNewRoman,\"Times New Roman\",Times,Times-Roman,Baskerville,Georgia,serif",
        ),
        ("sassoon", "Sassoon,Lexend,\"Comic Sans MS\",\"Comic Sans\",sans-serif"),
        ("selwyn", "Selwyn,\"Zapf Dingbats\",ZapfDingbats,sans-serif"),
        ("sidney", "Symbol,sans-serif"),
        ("system", "System,VT323,\"Courier New\",Courier,\"Lucida Console\",monospace"),
        ("wimpsymbol", "WimpSymbol,\"Zapf Dingbats\",ZapfDingbats,sans-serif"),
    ];
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_bbox_and_default_fonts() {
        let cfg = Config::default();
        assert!(cfg.use_bbox);
        assert!(cfg.font_replacements.contains_key("_default"));
    }
}
