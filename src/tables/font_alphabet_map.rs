// Generated font-family -> alphabet -> table mapping from draw_to_svg.py `fonts` dict.
use super::encoding_tables::*;

pub static FONT_ALPHABET_TABLES: &[(&str, &[(&str, &[&str; 256])])] = &[
    ("", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &RISCOS_GREEK_TO_UTF8),
    ]),
    ("corpus.medium.oblique", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &CORPUS_MEDIUM_GREEK_TO_UTF8),
    ]),
    ("corpus.medium", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &CORPUS_MEDIUM_GREEK_TO_UTF8),
    ]),
    ("corpus*", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &RISCOS_GREEK_TO_UTF8),
    ]),
    ("homerton*", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &RISCOS_GREEK_TO_UTF8),
    ]),
    ("newhall.medium.italic", &[
        ("", &NEWHALL_TO_UTF8),
        ("latin1", &NEWHALL_TO_UTF8),
        ("latin2", &NEWHALL_LATIN2_TO_UTF8),
        ("latin3", &NEWHALL_LATIN3_TO_UTF8),
        ("latin4", &NEWHALL_LATIN4_TO_UTF8),
        ("latin5", &NEWHALL_LATIN5_TO_UTF8),
        ("latin6", &NEWHALL_LATIN6_TO_UTF8),
        ("latin7", &NEWHALL_LATIN7_TO_UTF8),
        ("latin8", &NEWHALL_LATIN8_TO_UTF8),
        ("latin9", &NEWHALL_LATIN9_WITH_BREVE_TO_UTF8),
        ("latin10", &NEWHALL_LATIN10_TO_UTF8),
        ("welsh", &NEWHALL_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &NEWHALL_GREEK_TO_UTF8),
    ]),
    ("newhall.medium", &[
        ("", &NEWHALL_WITH_BREVE_TO_UTF8),
        ("latin1", &NEWHALL_WITH_BREVE_TO_UTF8),
        ("latin2", &NEWHALL_LATIN2_TO_UTF8),
        ("latin3", &NEWHALL_LATIN3_TO_UTF8),
        ("latin4", &NEWHALL_LATIN4_TO_UTF8),
        ("latin5", &NEWHALL_LATIN5_TO_UTF8),
        ("latin6", &NEWHALL_LATIN6_TO_UTF8),
        ("latin7", &NEWHALL_LATIN7_TO_UTF8),
        ("latin8", &NEWHALL_LATIN8_TO_UTF8),
        ("latin9", &NEWHALL_LATIN9_WITH_BREVE_TO_UTF8),
        ("latin10", &NEWHALL_LATIN10_TO_UTF8),
        ("welsh", &NEWHALL_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &NEWHALL_GREEK_TO_UTF8),
    ]),
    ("newhall*", &[
        ("", &NEWHALL_TO_UTF8),
        ("latin1", &NEWHALL_TO_UTF8),
        ("latin2", &NEWHALL_LATIN2_TO_UTF8),
        ("latin3", &NEWHALL_LATIN3_TO_UTF8),
        ("latin4", &NEWHALL_LATIN4_TO_UTF8),
        ("latin5", &NEWHALL_LATIN5_TO_UTF8),
        ("latin6", &NEWHALL_LATIN6_TO_UTF8),
        ("latin7", &NEWHALL_LATIN7_TO_UTF8),
        ("latin8", &NEWHALL_LATIN8_TO_UTF8),
        ("latin9", &NEWHALL_LATIN9_TO_UTF8),
        ("latin10", &NEWHALL_LATIN10_TO_UTF8),
        ("welsh", &NEWHALL_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &NEWHALL_GREEK_TO_UTF8),
    ]),
    ("sassoon*", &[
        ("", &SASSOON_TO_UTF8),
        ("latin1", &SASSOON_TO_UTF8),
        ("latin2", &SASSOON_LATIN2_TO_UTF8),
        ("latin3", &SASSOON_LATIN3_TO_UTF8),
        ("latin4", &SASSOON_LATIN4_TO_UTF8),
        ("latin5", &SASSOON_LATIN5_TO_UTF8),
        ("latin6", &SASSOON_LATIN6_TO_UTF8),
        ("latin7", &SASSOON_LATIN7_TO_UTF8),
        ("latin8", &SASSOON_LATIN8_TO_UTF8),
        ("latin9", &SASSOON_LATIN9_TO_UTF8),
        ("latin10", &SASSOON_LATIN10_TO_UTF8),
        ("welsh", &SASSOON_WELSH_TO_UTF8),
        ("hebrew", &SASSOON_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &SASSOON_GREEK_TO_UTF8),
    ]),
    ("sidney", &[
        ("", &SIDNEY_TO_UTF8),
        ("latin1", &SIDNEY_LATIN1_TO_UTF8),
        ("latin2", &SIDNEY_LATIN2_TO_UTF8),
        ("latin3", &SIDNEY_LATIN3_TO_UTF8),
        ("latin4", &SIDNEY_LATIN4_TO_UTF8),
        ("latin5", &SIDNEY_LATIN5_TO_UTF8),
        ("latin6", &SIDNEY_LATIN6_TO_UTF8),
        ("latin7", &SIDNEY_LATIN7_TO_UTF8),
        ("latin8", &SIDNEY_LATIN8_TO_UTF8),
        ("latin9", &SIDNEY_LATIN9_TO_UTF8),
        ("latin10", &SIDNEY_LATIN10_TO_UTF8),
        ("welsh", &SIDNEY_WELSH_TO_UTF8),
        ("hebrew", &SIDNEY_HEBREW_TO_UTF8),
        ("cyrillic", &SIDNEY_CYRILLIC_TO_UTF8),
        ("greek", &SIDNEY_GREEK_TO_UTF8),
    ]),
    ("system", &[
        ("", &SYSTEM_TO_UTF8),
        ("latin1", &SYSTEM_TO_UTF8),
        ("latin2", &SYSTEM_TO_UTF8),
        ("latin3", &SYSTEM_TO_UTF8),
        ("latin4", &SYSTEM_TO_UTF8),
        ("latin5", &SYSTEM_TO_UTF8),
        ("latin6", &SYSTEM_TO_UTF8),
        ("latin7", &SYSTEM_TO_UTF8),
        ("latin8", &SYSTEM_TO_UTF8),
        ("latin9", &SYSTEM_TO_UTF8),
        ("latin10", &SYSTEM_TO_UTF8),
        ("welsh", &SYSTEM_TO_UTF8),
        ("hebrew", &SYSTEM_TO_UTF8),
        ("cyrillic", &SYSTEM_TO_UTF8),
        ("greek", &SYSTEM_TO_UTF8),
    ]),
    ("trinity*", &[
        ("", &RISCOS_LATIN1_TO_UTF8),
        ("latin1", &RISCOS_LATIN1_TO_UTF8),
        ("latin2", &RISCOS_LATIN2_TO_UTF8),
        ("latin3", &RISCOS_LATIN3_TO_UTF8),
        ("latin4", &RISCOS_LATIN4_TO_UTF8),
        ("latin5", &RISCOS_LATIN5_TO_UTF8),
        ("latin6", &RISCOS_LATIN6_TO_UTF8),
        ("latin7", &RISCOS_LATIN7_TO_UTF8),
        ("latin8", &RISCOS_LATIN8_TO_UTF8),
        ("latin9", &RISCOS_LATIN9_TO_UTF8),
        ("latin10", &RISCOS_LATIN10_TO_UTF8),
        ("welsh", &RISCOS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &RISCOS_GREEK_TO_UTF8),
    ]),
    ("selwyn", &[
        ("", &SELWYN_TO_UTF8),
    ]),
    ("swiss*", &[
        ("", &SWISS_TO_UTF8),
        ("latin1", &SWISS_LATIN1_TO_UTF8),
        ("latin2", &SWISS_LATIN2_TO_UTF8),
        ("latin3", &SWISS_LATIN3_TO_UTF8),
        ("latin4", &SWISS_LATIN4_TO_UTF8),
        ("latin5", &SWISS_LATIN5_TO_UTF8),
        ("latin6", &SWISS_LATIN6_TO_UTF8),
        ("latin7", &SWISS_LATIN7_TO_UTF8),
        ("latin8", &SWISS_LATIN8_TO_UTF8),
        ("latin9", &SWISS_LATIN9_TO_UTF8),
        ("latin10", &SWISS_LATIN10_TO_UTF8),
        ("welsh", &SWISS_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &SWISS_GREEK_TO_UTF8),
    ]),
    ("system.fixed", &[
        ("", &SYSTEM_FIXED_TO_UTF8),
        ("latin1", &SYSTEM_FIXED_TO_UTF8),
        ("latin2", &SYSTEM_FIXED_LATIN2_TO_UTF8),
        ("latin3", &SYSTEM_FIXED_LATIN3_TO_UTF8),
        ("latin4", &SYSTEM_FIXED_LATIN4_TO_UTF8),
        ("latin5", &SYSTEM_FIXED_LATIN5_TO_UTF8),
        ("latin6", &SYSTEM_FIXED_LATIN6_TO_UTF8),
        ("latin7", &SYSTEM_FIXED_LATIN7_TO_UTF8),
        ("latin8", &SYSTEM_FIXED_LATIN8_TO_UTF8),
        ("latin9", &SYSTEM_FIXED_LATIN9_TO_UTF8),
        ("latin10", &SYSTEM_FIXED_LATIN10_TO_UTF8),
        ("welsh", &SYSTEM_FIXED_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &SYSTEM_FIXED_GREEK_TO_UTF8),
    ]),
    ("system.medium", &[
        ("", &SYSTEM_FIXED_TO_UTF8),
        ("latin1", &SYSTEM_FIXED_TO_UTF8),
        ("latin2", &SYSTEM_FIXED_LATIN2_TO_UTF8),
        ("latin3", &SYSTEM_FIXED_LATIN3_TO_UTF8),
        ("latin4", &SYSTEM_FIXED_LATIN4_TO_UTF8),
        ("latin5", &SYSTEM_FIXED_LATIN5_TO_UTF8),
        ("latin6", &SYSTEM_FIXED_LATIN6_TO_UTF8),
        ("latin7", &SYSTEM_FIXED_LATIN7_TO_UTF8),
        ("latin8", &SYSTEM_FIXED_LATIN8_TO_UTF8),
        ("latin9", &SYSTEM_FIXED_LATIN9_TO_UTF8),
        ("latin10", &SYSTEM_FIXED_LATIN10_TO_UTF8),
        ("welsh", &SYSTEM_FIXED_WELSH_TO_UTF8),
        ("hebrew", &RISCOS_HEBREW_TO_UTF8),
        ("cyrillic", &RISCOS_CYRILLIC_TO_UTF8),
        ("greek", &SYSTEM_FIXED_GREEK_TO_UTF8),
    ]),
    ("wimpsymbol", &[
        ("", &WIMPSYMBOL_TO_UTF8),
    ]),
];
