// Generated from original_source/draw_to_svg/draw_to_svg.py table definitions.
// Do not hand-edit; these are golden fixtures for Acorn font-encoding tables.
pub const UND: &str = "\u{2009}";

pub static CORPUS_MEDIUM_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", "\u{20ac}", UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, "\u{2092}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static CYRILLIC_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{401}", "\u{402}", "\u{403}", "\u{404}", "\u{405}", "\u{406}", "\u{407}",
    "\u{408}", "\u{409}", "\u{40a}", "\u{40b}", "\u{40c}", "\u{ad}", "\u{40e}", "\u{40f}",
    "\u{410}", "\u{411}", "\u{412}", "\u{413}", "\u{414}", "\u{415}", "\u{416}", "\u{417}",
    "\u{418}", "\u{419}", "\u{41a}", "\u{41b}", "\u{41c}", "\u{41d}", "\u{41e}", "\u{41f}",
    "\u{420}", "\u{421}", "\u{422}", "\u{423}", "\u{424}", "\u{425}", "\u{426}", "\u{427}",
    "\u{428}", "\u{429}", "\u{42a}", "\u{42b}", "\u{42c}", "\u{42d}", "\u{42e}", "\u{42f}",
    "\u{430}", "\u{431}", "\u{432}", "\u{433}", "\u{434}", "\u{435}", "\u{436}", "\u{437}",
    "\u{438}", "\u{439}", "\u{43a}", "\u{43b}", "\u{43c}", "\u{43d}", "\u{43e}", "\u{43f}",
    "\u{440}", "\u{441}", "\u{442}", "\u{443}", "\u{444}", "\u{445}", "\u{446}", "\u{447}",
    "\u{448}", "\u{449}", "\u{44a}", "\u{44b}", "\u{44c}", "\u{44d}", "\u{44e}", "\u{44f}",
    "\u{2116}", "\u{451}", "\u{452}", "\u{453}", "\u{454}", "\u{455}", "\u{456}", "\u{457}",
    "\u{458}", "\u{459}", "\u{45a}", "\u{45b}", "\u{45c}", "\u{a7}", "\u{45e}", "\u{45f}",
];

pub static GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", "\u{20ac}", "\u{20af}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{37a}", "\u{ab}", "\u{ac}", "\u{ad}", UND, "\u{2015}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{384}", "\u{385}", "\u{386}", "\u{b7}",
    "\u{388}", "\u{389}", "\u{38a}", "\u{bb}", "\u{38c}", "\u{bd}", "\u{38e}", "\u{38f}",
    "\u{390}", "\u{391}", "\u{392}", "\u{393}", "\u{394}", "\u{395}", "\u{396}", "\u{397}",
    "\u{398}", "\u{399}", "\u{39a}", "\u{39b}", "\u{39c}", "\u{39d}", "\u{39e}", "\u{39f}",
    "\u{3a0}", "\u{3a1}", UND, "\u{3a3}", "\u{3a4}", "\u{3a5}", "\u{3a6}", "\u{3a7}",
    "\u{3a8}", "\u{3a9}", "\u{3aa}", "\u{3ab}", "\u{3ac}", "\u{3ad}", "\u{3ae}", "\u{3af}",
    "\u{3b0}", "\u{3b1}", "\u{3b2}", "\u{3b3}", "\u{3b4}", "\u{3b5}", "\u{3b6}", "\u{3b7}",
    "\u{3b8}", "\u{3b9}", "\u{3ba}", "\u{3bb}", "\u{3bc}", "\u{3bd}", "\u{3be}", "\u{3bf}",
    "\u{3c0}", "\u{3c1}", "\u{3c2}", "\u{3c3}", "\u{3c4}", "\u{3c5}", "\u{3c6}", "\u{3c7}",
    "\u{3c8}", "\u{3c9}", "\u{3ca}", "\u{3cb}", "\u{3cc}", "\u{3cd}", "\u{3ce}", UND,
];

pub static HEBREW_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{d7}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{f7}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2017}",
    "\u{5d0}", "\u{5d1}", "\u{5d2}", "\u{5d3}", "\u{5d4}", "\u{5d5}", "\u{5d6}", "\u{5d7}",
    "\u{5d8}", "\u{5d9}", "\u{5da}", "\u{5db}", "\u{5dc}", "\u{5dd}", "\u{5de}", "\u{5df}",
    "\u{5e0}", "\u{5e1}", "\u{5e2}", "\u{5e3}", "\u{5e4}", "\u{5e5}", "\u{5e6}", "\u{5e7}",
    "\u{5e8}", "\u{5e9}", "\u{5ea}", UND, UND, "\u{200e}", "\u{200f}", UND,
];

pub static LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{104}", "\u{105}", "\u{141}", "\u{20ac}", "\u{201e}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", "\u{218}", "\u{ab}", "\u{179}", "\u{ad}", "\u{17a}", "\u{17b}",
    "\u{b0}", "\u{b1}", "\u{10c}", "\u{142}", "\u{17d}", "\u{201d}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{10d}", "\u{219}", "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{106}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{110}", "\u{143}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{15a}",
    "\u{170}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{118}", "\u{21a}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{107}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{111}", "\u{144}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{15b}",
    "\u{171}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{119}", "\u{21b}", "\u{ff}",
];

pub static LATIN1_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{104}", "\u{2d8}", "\u{141}", "\u{a4}", "\u{13d}", "\u{15a}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{15e}", "\u{164}", "\u{179}", "\u{ad}", "\u{17d}", "\u{17b}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{142}", "\u{b4}", "\u{13e}", "\u{15b}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{15f}", "\u{165}", "\u{17a}", "\u{2dd}", "\u{17e}", "\u{17c}",
    "\u{154}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{139}", "\u{106}", "\u{c7}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{11a}", "\u{cd}", "\u{ce}", "\u{10e}",
    "\u{110}", "\u{143}", "\u{147}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{d7}",
    "\u{158}", "\u{16e}", "\u{da}", "\u{170}", "\u{dc}", "\u{dd}", "\u{162}", "\u{df}",
    "\u{155}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{13a}", "\u{107}", "\u{e7}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{11b}", "\u{ed}", "\u{ee}", "\u{10f}",
    "\u{111}", "\u{144}", "\u{148}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{f7}",
    "\u{159}", "\u{16f}", "\u{fa}", "\u{171}", "\u{fc}", "\u{fd}", "\u{163}", "\u{2d9}",
];

pub static LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{126}", "\u{2d8}", "\u{a3}", "\u{a4}", UND, "\u{124}", "\u{a7}",
    "\u{a8}", "\u{130}", "\u{15e}", "\u{11e}", "\u{134}", "\u{ad}", UND, "\u{17b}",
    "\u{b0}", "\u{127}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{125}", "\u{b7}",
    "\u{b8}", "\u{131}", "\u{15f}", "\u{11f}", "\u{135}", "\u{bd}", UND, "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", "\u{10a}", "\u{108}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{120}", "\u{d6}", "\u{d7}",
    "\u{11c}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{16c}", "\u{15c}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", "\u{10b}", "\u{109}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{121}", "\u{f6}", "\u{f7}",
    "\u{11d}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{16d}", "\u{15d}", "\u{2d9}",
];

pub static LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{104}", "\u{138}", "\u{156}", "\u{a4}", "\u{128}", "\u{13b}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{112}", "\u{122}", "\u{166}", "\u{ad}", "\u{17d}", "\u{af}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{157}", "\u{b4}", "\u{129}", "\u{13c}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{113}", "\u{123}", "\u{167}", "\u{14a}", "\u{17e}", "\u{14b}",
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{12a}",
    "\u{110}", "\u{145}", "\u{14c}", "\u{136}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{168}", "\u{16a}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{12b}",
    "\u{111}", "\u{146}", "\u{14d}", "\u{137}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{169}", "\u{16b}", "\u{2d9}",
];

pub static LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{11e}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{130}", "\u{15e}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{11f}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{131}", "\u{15f}", "\u{ff}",
];

pub static LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{104}", "\u{112}", "\u{122}", "\u{12a}", "\u{128}", "\u{136}", "\u{a7}",
    "\u{13b}", "\u{110}", "\u{160}", "\u{166}", "\u{17d}", "\u{ad}", "\u{16a}", "\u{14a}",
    "\u{b0}", "\u{105}", "\u{113}", "\u{123}", "\u{12b}", "\u{129}", "\u{137}", "\u{b7}",
    "\u{13c}", "\u{111}", "\u{161}", "\u{167}", "\u{17e}", "\u{2015}", "\u{16b}", "\u{14b}",
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{145}", "\u{14c}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{168}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{146}", "\u{14d}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{169}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{138}",
];

pub static LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", "\u{156}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", "\u{157}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    "\u{104}", "\u{12e}", "\u{100}", "\u{106}", "\u{c4}", "\u{c5}", "\u{118}", "\u{112}",
    "\u{10c}", "\u{c9}", "\u{179}", "\u{116}", "\u{122}", "\u{136}", "\u{12a}", "\u{13b}",
    "\u{160}", "\u{143}", "\u{145}", "\u{d3}", "\u{14c}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{172}", "\u{141}", "\u{15a}", "\u{16a}", "\u{dc}", "\u{17b}", "\u{17d}", "\u{df}",
    "\u{105}", "\u{12f}", "\u{101}", "\u{107}", "\u{e4}", "\u{e5}", "\u{119}", "\u{113}",
    "\u{10d}", "\u{e9}", "\u{17a}", "\u{117}", "\u{123}", "\u{137}", "\u{12b}", "\u{13c}",
    "\u{161}", "\u{144}", "\u{146}", "\u{f3}", "\u{14d}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{173}", "\u{142}", "\u{15b}", "\u{16b}", "\u{fc}", "\u{17c}", "\u{17e}", "\u{2019}",
];

pub static LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{1e02}", "\u{1e03}", "\u{a3}", "\u{10a}", "\u{10b}", "\u{1e0a}", "\u{a7}",
    "\u{1e80}", "\u{a9}", "\u{1e82}", "\u{1e0b}", "\u{1ef2}", "\u{ad}", "\u{ae}", "\u{178}",
    "\u{1e1e}", "\u{1e1f}", "\u{120}", "\u{121}", "\u{1e40}", "\u{1e41}", "\u{b6}", "\u{1e56}",
    "\u{1e81}", "\u{1e57}", "\u{1e83}", "\u{1e60}", "\u{1ef3}", "\u{1e84}", "\u{1e85}", "\u{1e61}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{1e6a}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{1e6b}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{20ac}", "\u{a5}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{17d}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static NEWHALL_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", UND, UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static NEWHALL_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, "\u{201e}", UND, "\u{a7}",
    UND, "\u{a9}", UND, "\u{ab}", UND, "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{201d}", "\u{b6}", "\u{b7}",
    UND, UND, UND, "\u{bb}", "\u{152}", "\u{153}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, UND, "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", UND,
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, UND, "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", UND,
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, "\u{ff}",
];

pub static NEWHALL_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, UND,
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, UND, "\u{da}", UND, "\u{dc}", "\u{dd}", UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, UND, "\u{fa}", UND, "\u{fc}", "\u{fd}", UND, UND,
];

pub static NEWHALL_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", UND, "\u{b7}",
    "\u{b8}", UND, UND, UND, UND, "\u{bd}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static NEWHALL_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, "\u{af}",
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, UND,
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, UND, "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, UND, "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static NEWHALL_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, "\u{ff}",
];

pub static NEWHALL_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    UND, "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, UND, UND, "\u{a7}",
    UND, UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, "\u{b7}",
    UND, UND, UND, UND, UND, "\u{2015}", UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", UND, UND, "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", UND, UND, "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", UND,
];

pub static NEWHALL_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", UND, "\u{2039}", "\u{203a}", UND, UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", UND, "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    UND, UND, UND, UND, "\u{c4}", "\u{c5}", UND, UND,
    UND, "\u{c9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{d3}", UND, "\u{d5}", "\u{d6}", "\u{d7}",
    UND, UND, UND, UND, "\u{dc}", UND, UND, "\u{df}",
    UND, UND, UND, UND, "\u{e4}", "\u{e5}", UND, UND,
    UND, "\u{e9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{f3}", UND, "\u{f5}", "\u{f6}", "\u{f7}",
    UND, UND, UND, UND, "\u{fc}", UND, UND, "\u{2019}",
];

pub static NEWHALL_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", UND, UND, UND, "\u{a7}",
    UND, "\u{a9}", UND, UND, UND, "\u{ad}", "\u{ae}", UND,
    UND, UND, UND, UND, UND, UND, "\u{b6}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", UND, "\u{ff}",
];

pub static NEWHALL_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", UND, "\u{a5}", UND, "\u{a7}",
    UND, "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static NEWHALL_LATIN9_WITH_BREVE_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{2d8}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", UND, "\u{a5}", UND, "\u{a7}",
    UND, "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static NEWHALL_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static NEWHALL_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    UND, "\u{a9}", UND, "\u{ab}", UND, "\u{ad}", "\u{ae}", UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", UND, "\u{bb}", UND, UND, UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", UND, "\u{ff}",
];

pub static NEWHALL_WITH_BREVE_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{2d8}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static RISCOS_CYRILLIC_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, "\u{2d}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, "\u{a7}", UND, UND,
];

pub static RISCOS_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", "\u{20ac}", UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static RISCOS_HEBREW_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{d7}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{f7}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static RISCOS_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{105}", "\u{141}", "\u{20ac}", "\u{201e}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", "\u{218}", "\u{ab}", "\u{179}", "\u{ad}", "\u{17a}", "\u{17b}",
    "\u{b0}", "\u{b1}", "\u{10c}", "\u{142}", "\u{17d}", "\u{201d}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{10d}", "\u{219}", "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{106}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{110}", "\u{143}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{15a}",
    "\u{170}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{118}", "\u{21a}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{107}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{111}", "\u{144}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{15b}",
    "\u{171}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{119}", "\u{21b}", "\u{ff}",
];

pub static RISCOS_LATIN1_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static RISCOS_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{2d8}", "\u{141}", "\u{a4}", "\u{13d}", "\u{15a}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{15e}", "\u{164}", "\u{179}", "\u{ad}", "\u{17d}", "\u{17b}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{142}", "\u{b4}", "\u{13e}", "\u{15b}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{15f}", "\u{165}", "\u{17a}", "\u{2dd}", "\u{17e}", "\u{17c}",
    "\u{154}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{139}", "\u{106}", "\u{c7}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{11a}", "\u{cd}", "\u{ce}", "\u{10e}",
    "\u{110}", "\u{143}", "\u{147}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{d7}",
    "\u{158}", "\u{16e}", "\u{da}", "\u{170}", "\u{dc}", "\u{dd}", "\u{162}", "\u{df}",
    "\u{155}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{13a}", "\u{107}", "\u{e7}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{11b}", "\u{ed}", "\u{ee}", "\u{10f}",
    "\u{111}", "\u{144}", "\u{148}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{f7}",
    "\u{159}", "\u{16f}", "\u{fa}", "\u{171}", "\u{fc}", "\u{fd}", "\u{163}", "\u{2d9}",
];

pub static RISCOS_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{126}", "\u{2d8}", "\u{a3}", "\u{a4}", UND, "\u{124}", "\u{a7}",
    "\u{a8}", "\u{130}", "\u{15e}", "\u{11e}", "\u{134}", "\u{ad}", UND, "\u{17b}",
    "\u{b0}", "\u{127}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{125}", "\u{b7}",
    "\u{b8}", "\u{131}", "\u{15f}", "\u{11f}", "\u{135}", "\u{bd}", UND, "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", "\u{10a}", "\u{108}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{120}", "\u{d6}", "\u{d7}",
    "\u{11c}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{16c}", "\u{15c}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", "\u{10b}", "\u{109}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{121}", "\u{f6}", "\u{f7}",
    "\u{11d}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{16d}", "\u{15d}", "\u{2d9}",
];

pub static RISCOS_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{138}", "\u{156}", "\u{a4}", "\u{128}", "\u{13b}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{112}", "\u{122}", "\u{166}", "\u{ad}", "\u{17d}", "\u{af}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{157}", "\u{b4}", "\u{129}", "\u{13c}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{113}", "\u{123}", "\u{167}", "\u{14a}", "\u{17e}", "\u{14b}",
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{12a}",
    "\u{110}", "\u{145}", "\u{14c}", "\u{136}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{168}", "\u{16a}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{12b}",
    "\u{111}", "\u{146}", "\u{14d}", "\u{137}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{169}", "\u{16b}", "\u{2d9}",
];

pub static RISCOS_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{11e}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{130}", "\u{15e}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{11f}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{131}", "\u{15f}", "\u{ff}",
];

pub static RISCOS_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    UND, "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{112}", "\u{122}", "\u{12a}", "\u{128}", "\u{136}", "\u{a7}",
    "\u{13b}", "\u{110}", "\u{160}", "\u{166}", "\u{17d}", "\u{ad}", "\u{16a}", "\u{14a}",
    "\u{b0}", "\u{105}", "\u{113}", "\u{123}", "\u{12b}", "\u{129}", "\u{137}", "\u{b7}",
    "\u{13c}", "\u{111}", "\u{161}", "\u{167}", "\u{17e}", "\u{2015}", "\u{16b}", "\u{14b}",
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{145}", "\u{14c}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{168}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{146}", "\u{14d}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{169}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{138}",
];

pub static RISCOS_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", UND, "\u{2039}", "\u{203a}", UND, UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", "\u{156}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", "\u{157}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    "\u{104}", "\u{12e}", "\u{100}", "\u{106}", "\u{c4}", "\u{c5}", "\u{118}", "\u{112}",
    "\u{10c}", "\u{c9}", "\u{179}", "\u{116}", "\u{122}", "\u{136}", "\u{12a}", "\u{13b}",
    "\u{160}", "\u{143}", "\u{145}", "\u{d3}", "\u{14c}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{172}", "\u{141}", "\u{15a}", "\u{16a}", "\u{dc}", "\u{17b}", "\u{17d}", "\u{df}",
    "\u{105}", "\u{12f}", "\u{101}", "\u{107}", "\u{e4}", "\u{e5}", "\u{119}", "\u{113}",
    "\u{10d}", "\u{e9}", "\u{17a}", "\u{117}", "\u{123}", "\u{137}", "\u{12b}", "\u{13c}",
    "\u{161}", "\u{144}", "\u{146}", "\u{f3}", "\u{14d}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{173}", "\u{142}", "\u{15b}", "\u{16b}", "\u{fc}", "\u{17c}", "\u{17e}", "\u{2019}",
];

pub static RISCOS_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{1e02}", "\u{1e03}", "\u{a3}", "\u{10a}", "\u{10b}", "\u{1e0a}", "\u{a7}",
    "\u{1e80}", "\u{a9}", "\u{1e82}", "\u{1e0b}", "\u{1ef2}", "\u{ad}", "\u{ae}", "\u{178}",
    "\u{1e1e}", "\u{1e1f}", "\u{120}", "\u{121}", "\u{1e40}", "\u{1e41}", "\u{b6}", "\u{1e56}",
    "\u{1e81}", "\u{1e57}", "\u{1e83}", "\u{1e60}", "\u{1ef3}", "\u{1e84}", "\u{1e85}", "\u{1e61}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{1e6a}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{1e6b}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static RISCOS_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{20ac}", "\u{a5}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{17d}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static RISCOS_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{1e80}", "\u{a9}", "\u{1e82}", "\u{ab}", "\u{1ef2}", "\u{ad}", "\u{ae}", "\u{178}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{1e81}", "\u{b9}", "\u{1e83}", "\u{bb}", "\u{1ef3}", "\u{1e84}", "\u{1e85}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static SASSOON_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", UND, UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SASSOON_HEBREW_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{d7}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{1d07}\u{a730}\u{a730}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{f7}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SASSOON_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{105}", "\u{141}", UND, "\u{201e}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", UND, "\u{ab}", "\u{179}", "\u{ad}", "\u{17a}", "\u{17b}",
    "\u{b0}", "\u{b1}", "\u{10c}", "\u{142}", "\u{17d}", "\u{201d}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{10d}", UND, "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{106}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{143}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{15a}",
    "\u{170}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{118}", UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{107}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{111}", "\u{144}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{15b}",
    "\u{171}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{119}", UND, "\u{ff}",
];

pub static SASSOON_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{2d8}", "\u{141}", "\u{a4}", "\u{13d}", "\u{15a}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{15e}", "\u{164}", "\u{179}", "\u{ad}", "\u{17d}", "\u{17b}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{142}", "\u{b4}", "\u{13e}", "\u{15b}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{15f}", "\u{165}", "\u{17a}", "\u{2dd}", "\u{17e}", "\u{17c}",
    "\u{154}", "\u{c1}", "\u{c2}", "\u{102}", "\u{c4}", "\u{139}", "\u{106}", "\u{c7}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{11a}", "\u{cd}", "\u{ce}", "\u{10e}",
    UND, "\u{143}", "\u{147}", "\u{d3}", "\u{d4}", "\u{150}", "\u{d6}", "\u{d7}",
    "\u{158}", "\u{16e}", "\u{da}", "\u{170}", "\u{dc}", "\u{dd}", "\u{162}", "\u{df}",
    "\u{155}", "\u{e1}", "\u{e2}", "\u{103}", "\u{e4}", "\u{13a}", "\u{107}", "\u{e7}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{11b}", "\u{ed}", "\u{ee}", "\u{10f}",
    "\u{111}", "\u{144}", "\u{148}", "\u{f3}", "\u{f4}", "\u{151}", "\u{f6}", "\u{f7}",
    "\u{159}", "\u{16f}", "\u{fa}", "\u{171}", "\u{fc}", "\u{fd}", "\u{163}", "\u{2d9}",
];

pub static SASSOON_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{126}", "\u{2d8}", "\u{a3}", "\u{a4}", UND, "\u{124}", "\u{a7}",
    "\u{a8}", "\u{130}", "\u{15e}", "\u{11e}", "\u{134}", "\u{ad}", UND, "\u{17b}",
    "\u{b0}", "\u{127}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{125}", "\u{b7}",
    "\u{b8}", "\u{131}", "\u{15f}", "\u{11f}", "\u{135}", "\u{bd}", UND, "\u{17c}",
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", "\u{10a}", "\u{108}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{120}", "\u{d6}", "\u{d7}",
    "\u{11c}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{16c}", "\u{15c}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", "\u{10b}", "\u{109}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{121}", "\u{f6}", "\u{f7}",
    "\u{11d}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{16d}", "\u{15d}", "\u{2d9}",
];

pub static SASSOON_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{138}", "\u{156}", "\u{a4}", "\u{128}", "\u{13b}", "\u{a7}",
    "\u{a8}", "\u{160}", "\u{112}", "\u{122}", "\u{166}", "\u{ad}", "\u{17d}", "\u{af}",
    "\u{b0}", "\u{105}", "\u{2db}", "\u{157}", "\u{b4}", "\u{129}", "\u{13c}", "\u{2c7}",
    "\u{b8}", "\u{161}", "\u{113}", "\u{123}", "\u{167}", UND, "\u{17e}", UND,
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{12a}",
    UND, "\u{145}", "\u{14c}", "\u{136}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{168}", "\u{16a}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{12b}",
    "\u{111}", "\u{146}", "\u{14d}", "\u{137}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{169}", "\u{16b}", "\u{2d9}",
];

pub static SASSOON_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{11e}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{130}", "\u{15e}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{11f}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{131}", "\u{15f}", "\u{ff}",
];

pub static SASSOON_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    UND, "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{104}", "\u{112}", "\u{122}", "\u{12a}", "\u{128}", "\u{136}", "\u{a7}",
    "\u{13b}", UND, "\u{160}", "\u{166}", "\u{17d}", "\u{ad}", "\u{16a}", UND,
    "\u{b0}", "\u{105}", "\u{113}", "\u{123}", "\u{12b}", "\u{129}", "\u{137}", "\u{b7}",
    "\u{13c}", "\u{111}", "\u{161}", "\u{167}", "\u{17e}", "\u{2015}", "\u{16b}", UND,
    "\u{100}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{12e}",
    "\u{10c}", "\u{c9}", "\u{118}", "\u{cb}", "\u{116}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{145}", "\u{14c}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{168}",
    "\u{d8}", "\u{172}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{101}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{12f}",
    "\u{10d}", "\u{e9}", "\u{119}", "\u{eb}", "\u{117}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{146}", "\u{14d}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{169}",
    "\u{f8}", "\u{173}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{138}",
];

pub static SASSOON_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", UND, "\u{2039}", "\u{203a}", UND, UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", "\u{156}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", "\u{157}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    "\u{104}", "\u{12e}", "\u{100}", "\u{106}", "\u{c4}", "\u{c5}", "\u{118}", "\u{112}",
    "\u{10c}", "\u{c9}", "\u{179}", "\u{116}", "\u{122}", "\u{136}", "\u{12a}", "\u{13b}",
    "\u{160}", "\u{143}", "\u{145}", "\u{d3}", "\u{14c}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{172}", "\u{141}", "\u{15a}", "\u{16a}", "\u{dc}", "\u{17b}", "\u{17d}", "\u{df}",
    "\u{105}", "\u{12f}", "\u{101}", "\u{107}", "\u{e4}", "\u{e5}", "\u{119}", "\u{113}",
    "\u{10d}", "\u{e9}", "\u{17a}", "\u{117}", "\u{123}", "\u{137}", "\u{12b}", "\u{13c}",
    "\u{161}", "\u{144}", "\u{146}", "\u{f3}", "\u{14d}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{173}", "\u{142}", "\u{15b}", "\u{16b}", "\u{fc}", "\u{17c}", "\u{17e}", "\u{2019}",
];

pub static SASSOON_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    UND, UND, UND, "\u{a3}", "\u{10a}", "\u{10b}", UND, "\u{a7}",
    UND, "\u{a9}", "\u{1e82}", UND, "\u{1ef2}", "\u{ad}", "\u{ae}", "\u{178}",
    UND, UND, "\u{120}", "\u{121}", UND, UND, "\u{b6}", UND,
    UND, UND, "\u{1e83}", UND, "\u{1ef3}", UND, UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static SASSOON_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", UND, "\u{a5}", "\u{160}", "\u{a7}",
    "\u{161}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{17d}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{17e}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", "\u{178}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SASSOON_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SASSOON_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{26}",
    "\u{71}", "\u{47}", "\u{49}", "\u{4a}", "\u{2026}", "\u{2122}", "\u{1d453}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{34}", "\u{6b}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    UND, "\u{a9}", "\u{1e82}", "\u{ab}", "\u{1ebc}", "\u{ad}", "\u{ae}", "\u{178}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{1e83}", "\u{bb}", "\u{1ebd}", UND, UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static SELWYN_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2701}", "\u{2702}", "\u{2703}", "\u{2704}", "\u{2741}", "\u{2706}", "\u{2707}",
    "\u{2708}", "\u{2709}", "\u{261b}", "\u{261e}", "\u{270c}", "\u{270d}", "\u{270e}", "\u{270f}",
    "\u{2710}", "\u{2711}", "\u{2712}", "\u{2713}", "\u{2742}", "\u{2715}", "\u{2716}", "\u{2717}",
    "\u{2743}", "\u{2719}", "\u{271a}", "\u{271b}", "\u{271c}", "\u{271d}", "\u{271e}", "\u{271f}",
    "\u{2720}", "\u{2721}", "\u{2722}", "\u{2723}", "\u{2724}", "\u{2725}", "\u{2726}", "\u{2727}",
    "\u{2745}", "\u{2729}", "\u{272a}", "\u{272b}", "\u{272c}", "\u{272d}", "\u{272e}", "\u{272f}",
    "\u{2730}", "\u{2731}", "\u{2732}", "\u{2733}", "\u{2734}", "\u{2735}", "\u{2736}", "\u{2737}",
    "\u{2738}", "\u{2739}", "\u{273a}", "\u{273b}", "\u{273c}", "\u{2746}", "\u{273e}", "\u{273f}",
    "\u{2740}", "\u{260e}", "\u{2714}", "\u{2718}", "\u{2744}", "\u{2605}", "\u{273b}", "\u{2750}",
    "\u{2751}", "\u{2752}", "\u{25c6}", "\u{27a7}", "\u{25cf}", "\u{274d}", "\u{25a0}", "\u{274f}",
    "\u{2747}", "\u{2748}", "\u{2749}", "\u{25b2}", "\u{25bc}", "\u{274a}", "\u{2756}", "\u{25d7}",
    "\u{2758}", "\u{2759}", "\u{275a}", "\u{275b}", "\u{275c}", "\u{275d}", "\u{275e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, "\u{276c}", "\u{2771}", "\u{2770}", "\u{276a}", "\u{2768}", "\u{2773}",
    "\u{276e}", "\u{276f}", "\u{2772}", "\u{276d}", "\u{2769}", "\u{276b}", "\u{2774}", "\u{2775}",
    "\u{a0}", "\u{2761}", "\u{2762}", "\u{2763}", "\u{2764}", "\u{2765}", "\u{2766}", "\u{2767}",
    "\u{2663}", "\u{2666}", "\u{2665}", "\u{2660}", "\u{2460}", "\u{2461}", "\u{2462}", "\u{2463}",
    "\u{2464}", "\u{2465}", "\u{2466}", "\u{2467}", "\u{2468}", "\u{2469}", "\u{2776}", "\u{2777}",
    "\u{2778}", "\u{2779}", "\u{277a}", "\u{277b}", "\u{277c}", "\u{277d}", "\u{277e}", "\u{277f}",
    "\u{2780}", "\u{2781}", "\u{2782}", "\u{2783}", "\u{2784}", "\u{2785}", "\u{2786}", "\u{2787}",
    "\u{2788}", "\u{2789}", "\u{278a}", "\u{278b}", "\u{278c}", "\u{278d}", "\u{278e}", "\u{278f}",
    "\u{2790}", "\u{2791}", "\u{2792}", "\u{2793}", "\u{279e}", "\u{2192}", "\u{2194}", "\u{2195}",
    "\u{2798}", "\u{2799}", "\u{279a}", "\u{279b}", "\u{279c}", "\u{279d}", "\u{279e}", "\u{279f}",
    "\u{27a0}", "\u{27a1}", "\u{27a2}", "\u{27a3}", "\u{27a4}", "\u{27a5}", "\u{27a6}", "\u{274a}",
    "\u{27a8}", "\u{27a9}", "\u{27aa}", "\u{27ab}", "\u{27ac}", "\u{27ad}", "\u{27ae}", "\u{27af}",
    UND, "\u{27b1}", "\u{27b2}", "\u{27b3}", "\u{27b4}", "\u{27b5}", "\u{27b6}", "\u{27b7}",
    "\u{27b8}", "\u{27b9}", "\u{27ba}", "\u{27bb}", "\u{27bc}", "\u{27bd}", "\u{27be}", UND,
];

pub static SIDNEY_CYRILLIC_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, "\u{20ac}", UND, UND, UND,
    UND, UND, UND, UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{391}", "\u{392}", "\u{393}", "\u{394}", "\u{395}", "\u{396}", "\u{397}",
    "\u{398}", "\u{399}", "\u{39a}", "\u{39b}", "\u{39c}", "\u{39d}", "\u{39e}", "\u{39f}",
    "\u{1d28}", "\u{3a1}", UND, "\u{3a3}", "\u{3a4}", "\u{3a5}", "\u{3a6}", "\u{3a7}",
    "\u{3a8}", "\u{3a9}", UND, UND, UND, UND, UND, UND,
    UND, "\u{3b1}", "\u{3b2}", "\u{3b3}", "\u{3b4}", "\u{3b5}", "\u{3b6}", "\u{3b7}",
    "\u{3b8}", "\u{3b9}", "\u{3ba}", "\u{3bb}", "\u{3bc}", "\u{3bd}", "\u{3be}", "\u{3bf}",
    "\u{3c0}", "\u{3c1}", "\u{3c2}", "\u{3c3}", "\u{3c4}", "\u{3c5}", "\u{3c6}", "\u{3c7}",
    "\u{3c8}", "\u{3c9}", UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_HEBREW_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, "\u{d7}", UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{b5}", UND, UND,
    UND, UND, "\u{f7}", UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, "\u{20ac}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN1_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", UND, UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, "\u{20ac}", UND, UND, UND,
    UND, UND, UND, UND, "\u{ac}", UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SIDNEY_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{2200}", "\u{23}", "\u{2203}", "\u{25}", "\u{26}", "\u{220b}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{2245}", "\u{391}", "\u{392}", "\u{3a7}", "\u{394}", "\u{395}", "\u{3a6}", "\u{393}",
    "\u{397}", "\u{399}", "\u{3d1}", "\u{39a}", "\u{39b}", "\u{39c}", "\u{39d}", "\u{39f}",
    "\u{1d28}", "\u{398}", "\u{3a1}", "\u{3a3}", "\u{3a4}", "\u{3a5}", "\u{3c2}", "\u{3a9}",
    "\u{39e}", "\u{3a8}", "\u{396}", "\u{5b}", "\u{2234}", "\u{5d}", "\u{22a5}", "\u{5f}",
    "\u{4f}\u{56}\u{45}\u{52}\u{4c}\u{49}\u{4e}\u{45}", "\u{3b1}", "\u{3b2}", "\u{3c7}", "\u{3b4}", "\u{3b5}", "\u{3d5}", "\u{3b3}",
    "\u{3b7}", "\u{3b9}", "\u{3c6}", "\u{3ba}", "\u{3bb}", "\u{3bc}", "\u{3bd}", "\u{3bf}",
    "\u{3c0}", "\u{3b8}", "\u{3f1}", "\u{3c3}", "\u{3c4}", "\u{3c5}", "\u{3d6}", "\u{3c9}",
    "\u{3be}", "\u{3c8}", "\u{3b6}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{3d2}", "\u{2032}", "\u{2264}", "\u{2215}", "\u{221e}", "\u{2a0d}", "\u{2663}",
    "\u{2666}", "\u{2665}", "\u{2660}", "\u{2194}", "\u{2190}", "\u{2191}", "\u{2192}", "\u{2193}",
    "\u{b0}", "\u{b1}", "\u{2033}", "\u{2265}", "\u{d7}", "\u{221d}", "\u{2202}", "\u{2981}",
    "\u{f7}", "\u{2260}", "\u{2263}", "\u{2248}", "\u{2026}", "\u{23d0}", "\u{23af}", "\u{21b2}",
    "\u{2135}", "\u{1d50d}", "\u{211c}", "\u{1d513}", "\u{2297}", "\u{2295}", "\u{2298}", "\u{22c2}",
    "\u{22c3}", "\u{2283}", "\u{2287}", "\u{2284}", "\u{2282}", "\u{2286}", "\u{2208}", "\u{2209}",
    "\u{2220}", "\u{2207}", "\u{ae}", "\u{a9}", "\u{2122}", "\u{3a0}", "\u{23b7}", "\u{2e}",
    "\u{ac}", "\u{2227}", "\u{2228}", "\u{21d4}", "\u{21d0}", "\u{21d1}", "\u{21d2}", "\u{21d3}",
    "\u{25c7}", "\u{27e8}", "\u{ae}", "\u{a9}", "\u{2122}", "\u{3a3}", "\u{239b}", "\u{239c}",
    "\u{239d}", "\u{23a1}", "\u{23a2}", "\u{23a3}", "\u{23a7}", "\u{23a8}", "\u{23a9}", "\u{23aa}",
    "\u{20ac}", "\u{27e9}", "\u{222b}", "\u{2320}", "\u{23ae}", "\u{2321}", "\u{239e}", "\u{239f}",
    "\u{23a0}", "\u{23a4}", "\u{23a5}", "\u{23a6}", "\u{23ab}", "\u{23ac}", "\u{23ad}", UND,
];

pub static SIDNEY_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{21}", UND, "\u{23}", UND, "\u{25}", "\u{26}", UND,
    "\u{28}", "\u{29}", UND, "\u{2b}", "\u{2c}", UND, "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{5b}", UND, "\u{5d}", UND, "\u{5f}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{7b}", "\u{7c}", "\u{7d}", UND, UND,
    "\u{20ac}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", UND, UND, "\u{2022}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{2212}", UND, UND, UND, UND, UND, UND,
    "\u{a0}", UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{3bc}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{d7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, "\u{f7}",
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SWISS_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", UND, UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SWISS_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, "\u{201e}", UND, "\u{a7}",
    UND, "\u{a9}", UND, "\u{ab}", UND, "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{201d}", "\u{b6}", "\u{b7}",
    UND, UND, UND, "\u{bb}", "\u{152}", "\u{153}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, UND, "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", UND,
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, UND, "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", UND,
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, "\u{ff}",
];

pub static SWISS_LATIN1_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SWISS_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, "\u{2c7}",
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, UND, "\u{da}", UND, "\u{dc}", "\u{dd}", UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, UND, "\u{fa}", UND, "\u{fc}", "\u{fd}", UND, UND,
];

pub static SWISS_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", UND, "\u{b7}",
    "\u{b8}", "\u{131}", UND, UND, UND, "\u{bd}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static SWISS_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, "\u{af}",
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, "\u{2c7}",
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, UND, "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, UND, "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static SWISS_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{131}", UND, "\u{ff}",
];

pub static SWISS_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    UND, "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, UND, UND, "\u{a7}",
    UND, UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, "\u{b7}",
    UND, UND, UND, UND, UND, "\u{2015}", UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", UND, UND, "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", UND, UND, "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", UND,
];

pub static SWISS_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", UND, "\u{2039}", "\u{203a}", UND, UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", UND, "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    UND, UND, UND, UND, "\u{c4}", "\u{c5}", UND, UND,
    UND, "\u{c9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{d3}", UND, "\u{d5}", "\u{d6}", "\u{d7}",
    UND, UND, UND, UND, "\u{dc}", UND, UND, "\u{df}",
    UND, UND, UND, UND, "\u{e4}", "\u{e5}", UND, UND,
    UND, "\u{e9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{f3}", UND, "\u{f5}", "\u{f6}", "\u{f7}",
    UND, UND, UND, UND, "\u{fc}", UND, UND, "\u{2019}",
];

pub static SWISS_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", UND, UND, UND, "\u{a7}",
    UND, "\u{a9}", "\u{1e82}", UND, UND, "\u{ad}", "\u{ae}", UND,
    UND, UND, UND, UND, UND, UND, "\u{b6}", UND,
    UND, UND, "\u{1e83}", UND, UND, UND, UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static SWISS_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, "\u{174}", "\u{175}", UND, UND, "\u{176}", "\u{177}", UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", UND, "\u{a5}", UND, "\u{a7}",
    UND, "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SWISS_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{174}", "\u{176}", "\u{1e82}", "\u{31}", "\u{175}", "\u{177}", "\u{1e83}", "\u{2026}",
    UND, "\u{2074}", "\u{2122}", "\u{1d7e3}", "\u{2215}", "\u{1d453}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SWISS_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    UND, "\u{a9}", "\u{1e82}", "\u{ab}", UND, "\u{ad}", "\u{ae}", UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{1e83}", "\u{bb}", UND, UND, UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static SYSTEM_FIXED_GREEK_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{2018}", "\u{2019}", "\u{a3}", UND, UND, "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, UND, UND, UND,
    UND, UND, UND, "\u{bb}", UND, "\u{bd}", UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{3bc}", UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

pub static SYSTEM_FIXED_LATIN10_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, "\u{201e}", UND, "\u{a7}",
    UND, "\u{a9}", UND, "\u{ab}", UND, "\u{ad}", UND, UND,
    "\u{b0}", "\u{b1}", UND, UND, UND, "\u{201d}", "\u{b6}", "\u{b7}",
    UND, UND, UND, "\u{bb}", "\u{152}", "\u{153}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, UND, "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", UND,
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, UND, "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", UND,
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, "\u{ff}",
];

pub static SYSTEM_FIXED_LATIN2_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{ab}", "\u{bb}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    UND, UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, UND,
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, UND, "\u{da}", UND, "\u{dc}", "\u{dd}", UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, UND, "\u{fa}", UND, "\u{fc}", "\u{fd}", UND, UND,
];

pub static SYSTEM_FIXED_LATIN3_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", UND, "\u{b7}",
    "\u{b8}", UND, UND, UND, UND, "\u{bd}", UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", UND, "\u{c4}", UND, UND, "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", UND, "\u{d6}", "\u{d7}",
    UND, "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", UND, "\u{e4}", UND, UND, "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", UND, "\u{f6}", "\u{f7}",
    UND, "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static SYSTEM_FIXED_LATIN4_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, "\u{a4}", UND, UND, "\u{a7}",
    "\u{a8}", UND, UND, UND, UND, "\u{ad}", UND, "\u{af}",
    "\u{b0}", UND, UND, UND, "\u{b4}", UND, UND, UND,
    "\u{b8}", UND, UND, UND, UND, UND, UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", UND,
    UND, UND, UND, UND, "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", UND,
    UND, UND, UND, UND, "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, UND,
];

pub static SYSTEM_FIXED_LATIN5_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", UND, UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", UND, UND, "\u{ff}",
];

pub static SYSTEM_FIXED_LATIN6_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    UND, "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, UND, UND, UND, UND, "\u{a7}",
    UND, UND, UND, UND, UND, "\u{ad}", UND, UND,
    "\u{b0}", UND, UND, UND, UND, UND, UND, "\u{b7}",
    UND, UND, UND, UND, UND, "\u{2015}", UND, UND,
    UND, "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", UND,
    UND, "\u{c9}", UND, "\u{cb}", UND, "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", UND, UND, "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", UND, "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    UND, "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", UND,
    UND, "\u{e9}", UND, "\u{eb}", UND, "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", UND, UND, "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", UND, "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", UND,
];

pub static SYSTEM_FIXED_LATIN7_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", UND, "\u{2039}", "\u{203a}", UND, UND, UND, "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{201d}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{201e}", "\u{a6}", "\u{a7}",
    "\u{d8}", "\u{a9}", UND, "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{c6}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{201c}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{f8}", "\u{b9}", UND, "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{e6}",
    UND, UND, UND, UND, "\u{c4}", "\u{c5}", UND, UND,
    UND, "\u{c9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{d3}", UND, "\u{d5}", "\u{d6}", "\u{d7}",
    UND, UND, UND, UND, "\u{dc}", UND, UND, "\u{df}",
    UND, UND, UND, UND, "\u{e4}", "\u{e5}", UND, UND,
    UND, "\u{e9}", UND, UND, UND, UND, UND, UND,
    UND, UND, UND, "\u{f3}", UND, "\u{f5}", "\u{f6}", "\u{f7}",
    UND, UND, UND, UND, "\u{fc}", UND, UND, "\u{2019}",
];

pub static SYSTEM_FIXED_LATIN8_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", UND, UND, "\u{a3}", UND, UND, UND, "\u{a7}",
    UND, "\u{a9}", UND, UND, UND, "\u{ad}", "\u{ae}", UND,
    UND, UND, UND, UND, UND, UND, "\u{b6}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", UND,
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", UND,
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", UND, "\u{ff}",
];

pub static SYSTEM_FIXED_LATIN9_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", UND, UND, "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", UND, "\u{a5}", UND, "\u{a7}",
    UND, "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", UND, "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", "\u{ba}", "\u{bb}", "\u{152}", "\u{153}", UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SYSTEM_FIXED_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static SYSTEM_FIXED_WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    UND, "\u{a9}", UND, "\u{ab}", UND, "\u{ad}", "\u{ae}", UND,
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    UND, "\u{b9}", UND, "\u{bb}", UND, UND, UND, "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    UND, "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", UND, "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    UND, "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", UND, "\u{ff}",
];

pub static SYSTEM_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    "\u{20ac}", "\u{174}", "\u{175}", "\u{25f0}", "\u{1fbc0}", "\u{176}", "\u{177}", "\u{2088}\u{2077}",
    "\u{21e6}", "\u{21e8}", "\u{21e9}", "\u{21e7}", "\u{2026}", "\u{2122}", "\u{2030}", "\u{2022}",
    "\u{2018}", "\u{2019}", "\u{2039}", "\u{203a}", "\u{201c}", "\u{201d}", "\u{201e}", "\u{2013}",
    "\u{2014}", "\u{2212}", "\u{152}", "\u{153}", "\u{2020}", "\u{2021}", "\u{fb01}", "\u{fb02}",
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{a8}", "\u{a9}", "\u{aa}", "\u{ab}", "\u{ac}", "\u{ad}", "\u{ae}", "\u{af}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{b8}", "\u{b9}", "\u{ba}", "\u{bb}", "\u{bc}", "\u{bd}", "\u{be}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{d0}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{d7}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{de}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{f0}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{fe}", "\u{ff}",
];

pub static WELSH_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{20}", "\u{21}", "\u{22}", "\u{23}", "\u{24}", "\u{25}", "\u{26}", "\u{27}",
    "\u{28}", "\u{29}", "\u{2a}", "\u{2b}", "\u{2c}", "\u{2d}", "\u{2e}", "\u{2f}",
    "\u{30}", "\u{31}", "\u{32}", "\u{33}", "\u{34}", "\u{35}", "\u{36}", "\u{37}",
    "\u{38}", "\u{39}", "\u{3a}", "\u{3b}", "\u{3c}", "\u{3d}", "\u{3e}", "\u{3f}",
    "\u{40}", "\u{41}", "\u{42}", "\u{43}", "\u{44}", "\u{45}", "\u{46}", "\u{47}",
    "\u{48}", "\u{49}", "\u{4a}", "\u{4b}", "\u{4c}", "\u{4d}", "\u{4e}", "\u{4f}",
    "\u{50}", "\u{51}", "\u{52}", "\u{53}", "\u{54}", "\u{55}", "\u{56}", "\u{57}",
    "\u{58}", "\u{59}", "\u{5a}", "\u{5b}", "\u{5c}", "\u{5d}", "\u{5e}", "\u{5f}",
    "\u{60}", "\u{61}", "\u{62}", "\u{63}", "\u{64}", "\u{65}", "\u{66}", "\u{67}",
    "\u{68}", "\u{69}", "\u{6a}", "\u{6b}", "\u{6c}", "\u{6d}", "\u{6e}", "\u{6f}",
    "\u{70}", "\u{71}", "\u{72}", "\u{73}", "\u{74}", "\u{75}", "\u{76}", "\u{77}",
    "\u{78}", "\u{79}", "\u{7a}", "\u{7b}", "\u{7c}", "\u{7d}", "\u{7e}", UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{a0}", "\u{a1}", "\u{a2}", "\u{a3}", "\u{a4}", "\u{a5}", "\u{a6}", "\u{a7}",
    "\u{1e80}", "\u{a9}", "\u{1e82}", "\u{ab}", "\u{1ef2}", "\u{ad}", "\u{ae}", "\u{178}",
    "\u{b0}", "\u{b1}", "\u{b2}", "\u{b3}", "\u{b4}", "\u{b5}", "\u{b6}", "\u{b7}",
    "\u{1e81}", "\u{b9}", "\u{1e83}", "\u{bb}", "\u{1ef3}", "\u{1e84}", "\u{1e85}", "\u{bf}",
    "\u{c0}", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    "\u{c8}", "\u{c9}", "\u{ca}", "\u{cb}", "\u{cc}", "\u{cd}", "\u{ce}", "\u{cf}",
    "\u{174}", "\u{d1}", "\u{d2}", "\u{d3}", "\u{d4}", "\u{d5}", "\u{d6}", "\u{78}",
    "\u{d8}", "\u{d9}", "\u{da}", "\u{db}", "\u{dc}", "\u{dd}", "\u{176}", "\u{df}",
    "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}", "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}",
    "\u{e8}", "\u{e9}", "\u{ea}", "\u{eb}", "\u{ec}", "\u{ed}", "\u{ee}", "\u{ef}",
    "\u{175}", "\u{f1}", "\u{f2}", "\u{f3}", "\u{f4}", "\u{f5}", "\u{f6}", "\u{f7}",
    "\u{f8}", "\u{f9}", "\u{fa}", "\u{fb}", "\u{fc}", "\u{fd}", "\u{177}", "\u{ff}",
];

pub static WIMPSYMBOL_TO_UTF8: [&str; 256] = [
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    "\u{2714}", UND, UND, UND, "\u{2718}", UND, UND, UND,
    "\u{21d0}", "\u{21d2}", "\u{21d3}", "\u{21d1}", UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
    UND, UND, UND, UND, UND, UND, UND, UND,
];

