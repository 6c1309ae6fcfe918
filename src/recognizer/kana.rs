//! Static kana tables and character composition
//!
//! Letter codes ("KA", "SHI", …) are the matcher's vocabulary; these tables
//! turn them into displayable hiragana and apply position-derived modifiers.
//! Priority when composing: small character > voiced > semi-voiced > base.
//! Pulling the hand toward the body is the most deliberate signal and must
//! not be overridden by incidental voicing-zone overlap.

use super::hand::Landmark;
use super::position::{detect_small_character, detect_voicing_type, VoicingType};

/// Letter code → hiragana glyph for the 48 base signs
pub const FINGER_SPELLING_MAP: [(&str, &str); 48] = [
    ("A", "あ"), ("I", "い"), ("U", "う"), ("E", "え"), ("O", "お"),
    ("KA", "か"), ("KI", "き"), ("KU", "く"), ("KE", "け"), ("KO", "こ"),
    ("SA", "さ"), ("SHI", "し"), ("SU", "す"), ("SE", "せ"), ("SO", "そ"),
    ("TA", "た"), ("CHI", "ち"), ("TSU", "つ"), ("TE", "て"), ("TO", "と"),
    ("NA", "な"), ("NI", "に"), ("NU", "ぬ"), ("NE", "ね"), ("NO", "の"),
    ("HA", "は"), ("HI", "ひ"), ("FU", "ふ"), ("HE", "へ"), ("HO", "ほ"),
    ("MA", "ま"), ("MI", "み"), ("MU", "む"), ("ME", "め"), ("MO", "も"),
    ("YA", "や"), ("YU", "ゆ"), ("YO", "よ"),
    ("RA", "ら"), ("RI", "り"), ("RU", "る"), ("RE", "れ"), ("RO", "ろ"),
    ("WA", "わ"), ("WI", "ゐ"), ("WE", "ゑ"), ("WO", "を"),
    ("N", "ん"),
];

/// Base letter → voiced letter (か → が rows)
pub const VOICED_MAP: [(&str, &str); 20] = [
    ("KA", "GA"), ("KI", "GI"), ("KU", "GU"), ("KE", "GE"), ("KO", "GO"),
    ("SA", "ZA"), ("SHI", "JI"), ("SU", "ZU"), ("SE", "ZE"), ("SO", "ZO"),
    ("TA", "DA"), ("CHI", "DI"), ("TSU", "DU"), ("TE", "DE"), ("TO", "DO"),
    ("HA", "BA"), ("HI", "BI"), ("FU", "BU"), ("HE", "BE"), ("HO", "BO"),
];

/// Base letter → semi-voiced letter (は → ぱ row only)
pub const SEMI_VOICED_MAP: [(&str, &str); 5] = [
    ("HA", "PA"), ("HI", "PI"), ("FU", "PU"), ("HE", "PE"), ("HO", "PO"),
];

/// Base letter → small-kana glyph (the composed output is already displayable)
pub const SMALL_CHARACTER_MAP: [(&str, &str); 10] = [
    ("A", "ぁ"), ("I", "ぃ"), ("U", "ぅ"), ("E", "ぇ"), ("O", "ぉ"),
    ("TSU", "っ"), ("YA", "ゃ"), ("YU", "ゅ"), ("YO", "ょ"), ("WA", "ゎ"),
];

/// Voiced letter → hiragana glyph
pub const VOICED_KANA_MAP: [(&str, &str); 20] = [
    ("GA", "が"), ("GI", "ぎ"), ("GU", "ぐ"), ("GE", "げ"), ("GO", "ご"),
    ("ZA", "ざ"), ("JI", "じ"), ("ZU", "ず"), ("ZE", "ぜ"), ("ZO", "ぞ"),
    ("DA", "だ"), ("DI", "ぢ"), ("DU", "づ"), ("DE", "で"), ("DO", "ど"),
    ("BA", "ば"), ("BI", "び"), ("BU", "ぶ"), ("BE", "べ"), ("BO", "ぼ"),
];

/// Semi-voiced letter → hiragana glyph
pub const SEMI_VOICED_KANA_MAP: [(&str, &str); 5] = [
    ("PA", "ぱ"), ("PI", "ぴ"), ("PU", "ぷ"), ("PE", "ぺ"), ("PO", "ぽ"),
];

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Hiragana glyph for a letter code (base, voiced, or semi-voiced).
/// Small forms are produced as glyphs directly and have no code here.
pub fn to_kana(letter: &str) -> Option<&'static str> {
    lookup(&FINGER_SPELLING_MAP, letter)
        .or_else(|| lookup(&VOICED_KANA_MAP, letter))
        .or_else(|| lookup(&SEMI_VOICED_KANA_MAP, letter))
}

/// Apply position-derived modifiers to a base letter.
///
/// Returns the small-kana glyph when the small zone is active and the base
/// has a small form; otherwise the voiced / semi-voiced letter code when the
/// corresponding zone is active and a mapping exists; otherwise the base
/// letter unchanged.
pub fn complete_character(base_letter: &str, landmarks: &[Landmark]) -> String {
    if detect_small_character(landmarks) {
        if let Some(small) = lookup(&SMALL_CHARACTER_MAP, base_letter) {
            return small.to_string();
        }
    }

    match detect_voicing_type(landmarks) {
        VoicingType::Voiced => {
            if let Some(voiced) = lookup(&VOICED_MAP, base_letter) {
                return voiced.to_string();
            }
        }
        VoicingType::SemiVoiced => {
            if let Some(semi) = lookup(&SEMI_VOICED_MAP, base_letter) {
                return semi.to_string();
            }
        }
        VoicingType::None => {}
    }

    base_letter.to_string()
}

/// Reverse lookup: strip a voicing modifier from a letter code.
/// Unmodified or unknown codes pass through unchanged.
pub fn base_character(character: &str) -> &str {
    for (base, voiced) in VOICED_MAP.iter() {
        if *voiced == character {
            return base;
        }
    }
    for (base, semi) in SEMI_VOICED_MAP.iter() {
        if *semi == character {
            return base;
        }
    }
    character
}
