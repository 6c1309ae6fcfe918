//! Finger-pattern matching against the gojūon letter table
//!
//! Each known hand shape is a 5-bit finger code with a base confidence.
//! Several rows of the syllabary deliberately share one code (the real signs
//! differ in features this classifier does not see); those collisions are
//! resolved once at table build time, and near-miss inputs fall back to a
//! Hamming-distance search with a confidence derating.

use std::sync::OnceLock;

use super::fingers::FingerStates;

/// Derating applied to approximate (non-exact) matches
const FALLBACK_DERATE: f32 = 0.7;

/// One entry of the static letter table
#[derive(Clone, Copy, Debug)]
pub struct LetterPattern {
    pub letter: &'static str,
    pub code: u8,
    pub confidence: f32,
}

const fn pat(letter: &'static str, thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool, confidence: f32) -> LetterPattern {
    let states = FingerStates { thumb, index, middle, ring, pinky };
    LetterPattern {
        letter,
        code: states.encode(),
        confidence,
    }
}

/// The full gojūon table: letter, (thumb, index, middle, ring, pinky), confidence
pub const LETTER_PATTERNS: [LetterPattern; 48] = [
    // あ行
    pat("A", true, false, false, false, false, 0.9),
    pat("I", false, false, false, false, true, 0.9),
    pat("U", false, true, true, false, false, 0.9),
    pat("E", false, true, true, true, true, 0.85),
    pat("O", true, true, true, true, true, 0.85),
    // か行
    pat("KA", false, true, true, true, true, 0.8),
    pat("KI", true, false, false, false, false, 0.85),
    pat("KU", false, false, false, true, true, 0.8),
    pat("KE", true, false, false, false, true, 0.85),
    pat("KO", false, true, false, false, false, 0.8),
    // さ行
    pat("SA", false, true, false, false, false, 0.9),
    pat("SHI", true, true, false, false, false, 0.85),
    pat("SU", false, true, true, true, false, 0.8),
    pat("SE", false, true, true, false, false, 0.75),
    pat("SO", true, false, false, false, false, 0.75),
    // た行
    pat("TA", false, true, true, false, false, 0.8),
    pat("CHI", true, true, false, false, false, 0.85),
    pat("TSU", true, false, false, false, false, 0.85),
    pat("TE", true, true, true, true, true, 0.7),
    pat("TO", false, true, true, false, false, 0.75),
    // な行
    pat("NA", true, true, true, true, false, 0.7),
    pat("NI", false, true, false, false, false, 0.85),
    pat("NU", true, true, false, false, false, 0.75),
    pat("NE", false, true, true, false, false, 0.85),
    pat("NO", true, true, true, false, true, 0.7),
    // は行
    pat("HA", true, true, true, true, true, 0.7),
    pat("HI", false, true, false, false, false, 0.9),
    pat("FU", false, true, true, true, false, 0.85),
    pat("HE", true, true, true, true, false, 0.7),
    pat("HO", true, true, true, false, true, 0.7),
    // ま行
    pat("MA", true, true, true, true, false, 0.85),
    pat("MI", true, false, false, false, false, 0.9),
    pat("MU", true, true, true, true, false, 0.8),
    pat("ME", true, true, true, true, true, 0.7),
    pat("MO", true, true, true, false, true, 0.7),
    // や行
    pat("YA", false, false, false, false, true, 0.85),
    pat("YU", true, false, false, false, true, 0.85),
    pat("YO", true, true, false, false, false, 0.85),
    // ら行
    pat("RA", false, false, false, false, true, 0.8),
    pat("RI", false, true, false, false, false, 0.85),
    pat("RU", true, true, true, true, true, 0.7),
    pat("RE", false, false, false, true, false, 0.8),
    pat("RO", true, true, true, true, false, 0.7),
    // わ行
    pat("WA", true, true, true, true, true, 0.7),
    pat("WI", true, true, true, true, false, 0.7),
    pat("WE", true, true, true, false, true, 0.7),
    pat("WO", true, true, false, true, true, 0.7),
    // ん
    pat("N", false, false, false, false, false, 0.9),
];

/// Resolved lookup: 5-bit code → winning table entry.
///
/// Colliding codes resolve to the highest base confidence, ties to the
/// lexicographically smallest letter, so lookups never depend on table order.
fn resolved_table() -> &'static [Option<(&'static str, f32)>; 32] {
    static TABLE: OnceLock<[Option<(&'static str, f32)>; 32]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: [Option<(&'static str, f32)>; 32] = [None; 32];
        for entry in LETTER_PATTERNS.iter() {
            let slot = &mut table[entry.code as usize];
            let replace = match slot {
                None => true,
                Some((letter, confidence)) => {
                    entry.confidence > *confidence
                        || (entry.confidence == *confidence && entry.letter < *letter)
                }
            };
            if replace {
                *slot = Some((entry.letter, entry.confidence));
            }
        }
        table
    })
}

fn hamming(a: u8, b: u8) -> u32 {
    (a ^ b).count_ones()
}

/// Match a finger-state vector to a letter and confidence.
///
/// An exact code hit returns the base confidence untouched. Otherwise every
/// table code is scored by `base × (5 − distance)/5 × 0.7` and the best
/// adjusted confidence wins; ties break to the lowest distance, then the
/// lexicographically smallest letter. Always returns a result.
pub fn match_finger_pattern(states: FingerStates) -> (&'static str, f32) {
    let code = states.encode();
    let table = resolved_table();

    if let Some((letter, confidence)) = table[code as usize] {
        return (letter, confidence);
    }

    let mut best: Option<(&'static str, f32, u32)> = None;
    for (entry_code, entry) in table.iter().enumerate() {
        let Some((letter, confidence)) = *entry else {
            continue;
        };
        let distance = hamming(code, entry_code as u8);
        let match_ratio = (5 - distance) as f32 / 5.0;
        let adjusted = confidence * match_ratio * FALLBACK_DERATE;

        let better = match best {
            None => adjusted > 0.0,
            Some((best_letter, best_adjusted, best_distance)) => {
                adjusted > best_adjusted
                    || (adjusted == best_adjusted && distance < best_distance)
                    || (adjusted == best_adjusted
                        && distance == best_distance
                        && letter < best_letter)
            }
        };
        if better {
            best = Some((letter, adjusted, distance));
        }
    }

    match best {
        Some((letter, confidence, _)) => (letter, confidence),
        None => ("", 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> FingerStates {
        FingerStates { thumb, index, middle, ring, pinky }
    }

    #[test]
    fn table_codes_use_the_finger_state_encoding() {
        // The table builds its codes through FingerStates::encode, so a
        // live extraction and a table entry for the same shape must agree.
        let a = LETTER_PATTERNS.iter().find(|p| p.letter == "A").unwrap();
        assert_eq!(a.code, states(true, false, false, false, false).encode());
        let n = LETTER_PATTERNS.iter().find(|p| p.letter == "N").unwrap();
        assert_eq!(n.code, FingerStates::default().encode());
    }

    #[test]
    fn thumb_only_is_a() {
        // Code 0b10000 collides across rows (A, KI, SO, TSU, MI); A wins on
        // confidence then letter order.
        let (letter, confidence) = match_finger_pattern(states(true, false, false, false, false));
        assert_eq!(letter, "A");
        assert_eq!(confidence, 0.9);
    }

    #[test]
    fn pinky_only_is_i() {
        let (letter, confidence) = match_finger_pattern(states(false, false, false, false, true));
        assert_eq!(letter, "I");
        assert!(confidence >= 0.5);
    }

    #[test]
    fn closed_fist_is_n() {
        let (letter, confidence) = match_finger_pattern(FingerStates::default());
        assert_eq!(letter, "N");
        assert_eq!(confidence, 0.9);
    }

    #[test]
    fn exact_match_skips_derating() {
        // KU's code 0b00011 is unshared; an exact hit must return the base
        // confidence, not base × 1 × 0.7.
        let (letter, confidence) = match_finger_pattern(states(false, false, false, true, true));
        assert_eq!(letter, "KU");
        assert_eq!(confidence, 0.8);
    }

    #[test]
    fn near_miss_falls_back_with_derating() {
        // 0b00101 (middle+pinky) has no table entry; nearest is I at
        // distance 1: 0.9 × 4/5 × 0.7.
        let (letter, confidence) = match_finger_pattern(states(false, false, true, false, true));
        assert_eq!(letter, "I");
        assert!((confidence - 0.9 * 0.8 * 0.7).abs() < 1e-6);
    }

    #[test]
    fn fallback_prefers_best_adjusted_confidence() {
        // 0b11100 is at distance 1 from CHI (0.85), MA (0.85), and
        // U (0b01100, 0.9); U's higher base confidence wins.
        let (letter, confidence) = match_finger_pattern(states(true, true, true, false, false));
        assert_eq!(letter, "U");
        assert!((confidence - 0.9 * 0.8 * 0.7).abs() < 1e-6);
    }

    #[test]
    fn fallback_tie_breaks_lexicographically() {
        // 0b01001 (index+pinky) has no exact entry and sits at distance 1
        // from both HI (0b01000) and I (0b00001), each at confidence 0.9:
        // equal adjusted score and distance, so HI < I decides.
        let (letter, confidence) = match_finger_pattern(states(false, true, false, false, true));
        assert_eq!(letter, "HI");
        assert!((confidence - 0.9 * 0.8 * 0.7).abs() < 1e-6);
    }

    #[test]
    fn fallback_confidence_stays_below_exact_range() {
        for code in 0u8..32 {
            let s = FingerStates {
                thumb: code & 0b10000 != 0,
                index: code & 0b01000 != 0,
                middle: code & 0b00100 != 0,
                ring: code & 0b00010 != 0,
                pinky: code & 0b00001 != 0,
            };
            let (letter, confidence) = match_finger_pattern(s);
            assert!(!letter.is_empty());
            assert!((0.0..=0.9).contains(&confidence));
        }
    }

    #[test]
    fn collision_resolution_is_deterministic() {
        // 0b11101 is shared by HO, MO, NO, WE at equal confidence; the
        // lexicographically smallest letter owns the slot.
        let (letter, confidence) = match_finger_pattern(states(true, true, true, false, true));
        assert_eq!(letter, "HO");
        assert_eq!(confidence, 0.7);
    }
}
