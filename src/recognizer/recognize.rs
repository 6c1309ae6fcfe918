//! Top-level recognition entry point
//!
//! One call per video frame: validate the landmark set, classify finger
//! states, match the letter table, and read the positional modifiers. A bad
//! frame yields the canonical empty result and a warning; the next frame is
//! independent, so there is no retry or carried state.

use crate::diag;

use super::fingers::extract_finger_states;
use super::hand::{validate_landmarks, Landmark};
use super::patterns::match_finger_pattern;
use super::position::{detect_small_character, detect_voicing_type, VoicingType};

/// Output of one recognition cycle
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecognitionResult {
    /// Matched letter code, empty when nothing was recognized
    pub letter: String,
    /// Match confidence in [0, 0.9]
    pub confidence: f32,
    /// Voicing zone the hand sits in
    pub voicing: VoicingType,
    /// Whether the hand sits in the small-character zone
    pub is_small: bool,
}

impl RecognitionResult {
    /// Canonical result for frames that cannot be recognized
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Recognize a finger-spelled letter from one frame of hand landmarks.
/// Never fails: malformed input degrades to the empty result.
pub fn recognize_hand_shape(landmarks: &[Landmark]) -> RecognitionResult {
    if let Err(err) = validate_landmarks(landmarks) {
        diag::warn(&format!("recognition skipped: {}", err));
        return RecognitionResult::empty();
    }

    let states = extract_finger_states(landmarks);
    let (letter, confidence) = match_finger_pattern(states);

    RecognitionResult {
        letter: letter.to_string(),
        confidence,
        voicing: detect_voicing_type(landmarks),
        is_small: detect_small_character(landmarks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::hand::{
        LANDMARK_COUNT, MIDDLE_TIP, THUMB_IP, THUMB_MCP, THUMB_TIP,
    };

    fn centered_hand() -> Vec<Landmark> {
        let mut hand = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        hand[MIDDLE_TIP] = Landmark::new(0.5, 0.3, 0.0);
        hand
    }

    fn thumb_only_hand() -> Vec<Landmark> {
        let mut hand = centered_hand();
        hand[THUMB_MCP] = Landmark::new(0.5, 0.55, 0.0);
        hand[THUMB_IP] = Landmark::new(0.58, 0.5, 0.0);
        hand[THUMB_TIP] = Landmark::new(0.65, 0.45, 0.0);
        hand
    }

    #[test]
    fn wrong_count_yields_empty_result() {
        assert_eq!(recognize_hand_shape(&[]), RecognitionResult::empty());
        assert_eq!(
            recognize_hand_shape(&centered_hand()[..10]),
            RecognitionResult::empty()
        );
    }

    #[test]
    fn non_finite_input_yields_empty_result() {
        let mut hand = centered_hand();
        hand[5].x = f32::NAN;
        let result = recognize_hand_shape(&hand);
        assert_eq!(result.letter, "");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.voicing, VoicingType::None);
        assert!(!result.is_small);
    }

    #[test]
    fn thumb_only_recognizes_a() {
        let result = recognize_hand_shape(&thumb_only_hand());
        assert_eq!(result.letter, "A");
        assert!(result.confidence >= 0.5);
        assert_eq!(result.voicing, VoicingType::None);
        assert!(!result.is_small);
    }

    #[test]
    fn closed_fist_recognizes_n() {
        let result = recognize_hand_shape(&centered_hand());
        assert_eq!(result.letter, "N");
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn modifiers_ride_along_with_the_letter() {
        // Shift the whole thumb-only hand into the voiced zone.
        let hand: Vec<Landmark> = thumb_only_hand()
            .iter()
            .map(|lm| Landmark::new(lm.x + 0.25, lm.y, lm.z))
            .collect();
        let result = recognize_hand_shape(&hand);
        assert_eq!(result.letter, "A");
        assert_eq!(result.voicing, VoicingType::Voiced);
        assert!(!result.is_small);
    }
}
