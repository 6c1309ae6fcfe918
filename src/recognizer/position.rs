//! Voicing and small-character detection from hand position
//!
//! Modifiers are signaled by where the hand sits in the frame, not by its
//! shape: shifted outward (image right) → voiced, raised → semi-voiced,
//! pulled toward the body (image left) → small character. Thresholds scale
//! with apparent hand size so a hand close to the camera needs a
//! proportionally larger shift to register a deliberate move.

use crate::diag;

use super::hand::{Landmark, LandmarkError, LANDMARK_COUNT, MIDDLE_TIP, WRIST};

const CENTER_X: f32 = 0.5;
const CENTER_Y: f32 = 0.5;

/// Voicing threshold: max(floor, hand size × scale)
const VOICING_THRESHOLD_FLOOR: f32 = 0.05;
const VOICING_SIZE_SCALE: f32 = 0.3;

/// Small-character threshold: max(floor, hand size × scale)
const SMALL_THRESHOLD_FLOOR: f32 = 0.1;
const SMALL_SIZE_SCALE: f32 = 0.4;

/// Kana voicing modifier derived from hand position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoicingType {
    #[default]
    None,
    Voiced,
    SemiVoiced,
}

impl VoicingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoicingType::None => "none",
            VoicingType::Voiced => "voiced",
            VoicingType::SemiVoiced => "semi-voiced",
        }
    }
}

/// Reference position of the hand, taken from the wrist
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandPosition {
    /// Fallback when no usable wrist is available: screen center
    pub const DEFAULT: HandPosition = HandPosition { x: 0.5, y: 0.5, z: 0.0 };
}

/// Wrist position clamped to the [0, 1] image square.
///
/// Wrong count or a non-finite wrist degrades to the centered default with a
/// warning; it never fails.
pub fn detect_hand_position(landmarks: &[Landmark]) -> HandPosition {
    if landmarks.len() != LANDMARK_COUNT {
        diag::warn(&format!(
            "hand position unavailable: {} landmarks (expected {})",
            landmarks.len(),
            LANDMARK_COUNT
        ));
        return HandPosition::DEFAULT;
    }

    let wrist = landmarks[WRIST];
    if !wrist.is_finite() {
        diag::warn("hand position unavailable: non-finite wrist landmark");
        return HandPosition::DEFAULT;
    }

    HandPosition {
        x: wrist.x.clamp(0.0, 1.0),
        y: wrist.y.clamp(0.0, 1.0),
        z: wrist.z,
    }
}

/// Apparent hand size: wrist ↔ middle fingertip distance in image space.
fn hand_size(landmarks: &[Landmark]) -> Result<f32, LandmarkError> {
    if landmarks.len() != LANDMARK_COUNT {
        return Err(LandmarkError::InvalidLandmarkCount(landmarks.len()));
    }
    let wrist = landmarks[WRIST];
    let middle_tip = landmarks[MIDDLE_TIP];
    if !wrist.is_finite() || !middle_tip.is_finite() {
        return Err(LandmarkError::MissingReferenceLandmark);
    }
    let dx = middle_tip.x - wrist.x;
    let dy = middle_tip.y - wrist.y;
    Ok((dx * dx + dy * dy).sqrt())
}

/// Classify the voicing zone. Outward shift beats upward shift when both
/// apply. Unusable reference landmarks degrade to `None` with a warning.
pub fn detect_voicing_type(landmarks: &[Landmark]) -> VoicingType {
    let size = match hand_size(landmarks) {
        Ok(size) => size,
        Err(err) => {
            diag::warn(&format!("voicing detection skipped: {}", err));
            return VoicingType::None;
        }
    };
    let position = detect_hand_position(landmarks);
    let threshold = (size * VOICING_SIZE_SCALE).max(VOICING_THRESHOLD_FLOOR);

    if position.x > CENTER_X + threshold {
        VoicingType::Voiced
    } else if position.y < CENTER_Y - threshold {
        VoicingType::SemiVoiced
    } else {
        VoicingType::None
    }
}

/// True when the hand is pulled toward the body (image left of center by
/// more than the dynamic threshold). Unusable input is never small.
pub fn detect_small_character(landmarks: &[Landmark]) -> bool {
    let size = match hand_size(landmarks) {
        Ok(size) => size,
        Err(err) => {
            diag::warn(&format!("small-character detection skipped: {}", err));
            return false;
        }
    };
    let position = detect_hand_position(landmarks);
    let threshold = (size * SMALL_SIZE_SCALE).max(SMALL_THRESHOLD_FLOOR);

    position.x < CENTER_X - threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand centered at (x, y) with the middle fingertip a fixed 0.2 above
    /// the wrist, giving a hand size of 0.2.
    fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
        let mut hand = vec![Landmark::new(x, y, 0.0); LANDMARK_COUNT];
        hand[MIDDLE_TIP] = Landmark::new(x, y - 0.2, 0.0);
        hand
    }

    #[test]
    fn position_follows_wrist() {
        let position = detect_hand_position(&hand_at(0.42, 0.61));
        assert_eq!(position, HandPosition { x: 0.42, y: 0.61, z: 0.0 });
    }

    #[test]
    fn position_clamps_to_unit_square() {
        let mut hand = hand_at(0.5, 0.5);
        hand[WRIST] = Landmark::new(1.5, -0.5, 0.1);
        let position = detect_hand_position(&hand);
        assert_eq!(position.x, 1.0);
        assert_eq!(position.y, 0.0);
        assert_eq!(position.z, 0.1);
    }

    #[test]
    fn position_defaults_on_bad_input() {
        assert_eq!(detect_hand_position(&[]), HandPosition::DEFAULT);

        let mut hand = hand_at(0.5, 0.5);
        hand[WRIST].x = f32::NAN;
        assert_eq!(detect_hand_position(&hand), HandPosition::DEFAULT);
    }

    #[test]
    fn centered_hand_is_unvoiced() {
        assert_eq!(detect_voicing_type(&hand_at(0.5, 0.5)), VoicingType::None);
    }

    #[test]
    fn outward_shift_is_voiced() {
        // Hand size 0.2 → threshold max(0.05, 0.06) = 0.06; 0.7 > 0.56.
        assert_eq!(detect_voicing_type(&hand_at(0.7, 0.5)), VoicingType::Voiced);
    }

    #[test]
    fn raised_hand_is_semi_voiced() {
        assert_eq!(detect_voicing_type(&hand_at(0.5, 0.3)), VoicingType::SemiVoiced);
    }

    #[test]
    fn voiced_takes_precedence_over_semi_voiced() {
        assert_eq!(detect_voicing_type(&hand_at(0.7, 0.3)), VoicingType::Voiced);
    }

    #[test]
    fn threshold_scales_with_hand_size() {
        // A large hand (size 0.8 → threshold 0.24) needs a bigger shift, so
        // the same x = 0.7 no longer reads as voiced.
        let mut hand = hand_at(0.7, 0.5);
        hand[MIDDLE_TIP] = Landmark::new(0.7, -0.3, 0.0);
        assert_eq!(detect_voicing_type(&hand), VoicingType::None);
    }

    #[test]
    fn voicing_threshold_has_floor() {
        // Tiny hand: size 0.01 → threshold floors at 0.05, not 0.003.
        let mut hand = hand_at(0.54, 0.5);
        hand[MIDDLE_TIP] = Landmark::new(0.54, 0.49, 0.0);
        assert_eq!(detect_voicing_type(&hand), VoicingType::None);
    }

    #[test]
    fn pulled_in_hand_is_small() {
        // Hand size 0.2 → small threshold max(0.1, 0.08) = 0.1; 0.3 < 0.4.
        assert!(detect_small_character(&hand_at(0.3, 0.5)));
        assert!(!detect_small_character(&hand_at(0.6, 0.5)));
    }

    #[test]
    fn modifiers_degrade_on_missing_references() {
        let mut hand = hand_at(0.3, 0.3);
        hand[MIDDLE_TIP].y = f32::NAN;
        assert_eq!(detect_voicing_type(&hand), VoicingType::None);
        assert!(!detect_small_character(&hand));

        assert_eq!(detect_voicing_type(&[]), VoicingType::None);
        assert!(!detect_small_character(&[]));
    }
}
