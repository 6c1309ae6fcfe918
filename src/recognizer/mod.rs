//! Recognition core - JSL finger-spelling from hand landmarks
//!
//! Pure and stateless per call; the only shared state is the read-only
//! pattern table built on first use. Re-exports only, logic in submodules.

mod fingers;
mod hand;
mod kana;
mod patterns;
mod position;
mod recognize;

pub use fingers::{extract_finger_states, FingerStates};
pub use hand::{
    validate_landmarks, Landmark, LandmarkError, HAND_SKELETON, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
pub use kana::{
    base_character, complete_character, to_kana, FINGER_SPELLING_MAP, SEMI_VOICED_MAP,
    SMALL_CHARACTER_MAP, VOICED_MAP,
};
pub use patterns::{match_finger_pattern, LetterPattern, LETTER_PATTERNS};
pub use position::{
    detect_hand_position, detect_small_character, detect_voicing_type, HandPosition, VoicingType,
};
pub use recognize::{recognize_hand_shape, RecognitionResult};
