//! Recognition result storage and JS getters
//!
//! The bridge runs recognition when a frame arrives and caches the result
//! plus the composed display glyph; JavaScript reads them through flat
//! getter functions.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::recognizer::{
    complete_character, recognize_hand_shape, to_kana, Landmark, RecognitionResult,
};

/// Last recognition outcome, refreshed once per frame
#[derive(Default)]
struct RecognitionState {
    result: RecognitionResult,
    /// Composed display glyph ("" when nothing was recognized)
    display: String,
}

thread_local! {
    static RECOGNITION_STATE: RefCell<RecognitionState> = RefCell::new(RecognitionState::default());
}

/// Run recognition for a stored frame and cache the outcome
pub(crate) fn refresh(landmarks: &[Landmark]) {
    let result = recognize_hand_shape(landmarks);

    let display = if result.letter.is_empty() {
        String::new()
    } else {
        // Small forms compose directly to a glyph; voiced and semi-voiced
        // forms compose to a letter code that still needs the glyph table.
        let composed = complete_character(&result.letter, landmarks);
        to_kana(&composed).map(str::to_string).unwrap_or(composed)
    };

    RECOGNITION_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.result = result;
        state.display = display;
    });
}

/// Drop the cached result (no hand visible)
pub(crate) fn clear() {
    RECOGNITION_STATE.with(|state_cell| {
        *state_cell.borrow_mut() = RecognitionState::default();
    });
}

/// Last result for the overlay renderer
pub(crate) fn last_result() -> RecognitionResult {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().result.clone())
}

// ============================================================================
// WASM-BINDGEN GETTERS
// ============================================================================

/// Letter code of the last recognition ("" when none)
#[wasm_bindgen]
pub fn get_recognized_letter() -> String {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().result.letter.clone())
}

/// Confidence of the last recognition, 0.0–0.9
#[wasm_bindgen]
pub fn get_recognition_confidence() -> f32 {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().result.confidence)
}

/// Voicing zone of the last frame: "none", "voiced", or "semi-voiced"
#[wasm_bindgen]
pub fn get_voicing_type() -> String {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().result.voicing.as_str().to_string())
}

/// Whether the last frame sat in the small-character zone
#[wasm_bindgen]
pub fn get_is_small_character() -> bool {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().result.is_small)
}

/// Composed hiragana for display ("" when nothing was recognized)
#[wasm_bindgen]
pub fn get_display_character() -> String {
    RECOGNITION_STATE.with(|state_cell| state_cell.borrow().display.clone())
}
