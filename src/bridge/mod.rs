//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod recognition;

pub use landmarks::{
    // WASM entry points
    update_hand_landmarks,
    clear_hand_landmarks,
    has_hand,
    // Internal API
    get_hand_landmarks,
};

pub use recognition::{
    get_display_character, get_is_small_character, get_recognition_confidence,
    get_recognized_letter, get_voicing_type,
};

pub(crate) use recognition::last_result;
