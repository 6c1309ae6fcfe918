//! Fingerspell Web - JSL finger-spelling recognition from hand landmarks
//!
//! WASM module driven from JavaScript: the host page runs MediaPipe Hands,
//! pushes each frame's landmarks across the bridge, and reads back the
//! recognized kana. The recognition core in `recognizer` is pure Rust and
//! also builds natively for testing.
//!
//! Entry point file only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod diag;
pub mod recognizer;

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use bridge::{
    clear_hand_landmarks, get_display_character, get_is_small_character,
    get_recognition_confidence, get_recognized_letter, get_voicing_type, has_hand,
    update_hand_landmarks,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WebGPU overlay - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    web_sys::console::log_1(&"Fingerspell overlay initialized".into());
    Ok(())
}

/// Render one overlay frame with the current landmarks
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}
