//! Hand landmark storage and JS bridge
//!
//! Receives MediaPipe Hands landmarks from JavaScript once per video frame
//! and stores them for the recognizer and the overlay renderer to read.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::recognizer::{Landmark, LANDMARK_COUNT};

/// Expected flat array length: 21 landmarks × (x, y, z)
const FLAT_LEN: usize = LANDMARK_COUNT * 3;

/// Current frame's hand, if the detector saw one
struct HandFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
    has_data: bool,
}

impl Default for HandFrame {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static HAND_FRAME: RefCell<HandFrame> = RefCell::new(HandFrame::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks × x, y, z). Wrong length warns and leaves state untouched.
/// Stores the frame and refreshes the recognition result.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    if data.len() != FLAT_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid hand landmark data length: {} (expected {})",
                data.len(),
                FLAT_LEN
            )
            .into(),
        );
        return;
    }

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (i, lm) in landmarks.iter_mut().enumerate() {
        *lm = Landmark::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2]);
    }

    HAND_FRAME.with(|frame_cell| {
        let mut frame = frame_cell.borrow_mut();
        frame.landmarks = landmarks;
        frame.has_data = true;
    });

    super::recognition::refresh(&landmarks);
}

/// Called from JavaScript when the detector reports no visible hand
#[wasm_bindgen]
pub fn clear_hand_landmarks() {
    HAND_FRAME.with(|frame_cell| {
        frame_cell.borrow_mut().has_data = false;
    });
    super::recognition::clear();
}

/// Whether a hand frame is currently stored
#[wasm_bindgen]
pub fn has_hand() -> bool {
    HAND_FRAME.with(|frame_cell| frame_cell.borrow().has_data)
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Current landmarks for the renderer
pub fn get_hand_landmarks() -> Option<[Landmark; LANDMARK_COUNT]> {
    HAND_FRAME.with(|frame_cell| {
        let frame = frame_cell.borrow();
        if frame.has_data {
            Some(frame.landmarks)
        } else {
            None
        }
    })
}
