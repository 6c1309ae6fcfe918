//! Diagnostic channel for non-fatal recognition faults
//!
//! Bad frames degrade to default results instead of failing; this is the
//! warn-only side channel that makes those degradations observable.

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[fingerspell] {}", msg);
}
