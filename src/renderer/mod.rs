//! Renderer module - WebGPU hand skeleton overlay
//!
//! Re-exports only. All logic in submodules.

mod shapes;
mod skeleton;
mod state;

pub use skeleton::render_frame;
pub use state::{initialize_gpu, GpuStateError};
