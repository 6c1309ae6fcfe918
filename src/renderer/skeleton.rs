//! Hand skeleton overlay - bones, joints, and recognition markers
//!
//! Joint colors reflect the recognizer's view of the frame: fingertips are
//! green when the finger reads as extended and red when folded, and the
//! wrist dot picks up the active voicing zone. A ring around the wrist marks
//! the small-character zone.

use super::shapes::{create_circle_vertices, create_line_vertices, create_ring_vertices, Vertex};
use super::state::GPU_STATE;
use crate::bridge;
use crate::recognizer::{
    extract_finger_states, Landmark, VoicingType, HAND_SKELETON, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};

/// Colors for the overlay elements
mod colors {
    /// Extended fingertip
    pub const GREEN: [f32; 4] = [0.2, 1.0, 0.4, 1.0];
    /// Folded fingertip
    pub const RED: [f32; 4] = [1.0, 0.25, 0.25, 1.0];
    /// Non-tip joints
    pub const WHITE: [f32; 4] = [0.9, 0.9, 0.9, 0.8];
    /// Wrist, no voicing modifier
    pub const YELLOW: [f32; 4] = [1.0, 0.9, 0.2, 1.0];
    /// Wrist in the voiced zone
    pub const MAGENTA: [f32; 4] = [1.0, 0.3, 0.9, 1.0];
    /// Wrist in the semi-voiced zone
    pub const BLUE: [f32; 4] = [0.3, 0.6, 1.0, 1.0];
    /// Bones
    pub const CYAN: [f32; 4] = [0.2, 0.9, 0.9, 0.7];
    /// Small-character ring
    pub const ORANGE: [f32; 4] = [1.0, 0.6, 0.1, 0.9];
    /// Transparent clear so the camera feed shows through
    pub const BACKGROUND: wgpu::Color = wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
}

const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Convert normalized landmark (0-1) to clip space (-1 to 1), flip Y
fn to_clip_space(x: f32, y: f32) -> (f32, f32) {
    (x * 2.0 - 1.0, -(y * 2.0 - 1.0))
}

/// Build vertex data for the bone lines
fn build_bone_vertices(landmarks: &[Landmark; LANDMARK_COUNT]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (start_idx, end_idx) in HAND_SKELETON.iter() {
        let start = landmarks[*start_idx];
        let end = landmarks[*end_idx];

        let (x1, y1) = to_clip_space(start.x, start.y);
        let (x2, y2) = to_clip_space(end.x, end.y);

        vertices.extend(create_line_vertices(x1, y1, x2, y2, 0.005, colors::CYAN));
    }

    vertices
}

/// Build vertex data for the joint dots, colored by recognition state
fn build_joint_vertices(landmarks: &[Landmark; LANDMARK_COUNT]) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let states = extract_finger_states(landmarks).as_array();
    let result = bridge::last_result();

    for (idx, lm) in landmarks.iter().enumerate() {
        let (x, y) = to_clip_space(lm.x, lm.y);

        let (color, radius) = if idx == WRIST {
            let color = match result.voicing {
                VoicingType::None => colors::YELLOW,
                VoicingType::Voiced => colors::MAGENTA,
                VoicingType::SemiVoiced => colors::BLUE,
            };
            (color, 0.022)
        } else if let Some(finger) = FINGERTIPS.iter().position(|&tip| tip == idx) {
            let color = if states[finger] { colors::GREEN } else { colors::RED };
            (color, 0.016)
        } else {
            (colors::WHITE, 0.009)
        };

        vertices.extend(create_circle_vertices(x, y, radius, color, 12));
    }

    if result.is_small {
        let wrist = landmarks[WRIST];
        let (x, y) = to_clip_space(wrist.x, wrist.y);
        vertices.extend(create_ring_vertices(x, y, 0.032, 0.040, colors::ORANGE, 24));
    }

    vertices
}

/// Render one overlay frame from the current hand landmarks
pub fn render_frame() {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let mut vertices: Vec<Vertex> = Vec::new();

        if let Some(landmarks) = bridge::get_hand_landmarks() {
            vertices.extend(build_bone_vertices(&landmarks));
            vertices.extend(build_joint_vertices(&landmarks));
        }

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Overlay Encoder"),
            });

        if !vertices.is_empty() {
            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Overlay Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
