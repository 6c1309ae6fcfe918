//! Finger extension classification
//!
//! Classifies each finger as extended or folded from landmark geometry.
//! Image y grows downward, so "above" means a smaller y value. The thumb gets
//! a horizontal spread test instead of the y-chain test because it extends
//! sideways (abduction) rather than upward.

use super::hand::{
    Landmark, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_MCP,
    PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_IP, THUMB_MCP, THUMB_TIP,
};

/// Minimum horizontal tip-to-base offset for the thumb to count as extended
const THUMB_SPREAD_MIN: f32 = 0.1;

/// Extended/folded flags for all five fingers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Pack into a 5-bit code: thumb=bit4, index=bit3, middle=bit2,
    /// ring=bit1, pinky=bit0. The pattern table builds its codes through
    /// this same function, so the bit order is defined in one place.
    pub const fn encode(&self) -> u8 {
        (self.thumb as u8) << 4
            | (self.index as u8) << 3
            | (self.middle as u8) << 2
            | (self.ring as u8) << 1
            | (self.pinky as u8)
    }

    pub fn as_array(&self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

/// Non-thumb finger: tip above PIP and PIP above MCP, so the whole finger
/// extends monotonically rather than just the tip segment.
fn is_finger_extended(landmarks: &[Landmark], tip: usize, pip: usize, mcp: usize) -> bool {
    let tip = landmarks[tip];
    let pip = landmarks[pip];
    let mcp = landmarks[mcp];
    tip.y < pip.y && pip.y < mcp.y
}

/// Thumb: tip above IP, plus enough horizontal spread from the MCP to
/// distinguish abduction from flexion.
fn is_thumb_extended(landmarks: &[Landmark]) -> bool {
    let tip = landmarks[THUMB_TIP];
    let ip = landmarks[THUMB_IP];
    let mcp = landmarks[THUMB_MCP];
    tip.y < ip.y && (tip.x - mcp.x).abs() > THUMB_SPREAD_MIN
}

/// Classify all five fingers. Expects a validated 21-point set.
pub fn extract_finger_states(landmarks: &[Landmark]) -> FingerStates {
    FingerStates {
        thumb: is_thumb_extended(landmarks),
        index: is_finger_extended(landmarks, INDEX_TIP, INDEX_PIP, INDEX_MCP),
        middle: is_finger_extended(landmarks, MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
        ring: is_finger_extended(landmarks, RING_TIP, RING_PIP, RING_MCP),
        pinky: is_finger_extended(landmarks, PINKY_TIP, PINKY_PIP, PINKY_MCP),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::hand::LANDMARK_COUNT;

    /// All joints stacked at the center: nothing reads as extended.
    fn folded_hand() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]
    }

    /// Raise one finger by laying out MCP → PIP → TIP with decreasing y.
    fn raise_finger(hand: &mut [Landmark], tip: usize, pip: usize, mcp: usize) {
        hand[mcp] = Landmark::new(0.5, 0.6, 0.0);
        hand[pip] = Landmark::new(0.5, 0.5, 0.0);
        hand[tip] = Landmark::new(0.5, 0.4, 0.0);
    }

    /// Spread the thumb sideways and above its IP joint.
    fn raise_thumb(hand: &mut [Landmark]) {
        hand[THUMB_MCP] = Landmark::new(0.5, 0.55, 0.0);
        hand[THUMB_IP] = Landmark::new(0.58, 0.5, 0.0);
        hand[THUMB_TIP] = Landmark::new(0.65, 0.45, 0.0);
    }

    #[test]
    fn folded_hand_has_no_extended_fingers() {
        let states = extract_finger_states(&folded_hand());
        assert_eq!(states, FingerStates::default());
        assert_eq!(states.encode(), 0);
    }

    #[test]
    fn index_finger_up() {
        let mut hand = folded_hand();
        raise_finger(&mut hand, INDEX_TIP, INDEX_PIP, INDEX_MCP);
        let states = extract_finger_states(&hand);
        assert!(states.index);
        assert!(!states.thumb && !states.middle && !states.ring && !states.pinky);
        assert_eq!(states.encode(), 0b01000);
    }

    #[test]
    fn thumb_needs_horizontal_spread() {
        // Tip above IP but directly over the MCP: flexed upward, not abducted.
        let mut hand = folded_hand();
        hand[THUMB_MCP] = Landmark::new(0.5, 0.55, 0.0);
        hand[THUMB_IP] = Landmark::new(0.5, 0.5, 0.0);
        hand[THUMB_TIP] = Landmark::new(0.55, 0.45, 0.0);
        assert!(!extract_finger_states(&hand).thumb);

        let mut hand = folded_hand();
        raise_thumb(&mut hand);
        assert!(extract_finger_states(&hand).thumb);
    }

    #[test]
    fn tip_only_displacement_is_not_extension() {
        // Tip above PIP but PIP below MCP: the finger is curled, only the
        // last segment points up.
        let mut hand = folded_hand();
        hand[MIDDLE_MCP] = Landmark::new(0.5, 0.5, 0.0);
        hand[MIDDLE_PIP] = Landmark::new(0.5, 0.55, 0.0);
        hand[MIDDLE_TIP] = Landmark::new(0.5, 0.5, 0.0);
        assert!(!extract_finger_states(&hand).middle);
    }

    #[test]
    fn encode_bit_order() {
        let states = FingerStates {
            thumb: true,
            index: false,
            middle: true,
            ring: false,
            pinky: true,
        };
        assert_eq!(states.encode(), 0b10101);
    }
}
