//! Hand landmark data model and validation
//!
//! MediaPipe Hands delivers 21 points per hand in a fixed joint order.
//! Validation rejects malformed sets (wrong count, non-finite coordinates);
//! finite out-of-range values pass and are clamped where they are consumed.

use std::fmt;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Points per hand in the MediaPipe Hands model
pub const LANDMARK_COUNT: usize = 21;

/// Hand skeleton connections for the overlay renderer
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (INDEX_MCP, MIDDLE_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked hand point (x, y normalized to the image, z relative depth)
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Reasons a landmark set cannot be used for recognition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    /// Set absent or not exactly 21 points
    InvalidLandmarkCount(usize),
    /// A coordinate is NaN or infinite
    InvalidCoordinate(usize),
    /// Wrist or middle fingertip unusable as a position reference
    MissingReferenceLandmark,
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::InvalidLandmarkCount(n) => {
                write!(f, "invalid landmark count: {} (expected {})", n, LANDMARK_COUNT)
            }
            LandmarkError::InvalidCoordinate(i) => {
                write!(f, "non-finite coordinate at landmark {}", i)
            }
            LandmarkError::MissingReferenceLandmark => {
                write!(f, "wrist or middle fingertip unavailable")
            }
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check a candidate landmark set before recognition.
///
/// Finite values outside [0, 1] are accepted; consumers that need normalized
/// coordinates clamp them instead.
pub fn validate_landmarks(landmarks: &[Landmark]) -> Result<(), LandmarkError> {
    if landmarks.len() != LANDMARK_COUNT {
        return Err(LandmarkError::InvalidLandmarkCount(landmarks.len()));
    }
    for (i, lm) in landmarks.iter().enumerate() {
        if !lm.is_finite() {
            return Err(LandmarkError::InvalidCoordinate(i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_hand() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]
    }

    #[test]
    fn accepts_well_formed_set() {
        assert_eq!(validate_landmarks(&centered_hand()), Ok(()));
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            validate_landmarks(&[]),
            Err(LandmarkError::InvalidLandmarkCount(0))
        );
        assert_eq!(
            validate_landmarks(&centered_hand()[..20]),
            Err(LandmarkError::InvalidLandmarkCount(20))
        );
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut hand = centered_hand();
        hand[INDEX_TIP].y = f32::NAN;
        assert_eq!(
            validate_landmarks(&hand),
            Err(LandmarkError::InvalidCoordinate(INDEX_TIP))
        );

        let mut hand = centered_hand();
        hand[WRIST].z = f32::INFINITY;
        assert_eq!(
            validate_landmarks(&hand),
            Err(LandmarkError::InvalidCoordinate(WRIST))
        );
    }

    #[test]
    fn out_of_range_but_finite_is_accepted() {
        let mut hand = centered_hand();
        hand[THUMB_TIP].x = 1.4;
        hand[PINKY_TIP].y = -0.2;
        assert_eq!(validate_landmarks(&hand), Ok(()));
    }
}
