//! Hand observation data model.

use std::fmt;

use nalgebra::Point2;

/// The number of landmarks in a [`HandObservation`].
pub const NUM_LANDMARKS: usize = 21;

/// Names for the hand landmarks, following the common 21-point hand pose convention.
///
/// Fingertips sit at indices 4 (thumb), 8 (index), 12 (middle), 16 (ring) and 20 (pinky). The
/// joints in between follow the anatomical ordering from the palm outwards (MCP, PIP, DIP, tip;
/// CMC/MCP/IP for the thumb).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The five fingertip landmarks, thumb first.
pub const FINGERTIPS: [LandmarkIdx; 5] = {
    use LandmarkIdx::*;
    [ThumbTip, IndexFingerTip, MiddleFingerTip, RingFingerTip, PinkyTip]
};

/// A single detected hand: exactly [`NUM_LANDMARKS`] positions in normalized image coordinates.
///
/// Positions are expected to lie in the unit square, but nothing is enforced beyond the landmark
/// count – estimation networks routinely place occluded landmarks slightly outside the image.
/// Observations are immutable and live for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    landmarks: [Point2<f32>; NUM_LANDMARKS],
}

impl HandObservation {
    /// Creates a hand observation from a list of landmark positions.
    ///
    /// Returns [`MalformedHand`] if `points` does not contain exactly [`NUM_LANDMARKS`] entries.
    pub fn new(points: &[Point2<f32>]) -> Result<Self, MalformedHand> {
        match <[Point2<f32>; NUM_LANDMARKS]>::try_from(points) {
            Ok(landmarks) => Ok(Self { landmarks }),
            Err(_) => Err(MalformedHand { len: points.len() }),
        }
    }

    /// Returns the position of `landmark`.
    #[inline]
    pub fn position(&self, landmark: LandmarkIdx) -> Point2<f32> {
        self.landmarks[landmark as usize]
    }

    /// Returns the position of the index fingertip, the landmark the cursor follows.
    #[inline]
    pub fn index_tip(&self) -> Point2<f32> {
        self.position(LandmarkIdx::IndexFingerTip)
    }

    /// Returns the position of the thumb tip.
    #[inline]
    pub fn thumb_tip(&self) -> Point2<f32> {
        self.position(LandmarkIdx::ThumbTip)
    }

    /// Returns the five fingertip positions, thumb first.
    pub fn fingertips(&self) -> [Point2<f32>; 5] {
        FINGERTIPS.map(|lm| self.position(lm))
    }
}

/// Error returned by [`HandObservation::new`] when the landmark count is wrong.
///
/// Whether a malformed hand aborts the pipeline is up to the caller; the [`engine`][crate::engine]
/// skips such hands and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedHand {
    len: usize,
}

impl fmt::Display for MalformedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} hand landmarks, got {}",
            NUM_LANDMARKS, self.len
        )
    }
}

impl std::error::Error for MalformedHand {}
