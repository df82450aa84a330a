//! Per-frame gesture classification.
//!
//! Every predicate in this module is a pure function of a single [`HandObservation`]. There is no
//! temporal smoothing or hysteresis: a hand hovering near a threshold will flip its label on every
//! frame that crosses it. Cross-frame behavior lives in [`tracker`][crate::tracker].
//!
//! The predicates are *independent*, not mutually exclusive – a fist also trips the drag state
//! machine, and a tight pinch can satisfy both the click and double-click checks. Callers must not
//! assume at most one gesture per frame.

use itertools::Itertools;

use crate::geom::manhattan;
use crate::hand::HandObservation;

/// Aggregate fingertip spread below which a hand counts as a fist.
pub const FIST_SPREAD: f32 = 0.1;

/// Minimum Manhattan gap between adjacent fingertip pairs for an open hand.
pub const OPEN_HAND_GAP: f32 = 0.2;

/// Per-axis thumb/index gap below which a pinch (click) is detected.
pub const PINCH_AXIS_GAP: f32 = 0.05;

/// Manhattan thumb/index gap below which a near-pinch (double-click) is detected.
pub const NEAR_PINCH_GAP: f32 = 0.05;

/// The gesture predicates evaluated on one hand in one frame.
///
/// Several flags can be set at once; see the module docs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gestures {
    pub fist: bool,
    pub open_hand: bool,
    pub pinch: bool,
    pub near_pinch: bool,
}

impl Gestures {
    /// Evaluates all predicates on `hand`.
    pub fn classify(hand: &HandObservation) -> Self {
        Self {
            fist: is_fist(hand),
            open_hand: is_open_hand(hand),
            pinch: is_pinch(hand),
            near_pinch: is_near_pinch(hand),
        }
    }
}

/// Whether the fingers are curled into a fist.
///
/// Sums the Manhattan distances between consecutive fingertips (thumb→index, index→middle,
/// middle→ring, ring→pinky); a fist pulls the tips together and drives the aggregate spread below
/// [`FIST_SPREAD`].
pub fn is_fist(hand: &HandObservation) -> bool {
    let spread: f32 = hand
        .fingertips()
        .into_iter()
        .tuple_windows()
        .map(|(a, b)| manhattan(a, b))
        .sum();
    spread < FIST_SPREAD
}

/// Whether the fingers are spread into an open hand.
///
/// Requires *both* the thumb/index and the index/middle gaps to exceed [`OPEN_HAND_GAP`]; a large
/// spread of one pair alone does not count.
pub fn is_open_hand(hand: &HandObservation) -> bool {
    let [thumb, index, middle, _, _] = hand.fingertips();
    manhattan(thumb, index) > OPEN_HAND_GAP && manhattan(index, middle) > OPEN_HAND_GAP
}

/// Whether thumb and index fingertip are pinched together (the click trigger).
///
/// Unlike the other predicates this one is componentwise: each axis gap must stay below
/// [`PINCH_AXIS_GAP`] on its own. A diagonal gap of (0.04, 0.04) therefore still pinches even
/// though its Manhattan sum exceeds the [`is_near_pinch`] bound.
pub fn is_pinch(hand: &HandObservation) -> bool {
    let thumb = hand.thumb_tip();
    let index = hand.index_tip();
    (index.x - thumb.x).abs() < PINCH_AXIS_GAP && (index.y - thumb.y).abs() < PINCH_AXIS_GAP
}

/// Whether thumb and index fingertip are nearly touching (the double-click trigger).
///
/// Uses the Manhattan distance with the tighter [`NEAR_PINCH_GAP`] bound, so this implies
/// [`is_pinch`] but not the other way around.
pub fn is_near_pinch(hand: &HandObservation) -> bool {
    manhattan(hand.index_tip(), hand.thumb_tip()) < NEAR_PINCH_GAP
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use crate::hand::test_support::hand_with;
    use crate::hand::LandmarkIdx::*;

    use super::*;

    #[test]
    fn coinciding_fingertips_are_a_fist() {
        // `hand_with` puts every landmark on the same point: zero spread.
        let hand = hand_with(&[]);
        assert!(is_fist(&hand));
        assert!(!is_open_hand(&hand));
    }

    #[test]
    fn spread_fingertips_are_not_a_fist() {
        let hand = hand_with(&[
            (ThumbTip, point![0.1, 0.5]),
            (IndexFingerTip, point![0.3, 0.3]),
            (MiddleFingerTip, point![0.5, 0.25]),
            (RingFingerTip, point![0.7, 0.3]),
            (PinkyTip, point![0.9, 0.5]),
        ]);
        assert!(!is_fist(&hand));
    }

    #[test]
    fn open_hand_requires_both_gaps() {
        // Thumb far from index, but index and middle together: not open.
        let hand = hand_with(&[
            (ThumbTip, point![0.1, 0.1]),
            (IndexFingerTip, point![0.5, 0.5]),
            (MiddleFingerTip, point![0.5, 0.5]),
        ]);
        assert!(!is_open_hand(&hand));

        let hand = hand_with(&[
            (ThumbTip, point![0.1, 0.1]),
            (IndexFingerTip, point![0.5, 0.5]),
            (MiddleFingerTip, point![0.8, 0.8]),
        ]);
        assert!(is_open_hand(&hand));
    }

    #[test]
    fn predicates_are_independent() {
        // Wide open hand: aggregate fingertip spread is also above the fist bound, so the two
        // predicates disagree as expected, but both were evaluated on the same observation.
        let hand = hand_with(&[
            (ThumbTip, point![0.1, 0.1]),
            (IndexFingerTip, point![0.4, 0.4]),
            (MiddleFingerTip, point![0.7, 0.7]),
        ]);
        let gestures = Gestures::classify(&hand);
        assert!(gestures.open_hand);
        assert!(!gestures.fist);
        assert!(!gestures.pinch);
    }

    #[test]
    fn diagonal_pinch_is_not_a_near_pinch() {
        // Componentwise gaps of 0.04 pass the pinch check, but the Manhattan sum of 0.08
        // exceeds the near-pinch bound.
        let hand = hand_with(&[
            (ThumbTip, point![0.5, 0.5]),
            (IndexFingerTip, point![0.54, 0.54]),
        ]);
        assert!(is_pinch(&hand));
        assert!(!is_near_pinch(&hand));
    }

    #[test]
    fn near_pinch_implies_pinch() {
        let hand = hand_with(&[
            (ThumbTip, point![0.5, 0.5]),
            (IndexFingerTip, point![0.52, 0.51]),
        ]);
        assert!(is_near_pinch(&hand));
        assert!(is_pinch(&hand));
    }
}
