//! End-to-end tests of the gesture pipeline: scripted landmark frames in, dispatched intents out.

use approx::assert_relative_eq;
use nalgebra::{point, Point2};

use handctl::engine::Engine;
use handctl::hand::{HandObservation, LandmarkIdx, NUM_LANDMARKS};
use handctl::intent::Intent;
use handctl::screen::ScreenBounds;
use handctl::source::{FrameResult, LandmarkSource};
use handctl::tracker::SCROLL_STEP;

struct ScriptedSource {
    frames: std::vec::IntoIter<Vec<HandObservation>>,
}

impl ScriptedSource {
    fn new(frames: Vec<Vec<HandObservation>>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl LandmarkSource for ScriptedSource {
    fn next_frame(&mut self) -> FrameResult {
        match self.frames.next() {
            Some(hands) => FrameResult::Frame(hands),
            None => FrameResult::NoFrame,
        }
    }
}

fn hand_with(overrides: &[(LandmarkIdx, Point2<f32>)]) -> HandObservation {
    let mut points = [point![0.5, 0.5]; NUM_LANDMARKS];
    for &(lm, pos) in overrides {
        points[lm as usize] = pos;
    }
    HandObservation::new(&points).unwrap()
}

/// A fist: all five fingertips on the same point.
fn fist_at(pos: Point2<f32>) -> HandObservation {
    use LandmarkIdx::*;
    hand_with(&[
        (ThumbTip, pos),
        (IndexFingerTip, pos),
        (MiddleFingerTip, pos),
        (RingFingerTip, pos),
        (PinkyTip, pos),
    ])
}

/// A relaxed hand that triggers no gesture, index tip at `pos`.
fn neutral_at(pos: Point2<f32>) -> HandObservation {
    use LandmarkIdx::*;
    hand_with(&[
        (ThumbTip, point![pos.x - 0.1, pos.y]),
        (IndexFingerTip, pos),
        (MiddleFingerTip, point![pos.x + 0.1, pos.y]),
        (RingFingerTip, point![pos.x + 0.2, pos.y]),
        (PinkyTip, point![pos.x + 0.3, pos.y]),
    ])
}

#[test]
fn drag_sequence_dispatches_a_single_drag() {
    let mut source = ScriptedSource::new(vec![
        vec![fist_at(point![0.5, 0.5])],
        vec![fist_at(point![0.5, 0.5])],
        vec![fist_at(point![0.5, 0.5])],
        vec![neutral_at(point![0.6, 0.5])],
    ]);
    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    let mut dispatched: Vec<Intent> = Vec::new();

    engine.run(&mut source, &mut dispatched, || false);

    let drags: Vec<_> = dispatched
        .iter()
        .filter(|i| matches!(i, Intent::Drag { .. }))
        .collect();
    assert_eq!(drags.len(), 1, "exactly one drag: {dispatched:?}");
    match drags[0] {
        Intent::Drag { dx, dy } => {
            assert_relative_eq!(*dx, 100.0, epsilon = 1e-3);
            assert_relative_eq!(*dy, 0.0, epsilon = 1e-3);
        }
        _ => unreachable!(),
    }

    // The three fist frames each emit a right-click alongside the drag tracking.
    let right_clicks = dispatched
        .iter()
        .filter(|i| matches!(i, Intent::RightClick))
        .count();
    assert_eq!(right_clicks, 3);
}

#[test]
fn volume_follows_vertical_movement() {
    let mut source = ScriptedSource::new(vec![
        vec![neutral_at(point![0.5, 0.5])],
        vec![neutral_at(point![0.5, 0.53])],
        vec![neutral_at(point![0.5, 0.50])],
    ]);
    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    let mut dispatched: Vec<Intent> = Vec::new();

    engine.run(&mut source, &mut dispatched, || false);

    let volume: Vec<_> = dispatched
        .iter()
        .filter(|i| matches!(i, Intent::VolumeUp | Intent::VolumeDown))
        .collect();
    assert_eq!(volume, vec![&Intent::VolumeUp, &Intent::VolumeDown]);
}

#[test]
fn pinch_clicks_without_double_clicking() {
    use LandmarkIdx::*;
    // Componentwise gap (0.04, 0.04): inside the per-axis pinch bound, outside the Manhattan
    // near-pinch bound.
    let hand = hand_with(&[
        (ThumbTip, point![0.5, 0.5]),
        (IndexFingerTip, point![0.54, 0.54]),
    ]);

    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    let intents = engine.process_frame(&[hand]);

    assert!(intents.contains(&Intent::Click));
    assert!(!intents.contains(&Intent::DoubleClick));
}

#[test]
fn open_hand_keeps_scrolling_up() {
    use LandmarkIdx::*;
    let open = hand_with(&[
        (ThumbTip, point![0.2, 0.5]),
        (IndexFingerTip, point![0.5, 0.5]),
        (MiddleFingerTip, point![0.8, 0.5]),
    ]);

    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    for _ in 0..3 {
        let intents = engine.process_frame(&[open.clone()]);
        assert!(intents.contains(&Intent::Scroll(SCROLL_STEP)));
    }
}

#[test]
fn intents_are_dispatched_in_frame_order() {
    // A fist whose fingertips coincide also satisfies pinch and near-pinch; the intent order
    // within the frame is fixed.
    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    let intents = engine.process_frame(&[fist_at(point![0.25, 0.75])]);

    assert_eq!(
        intents,
        vec![
            Intent::MoveCursor { x: 250, y: 750 },
            Intent::Click,
            Intent::RightClick,
            Intent::DoubleClick,
        ]
    );
}

#[test]
fn zero_hand_frames_dispatch_nothing() {
    let mut source = ScriptedSource::new(vec![Vec::new(), Vec::new()]);
    let mut engine = Engine::new(ScreenBounds::new(1000, 1000));
    let mut dispatched: Vec<Intent> = Vec::new();

    engine.run(&mut source, &mut dispatched, || false);
    assert!(dispatched.is_empty());
}
