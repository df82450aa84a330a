//! Cross-frame gesture state tracking.
//!
//! [`GestureTracker`] turns the instantaneous per-frame predicates from
//! [`gesture`][crate::gesture] into input intents. It owns all state that survives a frame: the
//! drag state machine and the previous vertical position used for volume control. One tracker per
//! logical pointer; it is updated strictly sequentially, once per hand per frame.

use nalgebra::Point2;

use crate::gesture::Gestures;
use crate::hand::HandObservation;
use crate::intent::Intent;
use crate::screen::ScreenBounds;

/// Scroll steps emitted per open-hand frame. Always positive; there is no downward scroll
/// gesture in this design.
pub const SCROLL_STEP: i32 = 5;

/// Minimum per-frame vertical movement of the index tip that changes the volume.
///
/// The threshold applies to the raw frame-to-frame delta, not to velocity, so the effective
/// sensitivity scales with the frame rate of the landmark source.
pub const VOLUME_STEP: f32 = 0.02;

/// State of the drag gesture.
///
/// The anchor position only exists while a drag is in progress, which is exactly what the enum
/// encodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: Point2<f32> },
}

/// Tracks gesture state across frames and emits intents for each processed hand.
#[derive(Debug)]
pub struct GestureTracker {
    drag: DragState,
    last_vertical_pos: Option<f32>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
            last_vertical_pos: None,
        }
    }

    /// Returns the current drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Processes one hand observation, appending the frame's intents to `intents`.
    ///
    /// `cursor` is the position the cursor should move to (normally the index tip, possibly
    /// smoothed by the caller); the drag and volume state machines always use the unsmoothed
    /// index tip from `hand`.
    ///
    /// Intents are emitted in a fixed order: cursor move, click, right-click, scroll,
    /// double-click, drag, volume. Every check that matches fires – the gestures are layered, not
    /// mutually exclusive, so a single fist frame produces both a `RightClick` and a drag state
    /// transition.
    pub fn update(
        &mut self,
        hand: &HandObservation,
        cursor: Point2<f32>,
        screen: ScreenBounds,
        intents: &mut Vec<Intent>,
    ) {
        let gestures = Gestures::classify(hand);
        let index_tip = hand.index_tip();

        let (x, y) = screen.map(cursor);
        intents.push(Intent::MoveCursor { x, y });

        if gestures.pinch {
            intents.push(Intent::Click);
        }
        if gestures.fist {
            intents.push(Intent::RightClick);
        }
        if gestures.open_hand {
            intents.push(Intent::Scroll(SCROLL_STEP));
        }
        if gestures.near_pinch {
            intents.push(Intent::DoubleClick);
        }

        self.update_drag(gestures.fist, index_tip, screen, intents);
        self.update_volume(index_tip.y, intents);
    }

    /// Advances the drag state machine.
    ///
    /// Edge-triggered: entering the fist records the anchor, releasing it emits a single
    /// [`Intent::Drag`] covering the whole movement. No incremental deltas are emitted while the
    /// fist is held.
    fn update_drag(
        &mut self,
        fist: bool,
        index_tip: Point2<f32>,
        screen: ScreenBounds,
        intents: &mut Vec<Intent>,
    ) {
        match (self.drag, fist) {
            (DragState::Idle, true) => {
                log::trace!("drag start, anchor at {index_tip:?}");
                self.drag = DragState::Dragging { anchor: index_tip };
            }
            (DragState::Dragging { anchor }, false) => {
                let dx = (index_tip.x - anchor.x) * screen.width() as f32;
                let dy = (index_tip.y - anchor.y) * screen.height() as f32;
                log::trace!("drag end, delta ({dx}, {dy})");
                intents.push(Intent::Drag { dx, dy });
                self.drag = DragState::Idle;
            }
            _ => {}
        }
    }

    /// Emits a volume intent when the index tip moved vertically by more than [`VOLUME_STEP`]
    /// since the previous frame. The first observed frame only seeds the reference position.
    fn update_volume(&mut self, y: f32, intents: &mut Vec<Intent>) {
        if let Some(last) = self.last_vertical_pos {
            if y - last > VOLUME_STEP {
                intents.push(Intent::VolumeUp);
            } else if last - y > VOLUME_STEP {
                intents.push(Intent::VolumeDown);
            }
        }
        self.last_vertical_pos = Some(y);
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}
