//! The per-frame pipeline and run loop.

use nalgebra::point;

use crate::filter::Filter;
use crate::hand::HandObservation;
use crate::intent::{Dispatcher, Intent};
use crate::screen::ScreenBounds;
use crate::source::{FrameResult, LandmarkSource};
use crate::timer::FpsCounter;
use crate::tracker::GestureTracker;

/// Drives the gesture pipeline: classifies each detected hand, updates the tracker, and produces
/// the frame's intents.
///
/// The engine is single-threaded by construction; every frame is one synchronous pass over the
/// detected hands. All hands in a frame share one [`GestureTracker`], matching a setup where one
/// pointer is controlled no matter how many hands are in view.
pub struct Engine {
    tracker: GestureTracker,
    screen: ScreenBounds,
    cursor_filter: Option<[Box<dyn Filter<f32> + Send>; 2]>,
}

impl Engine {
    /// Creates an engine targeting a display of the given size.
    pub fn new(screen: ScreenBounds) -> Self {
        Self {
            tracker: GestureTracker::new(),
            screen,
            cursor_filter: None,
        }
    }

    /// Smooths cursor positions with per-axis copies of `filter` before they are mapped to the
    /// screen.
    ///
    /// Only [`Intent::MoveCursor`] is affected; the gesture predicates and the drag and volume
    /// state machines keep operating on the raw landmark positions. By default no filter is set
    /// and landmark jitter moves the cursor directly.
    pub fn set_cursor_filter<F>(&mut self, filter: F)
    where
        F: Filter<f32> + Clone + Send + 'static,
    {
        self.cursor_filter = Some([Box::new(filter.clone()), Box::new(filter)]);
    }

    /// Returns the gesture tracker holding the cross-frame state.
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// Processes one frame's observations and returns the intents to dispatch, in order.
    ///
    /// A frame without hands yields no intents and leaves all tracker state untouched.
    pub fn process_frame(&mut self, hands: &[HandObservation]) -> Vec<Intent> {
        let mut intents = Vec::new();
        for hand in hands {
            let mut cursor = hand.index_tip();
            if let Some([fx, fy]) = &mut self.cursor_filter {
                cursor = point![fx.push(cursor.x), fy.push(cursor.y)];
            }
            self.tracker
                .update(hand, cursor, self.screen, &mut intents);
        }
        intents
    }

    /// Runs the polling loop until the source is exhausted or `should_exit` returns `true`.
    ///
    /// One iteration is one blocking [`LandmarkSource::next_frame`] call followed by a full
    /// classify-and-dispatch pass. The exit condition is checked once per iteration.
    pub fn run<S, D, F>(&mut self, source: &mut S, dispatcher: &mut D, mut should_exit: F)
    where
        S: LandmarkSource,
        D: Dispatcher,
        F: FnMut() -> bool,
    {
        let mut fps = FpsCounter::new("gesture engine");
        loop {
            if should_exit() {
                log::debug!("exit requested, stopping");
                return;
            }
            let hands = match source.next_frame() {
                FrameResult::Frame(hands) => hands,
                FrameResult::NoFrame => {
                    log::debug!("landmark source exhausted, stopping");
                    return;
                }
            };

            for intent in self.process_frame(&hands) {
                dispatcher.dispatch(intent);
            }
            fps.tick();
        }
    }
}
