//! The landmark source boundary.
//!
//! Landmark inference (camera capture plus a hand pose network) is an external collaborator. The
//! core only requires something that yields, once per tick, the hands detected in the current
//! frame. [`StdinSource`] is a trivial implementation for piping in recorded landmark data.

use std::io::BufRead;

use itertools::Itertools;
use nalgebra::point;

use crate::hand::{HandObservation, NUM_LANDMARKS};

/// The result of polling a [`LandmarkSource`] for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameResult {
    /// The source is exhausted (camera closed, recording ended). Terminates the run loop; this is
    /// the normal shutdown path, not an error.
    NoFrame,
    /// One frame's worth of detected hands. May be empty.
    Frame(Vec<HandObservation>),
}

/// Produces hand observations, one batch per video frame.
pub trait LandmarkSource {
    /// Returns the next frame's observations, blocking until one is available.
    fn next_frame(&mut self) -> FrameResult;
}

/// Reads landmark frames from a line-oriented reader (typically stdin).
///
/// Each input line is one frame: a whitespace-separated list of floats, 42 per hand
/// (x y pairs for the 21 landmarks, in the conventional order). An empty line is a frame with no
/// detected hands. Hands with a wrong coordinate count, or lines with unparseable numbers, are
/// skipped with a warning. EOF ends the stream.
pub struct StdinSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> StdinSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    fn parse_frame(&self) -> Vec<HandObservation> {
        let mut hands = Vec::new();
        for chunk in &self.line.split_whitespace().chunks(NUM_LANDMARKS * 2) {
            let mut points = Vec::with_capacity(NUM_LANDMARKS);
            let mut ok = true;
            for (x, y) in chunk.tuples() {
                match (x.parse::<f32>(), y.parse::<f32>()) {
                    (Ok(x), Ok(y)) => points.push(point![x, y]),
                    _ => {
                        log::warn!("skipping hand with unparseable coordinates ({x:?}, {y:?})");
                        ok = false;
                        break;
                    }
                }
            }
            if !ok {
                continue;
            }
            match HandObservation::new(&points) {
                Ok(hand) => hands.push(hand),
                Err(e) => log::warn!("skipping malformed hand: {e}"),
            }
        }
        hands
    }
}

impl<R: BufRead> LandmarkSource for StdinSource<R> {
    fn next_frame(&mut self) -> FrameResult {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => FrameResult::NoFrame,
            Ok(_) => FrameResult::Frame(self.parse_frame()),
            Err(e) => {
                log::error!("landmark source read error: {e}");
                FrameResult::NoFrame
            }
        }
    }
}
