//! Hand-gesture pointer control.
//!
//! `handctl` turns a stream of per-frame hand landmark observations (21 normalized 2D points per
//! hand, as produced by common hand pose estimation networks) into discrete pointer and input
//! intents: cursor movement, clicks, drags, scrolling and volume changes.
//!
//! The crate deliberately stops at both ends of the pipeline: landmark inference is consumed
//! through the [`source::LandmarkSource`] trait, and OS input injection happens behind the
//! [`intent::Dispatcher`] trait. Everything in between – gesture classification, the drag state
//! machine, coordinate mapping – is pure, synchronous, and testable without a camera.
//!
//! # Coordinates
//!
//! Landmark coordinates are normalized image coordinates: X points right, Y points *down*, both in
//! the range 0.0 to 1.0. Screen coordinates are pixels with the same orientation.
//!
//! # Environment Variables
//!
//! The demo binary reads its configuration from environment variables:
//!
//! * `HANDCTL_SCREEN`: Target display size as `WIDTHxHEIGHT` (eg. `2560x1440`). Defaults to
//!   `1920x1080` if unset.
//! * `HANDCTL_SMOOTHING`: When set to an EMA alpha value between 0.0 and 1.0, cursor positions are
//!   smoothed with an exponential moving average before mapping to the screen. Unset means no
//!   smoothing, which is the default behavior (landmark jitter propagates to the cursor).

use log::LevelFilter;

pub mod engine;
pub mod filter;
pub mod geom;
pub mod gesture;
pub mod hand;
pub mod intent;
pub mod screen;
pub mod source;
pub mod timer;
pub mod tracker;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `handctl` will log at *debug* level; `RUST_LOG` can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
