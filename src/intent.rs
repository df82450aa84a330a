//! Input intents and the dispatch boundary.
//!
//! An [`Intent`] is a fully decided, dispatch-ready input action. The core emits intents as plain
//! values; actually injecting them into the OS is the job of a [`Dispatcher`] implementation
//! supplied by the embedding application, which keeps the classification logic testable without
//! touching the pointer.

use std::fmt;

/// A discrete pointer or input action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Move the cursor to an absolute pixel position.
    MoveCursor { x: i32, y: i32 },
    /// Press and release the primary mouse button.
    Click,
    /// Press and release the secondary mouse button.
    RightClick,
    /// Double-press the primary mouse button.
    DoubleClick,
    /// Move the cursor by a relative pixel offset with the button held.
    Drag { dx: f32, dy: f32 },
    /// Scroll by the given number of steps (positive scrolls up).
    Scroll(i32),
    /// Raise the system volume one step.
    VolumeUp,
    /// Lower the system volume one step.
    VolumeDown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::MoveCursor { x, y } => write!(f, "move-cursor {x},{y}"),
            Intent::Click => f.write_str("click"),
            Intent::RightClick => f.write_str("right-click"),
            Intent::DoubleClick => f.write_str("double-click"),
            Intent::Drag { dx, dy } => write!(f, "drag {dx:+.1},{dy:+.1}"),
            Intent::Scroll(amount) => write!(f, "scroll {amount:+}"),
            Intent::VolumeUp => f.write_str("volume-up"),
            Intent::VolumeDown => f.write_str("volume-down"),
        }
    }
}

/// Receives intents and performs the corresponding OS-level input action.
///
/// Dispatch is fire-and-forget: injection failures have no error channel back into the gesture
/// pipeline and must be handled (or ignored) by the implementation.
pub trait Dispatcher {
    fn dispatch(&mut self, intent: Intent);
}

/// Collecting intents into a `Vec` – mainly useful in tests.
impl Dispatcher for Vec<Intent> {
    fn dispatch(&mut self, intent: Intent) {
        self.push(intent);
    }
}

/// A [`Dispatcher`] that logs every intent instead of injecting input.
///
/// Used by the demo binary; also handy for dry-running a landmark recording.
#[derive(Debug, Default)]
pub struct LogDispatcher;

impl Dispatcher for LogDispatcher {
    fn dispatch(&mut self, intent: Intent) {
        log::info!("intent: {intent}");
    }
}
