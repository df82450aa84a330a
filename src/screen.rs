//! Mapping from normalized landmark coordinates to display pixels.

use std::{fmt, str::FromStr};

use nalgebra::Point2;

/// The target display's size in pixels.
///
/// Queried once at startup and constant for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    width: u32,
    height: u32,
}

impl ScreenBounds {
    /// Creates screen bounds of `width` x `height` pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a normalized position to pixel coordinates by scaling and rounding.
    ///
    /// Stateless and idempotent. No smoothing is applied here – jitter in the landmark source
    /// moves the cursor accordingly.
    pub fn map(&self, pos: Point2<f32>) -> (i32, i32) {
        (
            (pos.x * self.width as f32).round() as i32,
            (pos.y * self.height as f32).round() as i32,
        )
    }
}

/// Parses bounds from a `WIDTHxHEIGHT` string (eg. `1920x1080`).
impl FromStr for ScreenBounds {
    type Err = InvalidScreenBounds;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidScreenBounds(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(err)?;
        let width = w.trim().parse::<u32>().map_err(|_| err())?;
        let height = h.trim().parse::<u32>().map_err(|_| err())?;
        if width == 0 || height == 0 {
            return Err(err());
        }
        Ok(Self { width, height })
    }
}

/// Error returned when parsing a [`ScreenBounds`] string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidScreenBounds(String);

impl fmt::Display for InvalidScreenBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid screen bounds '{}' (expected WIDTHxHEIGHT)",
            self.0
        )
    }
}

impl std::error::Error for InvalidScreenBounds {}
