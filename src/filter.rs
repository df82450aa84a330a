//! Value smoothing filters.
//!
//! The gesture pipeline applies no smoothing by default; the [`engine`][crate::engine] can opt
//! into filtering the cursor position with one of these.

/// A filter for values of type `V`.
pub trait Filter<V> {
    /// Adds a new value to the filter, returning the filtered value.
    fn push(&mut self, value: V) -> V;

    /// Resets the filter to its freshly constructed state.
    fn reset(&mut self);
}

/// Exponential Moving Average – a weighted moving average whose weight decreases exponentially.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f32,
    last: Option<f32>,
}

impl Ema {
    /// Creates a new Exponential Moving Average calculator.
    ///
    /// The `alpha` parameter must be between 0.0 and 1.0 and defines how quickly the weight of
    /// older values decays. Values close to 1.0 strongly favor recent values; values close to 0.0
    /// smooth more aggressively (and lag more).
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is outside the 0.0 to 1.0 range.
    pub fn new(alpha: f32) -> Self {
        assert!((0.0..=1.0).contains(&alpha));
        Self { alpha, last: None }
    }
}

impl Filter<f32> for Ema {
    fn push(&mut self, value: f32) -> f32 {
        match self.last {
            Some(last) => {
                let avg = self.alpha * value + (1.0 - self.alpha) * last;
                self.last = Some(avg);
                avg
            }
            None => {
                self.last = Some(value);
                value
            }
        }
    }

    fn reset(&mut self) {
        self.last = None;
    }
}
