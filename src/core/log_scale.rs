use serde::{Deserialize, Serialize};

use crate::core::FieldBounds;
use crate::error::{FilterError, FilterResult};

/// Lower end of the abstract slider position domain.
pub const SLIDER_MIN: f64 = 0.0;
/// Upper end of the abstract slider position domain.
pub const SLIDER_MAX: f64 = 100.0;

/// Bidirectional map between slider positions in `[0, 100]` and currency
/// values on a natural-log scale.
///
/// Property values span orders of magnitude, so the position domain is linear
/// in `ln(value)`: equal position deltas move the value by small absolute
/// amounts near the low end and large absolute amounts near the high end.
/// A zero domain endpoint is remapped to 1 before taking the logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogSliderScale {
    value_min: f64,
    value_max: f64,
}

impl LogSliderScale {
    /// Creates a scale over `[value_min, value_max]`.
    ///
    /// Equal endpoints are permitted: a single-parcel selection collapses the
    /// envelope to one value, which is an expected steady state rather than
    /// an error.
    pub fn new(value_min: f64, value_max: f64) -> FilterResult<Self> {
        if !value_min.is_finite() || !value_max.is_finite() || value_min < 0.0 {
            return Err(FilterError::InvalidData(
                "slider scale domain must be finite and >= 0".to_owned(),
            ));
        }
        if value_min > value_max {
            return Err(FilterError::InvalidRange {
                low: value_min,
                high: value_max,
            });
        }

        Ok(Self {
            value_min,
            value_max,
        })
    }

    pub fn from_bounds(bounds: FieldBounds) -> FilterResult<Self> {
        Self::new(bounds.min, bounds.max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    /// Returns whether the value domain has collapsed to a single value.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.value_min == self.value_max
    }

    /// Maps a slider position to a currency value, rounded to the nearest
    /// whole unit.
    ///
    /// Positions outside `[0, 100]` are clamped into the domain. A degenerate
    /// value domain returns `value_max` for any position.
    #[must_use]
    pub fn position_to_value(self, position: f64) -> f64 {
        if self.is_degenerate() {
            return self.value_max;
        }

        let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
        let (log_min, _) = self.log_endpoints();
        (log_min + self.log_factor() * (position - SLIDER_MIN))
            .exp()
            .round()
    }

    /// Maps a currency value to an unrounded slider position in `[0, 100]`.
    ///
    /// Sub-position precision is deliberate: rounding here would destabilize
    /// position/value round-trips. A degenerate value domain returns the
    /// domain maximum for any value, and a zero log span returns the domain
    /// minimum rather than dividing by zero.
    #[must_use]
    pub fn value_to_position(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return SLIDER_MAX;
        }

        let factor = self.log_factor();
        if factor == 0.0 {
            return SLIDER_MIN;
        }

        let (log_min, _) = self.log_endpoints();
        let position = SLIDER_MIN + (log_input(value).ln() - log_min) / factor;
        position.clamp(SLIDER_MIN, SLIDER_MAX)
    }

    fn log_endpoints(self) -> (f64, f64) {
        (
            log_input(self.value_min).ln(),
            log_input(self.value_max).ln(),
        )
    }

    fn log_factor(self) -> f64 {
        let (log_min, log_max) = self.log_endpoints();
        (log_max - log_min) / (SLIDER_MAX - SLIDER_MIN)
    }
}

/// Remaps an exact zero to 1 so the endpoint stays representable in log space.
fn log_input(value: f64) -> f64 {
    if value == 0.0 { 1.0 } else { value }
}
