use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// The three coupled currency fields carried by every parcel.
///
/// `Capital` is the total; `Land` and `Improvements` are its components
/// (`capital = land + improvements` on well-formed valuation records).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueField {
    Capital,
    Land,
    Improvements,
}

impl ValueField {
    pub const ALL: [Self; 3] = [Self::Capital, Self::Land, Self::Improvements];

    /// Returns whether this field is one of the two component fields.
    #[must_use]
    pub const fn is_component(self) -> bool {
        !matches!(self, Self::Capital)
    }
}

/// Uniform record holding one value per `ValueField`.
///
/// Replaces the dynamic field-name iteration of ad-hoc filter state with a
/// closed set and typed access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PerField<T> {
    pub capital: T,
    pub land: T,
    pub improvements: T,
}

impl<T> PerField<T> {
    #[must_use]
    pub fn get(&self, field: ValueField) -> &T {
        match field {
            ValueField::Capital => &self.capital,
            ValueField::Land => &self.land,
            ValueField::Improvements => &self.improvements,
        }
    }

    pub fn get_mut(&mut self, field: ValueField) -> &mut T {
        match field {
            ValueField::Capital => &mut self.capital,
            ValueField::Land => &mut self.land,
            ValueField::Improvements => &mut self.improvements,
        }
    }

    pub fn from_fn(mut build: impl FnMut(ValueField) -> T) -> Self {
        Self {
            capital: build(ValueField::Capital),
            land: build(ValueField::Land),
            improvements: build(ValueField::Improvements),
        }
    }

    pub fn try_from_fn(
        mut build: impl FnMut(ValueField) -> FilterResult<T>,
    ) -> FilterResult<Self> {
        Ok(Self {
            capital: build(ValueField::Capital)?,
            land: build(ValueField::Land)?,
            improvements: build(ValueField::Improvements)?,
        })
    }
}

/// The `[min, max]` real-value envelope for one field, scoped to the
/// currently selected parcels.
///
/// Both endpoints are zero when no parcel matches the selection; callers must
/// treat that as "no data", not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub fn new(min: f64, max: f64) -> FilterResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(FilterError::InvalidRange {
                low: min,
                high: max,
            });
        }
        Ok(Self { min, max })
    }

    /// Returns whether the envelope has collapsed to a single value.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn full_range(self) -> ValueRange {
        ValueRange {
            low: self.min,
            high: self.max,
        }
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// An inclusive `[low, high]` filter range in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueRange {
    pub low: f64,
    pub high: f64,
}

impl ValueRange {
    /// Builds a range from two finite endpoints, swapping a reversed pair.
    pub fn new(low: f64, high: f64) -> FilterResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(FilterError::InvalidRange { low, high });
        }
        Ok(Self {
            low: low.min(high),
            high: low.max(high),
        })
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Clamps both endpoints into the given bounds.
    #[must_use]
    pub fn clamp_to(self, bounds: FieldBounds) -> Self {
        Self {
            low: bounds.clamp(self.low),
            high: bounds.clamp(self.high),
        }
    }
}

/// A `[low, high]` pair in the abstract slider domain `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PositionRange {
    pub low: f64,
    pub high: f64,
}

impl PositionRange {
    /// Builds a position pair from two finite endpoints, swapping a reversed pair.
    pub fn new(low: f64, high: f64) -> FilterResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(FilterError::InvalidRange { low, high });
        }
        Ok(Self {
            low: low.min(high),
            high: low.max(high),
        })
    }
}
