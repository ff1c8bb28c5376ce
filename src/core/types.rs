use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ValueField;
use crate::core::primitives::decimal_to_f64;
use crate::error::{FilterError, FilterResult};

/// Stable identifier assigned to a parcel by the upstream record source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ParcelId(u64);

impl ParcelId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One rateable property record, immutable once loaded.
///
/// Currency fields are whole currency units. `geometry` is an opaque GeoJSON
/// payload carried through for the renderer; the filter core never inspects
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: ParcelId,
    pub address: String,
    pub capital_value: f64,
    pub land_value: f64,
    pub improvements_value: f64,
    pub land_use: Option<String>,
    #[serde(default)]
    pub valuation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub geometry: serde_json::Value,
}

impl Parcel {
    /// Builds a validated parcel from raw floating currency values.
    ///
    /// Invariants:
    /// - all three currency values are finite
    /// - all three currency values are >= 0
    pub fn new(
        id: ParcelId,
        address: impl Into<String>,
        capital_value: f64,
        land_value: f64,
        improvements_value: f64,
        land_use: Option<String>,
    ) -> FilterResult<Self> {
        let parcel = Self {
            id,
            address: address.into(),
            capital_value,
            land_value,
            improvements_value,
            land_use,
            valuation_date: None,
            geometry: serde_json::Value::Null,
        };

        if !parcel.is_valid() {
            return Err(FilterError::InvalidData(format!(
                "parcel {} currency values must be finite and >= 0",
                id.raw()
            )));
        }
        Ok(parcel)
    }

    /// Builds a validated parcel from upstream `Decimal` currency values.
    pub fn from_decimal_values(
        id: ParcelId,
        address: impl Into<String>,
        capital_value: Decimal,
        land_value: Decimal,
        improvements_value: Decimal,
        land_use: Option<String>,
    ) -> FilterResult<Self> {
        Self::new(
            id,
            address,
            decimal_to_f64(capital_value, "capital value")?,
            decimal_to_f64(land_value, "land value")?,
            decimal_to_f64(improvements_value, "improvements value")?,
            land_use,
        )
    }

    #[must_use]
    pub fn with_valuation_date(mut self, valuation_date: DateTime<Utc>) -> Self {
        self.valuation_date = Some(valuation_date);
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: serde_json::Value) -> Self {
        self.geometry = geometry;
        self
    }

    /// Returns the currency value for one of the three filter fields.
    #[must_use]
    pub fn value(&self, field: ValueField) -> f64 {
        match field {
            ValueField::Capital => self.capital_value,
            ValueField::Land => self.land_value,
            ValueField::Improvements => self.improvements_value,
        }
    }

    /// Returns whether the currency fields satisfy the load-time invariants.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        ValueField::ALL
            .iter()
            .all(|field| self.value(*field).is_finite() && self.value(*field) >= 0.0)
    }
}
