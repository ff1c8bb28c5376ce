use serde::{Deserialize, Serialize};

use crate::core::{FieldBounds, FilterMode, PerField, PositionRange, ValueRange};
use crate::error::{FilterError, FilterResult};

use super::FilterEngine;

/// Read-only renderer contract: everything the display layer needs to draw
/// the visible parcels and the slider controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    pub visible_ids: Vec<u64>,
    pub selected_land_uses: Vec<String>,
    pub bounds: PerField<FieldBounds>,
    pub live_ranges: PerField<ValueRange>,
    pub committed_ranges: PerField<ValueRange>,
    pub slider_positions: PerField<PositionRange>,
    pub mode: FilterMode,
}

impl FilterEngine {
    /// Captures the renderer-facing view of the current filter state.
    pub fn snapshot(&self) -> FilterResult<FilterSnapshot> {
        Ok(FilterSnapshot {
            visible_ids: self
                .visible_parcels()
                .iter()
                .map(|parcel| parcel.id.raw())
                .collect(),
            selected_land_uses: self.selected_land_uses().iter().cloned().collect(),
            bounds: self.bounds(),
            live_ranges: self.live_ranges(),
            committed_ranges: self.committed_ranges(),
            slider_positions: self.slider_positions()?,
            mode: self.mode(),
        })
    }

    /// Serializes the snapshot contract as JSON.
    pub fn snapshot_json(&self) -> FilterResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string(&snapshot).map_err(|err| {
            FilterError::InvalidData(format!("snapshot serialization failed: {err}"))
        })
    }
}
