use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{FieldBounds, FilterMode, PerField, ValueRange};

/// The complete filter state, owned exclusively by `FilterEngine`.
///
/// `committed_ranges` lags `live_ranges` by the debounce delay. Both are kept
/// within the current bounds, with one deliberate exception: a
/// component-driven total range is the exact component-wise sum and may
/// overshoot the total field's own envelope (see `core::coupling`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub(super) selected_land_uses: IndexSet<String>,
    pub(super) bounds: PerField<FieldBounds>,
    pub(super) live_ranges: PerField<ValueRange>,
    pub(super) committed_ranges: PerField<ValueRange>,
    pub(super) mode: FilterMode,
}

impl FilterState {
    #[must_use]
    pub fn selected_land_uses(&self) -> &IndexSet<String> {
        &self.selected_land_uses
    }

    #[must_use]
    pub fn bounds(&self) -> PerField<FieldBounds> {
        self.bounds
    }

    #[must_use]
    pub fn live_ranges(&self) -> PerField<ValueRange> {
        self.live_ranges
    }

    #[must_use]
    pub fn committed_ranges(&self) -> PerField<ValueRange> {
        self.committed_ranges
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }
}
