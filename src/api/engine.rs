use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use crate::core::{
    FieldBounds, FilterMode, LogSliderScale, Parcel, PerField, PositionRange, ValueField,
    ValueRange, apply_range_edit, compute_field_bounds, evaluator,
};
use crate::error::{FilterError, FilterResult};
use crate::interaction::{DebounceConfig, DebounceGate};

use super::FilterState;

/// Construction-time tuning for `FilterEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterEngineConfig {
    pub debounce: DebounceConfig,
}

impl FilterEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_debounce(mut self, debounce: DebounceConfig) -> Self {
        self.debounce = debounce;
        self
    }
}

/// The value-range filter engine: single owner of the parcel set and of
/// `FilterState`.
///
/// Single-threaded and event-driven. Hosts pass a monotonic `now_seconds`
/// clock into every timed entry point and drive `on_tick` from their frame or
/// timer loop; the engine never reads wall-clock time itself. The renderer
/// reads `visible_parcels`/`snapshot` after `on_tick` reports a commit and
/// never mutates engine state directly.
pub struct FilterEngine {
    parcels: Vec<Parcel>,
    state: FilterState,
    gate: DebounceGate,
    visible: Vec<usize>,
}

impl FilterEngine {
    pub fn new(config: FilterEngineConfig) -> FilterResult<Self> {
        Ok(Self {
            parcels: Vec::new(),
            state: FilterState::default(),
            gate: DebounceGate::new(config.debounce)?,
            visible: Vec::new(),
        })
    }

    /// Loads the full parcel set, replacing any previous data.
    ///
    /// Parcels with non-finite or negative currency values are dropped.
    /// Every distinct land use starts selected, ranges reset to the full
    /// bounds, any pending commit is discarded, and the visible set is
    /// evaluated synchronously.
    pub fn on_data_loaded(&mut self, parcels: Vec<Parcel>) {
        let original_count = parcels.len();
        let parcels = canonicalize_parcels(parcels);
        debug!(
            original_count,
            canonical_count = parcels.len(),
            "loaded parcels"
        );

        self.parcels = parcels;
        self.state.selected_land_uses = distinct_land_uses(&self.parcels);
        self.gate.cancel();
        self.reset_bounds_and_ranges();
        self.refresh_visible();
    }

    /// Replaces the land-use selection.
    pub fn set_selected_land_uses(
        &mut self,
        selection: IndexSet<String>,
        now_seconds: f64,
    ) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        self.apply_selection(selection, now);
        Ok(())
    }

    /// Toggles a single land use in or out of the selection.
    pub fn toggle_land_use(&mut self, land_use: &str, now_seconds: f64) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        let mut selection = self.state.selected_land_uses.clone();
        if !selection.shift_remove(land_use) {
            selection.insert(land_use.to_owned());
        }
        self.apply_selection(selection, now);
        Ok(())
    }

    /// Selects every land use present in the loaded data.
    pub fn select_all_land_uses(&mut self, now_seconds: f64) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        self.apply_selection(distinct_land_uses(&self.parcels), now);
        Ok(())
    }

    /// Clears the selection entirely.
    pub fn clear_land_use_selection(&mut self, now_seconds: f64) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        self.apply_selection(IndexSet::new(), now);
        Ok(())
    }

    /// Narrows the selection to a single land use.
    pub fn select_only_land_use(&mut self, land_use: &str, now_seconds: f64) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        let mut selection = IndexSet::new();
        selection.insert(land_use.to_owned());
        self.apply_selection(selection, now);
        Ok(())
    }

    /// Applies a value-range edit in real currency units.
    ///
    /// Live ranges and mode update immediately for instant visual feedback;
    /// the committed ranges follow after the value-path quiet period. The
    /// edited range is clamped into its field's bounds; a reversed pair is
    /// swapped.
    pub fn on_value_edit(
        &mut self,
        field: ValueField,
        low: f64,
        high: f64,
        now_seconds: f64,
    ) -> FilterResult<()> {
        let now = validate_timestamp(now_seconds)?;
        let range = ValueRange::new(low, high)?.clamp_to(*self.state.bounds.get(field));

        let outcome = apply_range_edit(field, range, self.state.live_ranges);
        trace!(?field, changed = outcome.changed.len(), "value edit");
        self.state.live_ranges = outcome.live;
        self.state.mode = outcome.mode;
        self.gate.schedule_value_commit(now, outcome.live);
        Ok(())
    }

    /// Applies a slider edit in abstract positions, mapping both handles
    /// through the field's logarithmic scale before delegating to
    /// `on_value_edit`.
    pub fn on_slider_edit(
        &mut self,
        field: ValueField,
        low_position: f64,
        high_position: f64,
        now_seconds: f64,
    ) -> FilterResult<()> {
        let positions = PositionRange::new(low_position, high_position)?;
        let scale = LogSliderScale::from_bounds(*self.state.bounds.get(field))?;
        self.on_value_edit(
            field,
            scale.position_to_value(positions.low),
            scale.position_to_value(positions.high),
            now_seconds,
        )
    }

    /// Fires the pending commit when its quiet period has elapsed.
    ///
    /// Returns `true` when a commit fired and the visible set was
    /// re-evaluated; the renderer should then re-read `visible_parcels`.
    pub fn on_tick(&mut self, now_seconds: f64) -> FilterResult<bool> {
        let now = validate_timestamp(now_seconds)?;
        let Some(ranges) = self.gate.poll(now) else {
            return Ok(false);
        };

        self.state.committed_ranges = ranges;
        self.refresh_visible();
        debug!(visible = self.visible.len(), "committed filter ranges");
        Ok(true)
    }

    #[must_use]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Returns the visible parcels in load order.
    #[must_use]
    pub fn visible_parcels(&self) -> Vec<&Parcel> {
        self.visible
            .iter()
            .map(|&index| &self.parcels[index])
            .collect()
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn bounds(&self) -> PerField<FieldBounds> {
        self.state.bounds
    }

    #[must_use]
    pub fn live_ranges(&self) -> PerField<ValueRange> {
        self.state.live_ranges
    }

    #[must_use]
    pub fn committed_ranges(&self) -> PerField<ValueRange> {
        self.state.committed_ranges
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.state.mode
    }

    #[must_use]
    pub fn selected_land_uses(&self) -> &IndexSet<String> {
        &self.state.selected_land_uses
    }

    /// Returns the distinct land uses present in the loaded data, in
    /// first-appearance order.
    #[must_use]
    pub fn land_uses(&self) -> IndexSet<String> {
        distinct_land_uses(&self.parcels)
    }

    /// Derives the live slider positions for all three fields via each
    /// field's logarithmic scale.
    pub fn slider_positions(&self) -> FilterResult<PerField<PositionRange>> {
        let bounds = self.state.bounds;
        let live = self.state.live_ranges;
        PerField::try_from_fn(|field| {
            let scale = LogSliderScale::from_bounds(*bounds.get(field))?;
            let range = *live.get(field);
            PositionRange::new(
                scale.value_to_position(range.low),
                scale.value_to_position(range.high),
            )
        })
    }

    #[must_use]
    pub fn has_pending_commit(&self) -> bool {
        self.gate.pending().is_some()
    }

    #[must_use]
    pub fn pending_commit_deadline(&self) -> Option<f64> {
        self.gate.pending().map(|commit| commit.deadline_seconds)
    }

    fn apply_selection(&mut self, selection: IndexSet<String>, now_seconds: f64) {
        debug!(selected = selection.len(), "land-use selection changed");
        self.state.selected_land_uses = selection;
        self.reset_bounds_and_ranges();
        self.gate
            .schedule_category_commit(now_seconds, self.state.committed_ranges);
    }

    /// Recomputes bounds for the current selection and abandons any prior
    /// value-range narrowing: live and committed ranges reset to the full
    /// bounds and the mode returns to `Components`.
    fn reset_bounds_and_ranges(&mut self) {
        self.state.bounds = compute_field_bounds(&self.parcels, &self.state.selected_land_uses);
        let bounds = self.state.bounds;
        let full = PerField::from_fn(|field| bounds.get(field).full_range());
        self.state.live_ranges = full;
        self.state.committed_ranges = full;
        self.state.mode = FilterMode::Components;
    }

    fn refresh_visible(&mut self) {
        self.visible = evaluator::visible_indices(
            &self.parcels,
            &self.state.selected_land_uses,
            &self.state.committed_ranges,
        );
    }
}

fn canonicalize_parcels(mut parcels: Vec<Parcel>) -> Vec<Parcel> {
    let original_len = parcels.len();
    parcels.retain(Parcel::is_valid);

    let filtered_count = original_len - parcels.len();
    if filtered_count > 0 {
        warn!(
            filtered_count,
            canonical_count = parcels.len(),
            "dropped parcels with invalid currency values on load"
        );
    }
    parcels
}

fn distinct_land_uses(parcels: &[Parcel]) -> IndexSet<String> {
    parcels
        .iter()
        .filter_map(|parcel| parcel.land_use.clone())
        .collect()
}

fn validate_timestamp(now_seconds: f64) -> FilterResult<f64> {
    if !now_seconds.is_finite() {
        return Err(FilterError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    Ok(now_seconds)
}
