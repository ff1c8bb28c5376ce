use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PerField, ValueField, ValueRange};

/// Which slider pair the user touched last.
///
/// Presentational only: the host visually disables the inactive pair, but
/// evaluation always applies all three committed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    Total,
    #[default]
    Components,
}

/// Result of resolving one range edit against the current live ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEditOutcome {
    pub live: PerField<ValueRange>,
    pub mode: FilterMode,
    /// Fields whose live range changed, in application order.
    pub changed: SmallVec<[ValueField; 2]>,
}

/// Applies one range edit, keeping `capital = land + improvements` when a
/// component field is edited.
///
/// Editing the total leaves the component ranges untouched: decomposing a
/// total into components is ambiguous, so the coupling is one-way. The
/// untouched component contributes its current live range to the recomputed
/// total, not its bound.
///
/// Pure with respect to its inputs; performs no I/O and schedules no timers.
#[must_use]
pub fn apply_range_edit(
    field: ValueField,
    new_range: ValueRange,
    live: PerField<ValueRange>,
) -> RangeEditOutcome {
    let mut updated = live;
    *updated.get_mut(field) = new_range;

    let mut changed: SmallVec<[ValueField; 2]> = SmallVec::new();
    changed.push(field);

    if !field.is_component() {
        return RangeEditOutcome {
            live: updated,
            mode: FilterMode::Total,
            changed,
        };
    }

    updated.capital = ValueRange {
        low: updated.land.low + updated.improvements.low,
        high: updated.land.high + updated.improvements.high,
    };
    changed.push(ValueField::Capital);

    RangeEditOutcome {
        live: updated,
        mode: FilterMode::Components,
        changed,
    }
}
