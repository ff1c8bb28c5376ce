use indexmap::IndexSet;
use ordered_float::OrderedFloat;

use crate::core::{FieldBounds, Parcel, PerField, ValueField};

/// Computes per-field `[min, max]` envelopes over the parcels whose land use
/// is present in `selected_land_uses`.
///
/// Parcels with no land use never match a selection. An empty matched subset
/// yields `[0, 0]` for all three fields, the "no data" steady state.
#[must_use]
pub fn compute_field_bounds(
    parcels: &[Parcel],
    selected_land_uses: &IndexSet<String>,
) -> PerField<FieldBounds> {
    let mut min = PerField::from_fn(|_| OrderedFloat(f64::INFINITY));
    let mut max = PerField::from_fn(|_| OrderedFloat(f64::NEG_INFINITY));
    let mut matched = false;

    for parcel in parcels {
        if !matches_selection(parcel, selected_land_uses) {
            continue;
        }
        matched = true;
        for field in ValueField::ALL {
            let value = OrderedFloat(parcel.value(field));
            let field_min = min.get_mut(field);
            *field_min = (*field_min).min(value);
            let field_max = max.get_mut(field);
            *field_max = (*field_max).max(value);
        }
    }

    if !matched {
        return PerField::default();
    }

    PerField::from_fn(|field| FieldBounds {
        min: min.get(field).into_inner(),
        max: max.get(field).into_inner(),
    })
}

/// Returns whether a parcel's land use is part of the active selection.
#[must_use]
pub fn matches_selection(parcel: &Parcel, selected_land_uses: &IndexSet<String>) -> bool {
    parcel
        .land_use
        .as_deref()
        .is_some_and(|land_use| selected_land_uses.contains(land_use))
}
