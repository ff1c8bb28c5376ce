use indexmap::IndexSet;

#[cfg(feature = "parallel-evaluation")]
use rayon::prelude::*;

use crate::core::bounds::matches_selection;
use crate::core::{Parcel, PerField, ValueField, ValueRange};

/// Returns whether a parcel passes the committed filter.
///
/// A parcel is visible iff its land use is selected and each of its three
/// currency values lies within the corresponding committed range, inclusive.
#[must_use]
pub fn is_visible(
    parcel: &Parcel,
    selected_land_uses: &IndexSet<String>,
    committed: &PerField<ValueRange>,
) -> bool {
    matches_selection(parcel, selected_land_uses)
        && ValueField::ALL
            .iter()
            .all(|field| committed.get(*field).contains(parcel.value(*field)))
}

/// Applies the committed filter, returning indices of visible parcels in
/// input order.
///
/// Pure and synchronous; the engine runs it exactly once per committed
/// change.
#[must_use]
pub fn visible_indices(
    parcels: &[Parcel],
    selected_land_uses: &IndexSet<String>,
    committed: &PerField<ValueRange>,
) -> Vec<usize> {
    // For large parcel sets, optional parallel evaluation keeps output order
    // and behavior stable while reducing wall-clock filter time.
    #[cfg(feature = "parallel-evaluation")]
    {
        parcels
            .par_iter()
            .enumerate()
            .filter(|(_, parcel)| is_visible(parcel, selected_land_uses, committed))
            .map(|(index, _)| index)
            .collect()
    }

    #[cfg(not(feature = "parallel-evaluation"))]
    {
        parcels
            .iter()
            .enumerate()
            .filter(|(_, parcel)| is_visible(parcel, selected_land_uses, committed))
            .map(|(index, _)| index)
            .collect()
    }
}
