pub mod bounds;
pub mod coupling;
pub mod evaluator;
pub mod fields;
pub mod log_scale;
pub mod primitives;
pub mod types;

pub use bounds::compute_field_bounds;
pub use coupling::{FilterMode, RangeEditOutcome, apply_range_edit};
pub use fields::{FieldBounds, PerField, PositionRange, ValueField, ValueRange};
pub use log_scale::{LogSliderScale, SLIDER_MAX, SLIDER_MIN};
pub use types::{Parcel, ParcelId};
