//! valuemap-rs: value-range filter engine for property-valuation maps.
//!
//! This crate owns the filtering state of an interactive property map:
//! logarithmic slider scales, coupled total/component value ranges, debounced
//! filter commits, and evaluation of the visible parcel subset. Map rendering
//! and data fetch live in the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{FilterEngine, FilterEngineConfig};
pub use error::{FilterError, FilterResult};
