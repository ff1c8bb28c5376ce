pub mod engine;
pub mod filter_state;
pub mod snapshot;

pub use engine::{FilterEngine, FilterEngineConfig};
pub use filter_state::FilterState;
pub use snapshot::FilterSnapshot;
