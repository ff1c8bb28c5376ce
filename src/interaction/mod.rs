use serde::{Deserialize, Serialize};

use crate::core::{PerField, ValueRange};
use crate::error::{FilterError, FilterResult};

/// Debounce delays for the two edit paths.
///
/// Value sliders produce continuous drag bursts, so their delay is long
/// enough to absorb a whole drag. Category toggles are discrete clicks with
/// the same evaluation cost, so their delay only has to coalesce a quick
/// series of checkbox changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebounceConfig {
    pub value_delay_seconds: f64,
    pub category_delay_seconds: f64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            value_delay_seconds: 1.0,
            category_delay_seconds: 0.04,
        }
    }
}

impl DebounceConfig {
    pub fn validate(self) -> FilterResult<Self> {
        if !self.value_delay_seconds.is_finite()
            || !self.category_delay_seconds.is_finite()
            || self.value_delay_seconds < 0.0
            || self.category_delay_seconds < 0.0
        {
            return Err(FilterError::InvalidData(
                "debounce delays must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// One scheduled filter commit.
///
/// The source kept a single mutable timer handle; here the pending commit is
/// an explicit value, replaced atomically on each edit and consumed exactly
/// once when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingCommit {
    pub deadline_seconds: f64,
    pub ranges: PerField<ValueRange>,
}

/// Converts a burst of interactive edits into exactly one commit per quiet
/// period.
///
/// At most one commit is pending at a time: scheduling replaces the previous
/// pending commit, and a replaced commit has no observable effect. The host
/// drives the clock, passing a monotonic `now_seconds` to `schedule_*` and
/// `poll`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebounceGate {
    config: DebounceConfig,
    pending: Option<PendingCommit>,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self {
            config: DebounceConfig::default(),
            pending: None,
        }
    }
}

impl DebounceGate {
    pub fn new(config: DebounceConfig) -> FilterResult<Self> {
        Ok(Self {
            config: config.validate()?,
            pending: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> DebounceConfig {
        self.config
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingCommit> {
        self.pending.as_ref()
    }

    /// Schedules a commit on the value-slider path, replacing any pending one.
    pub fn schedule_value_commit(&mut self, now_seconds: f64, ranges: PerField<ValueRange>) {
        self.pending = Some(PendingCommit {
            deadline_seconds: now_seconds + self.config.value_delay_seconds,
            ranges,
        });
    }

    /// Schedules a commit on the category-selection path, replacing any
    /// pending one.
    pub fn schedule_category_commit(&mut self, now_seconds: f64, ranges: PerField<ValueRange>) {
        self.pending = Some(PendingCommit {
            deadline_seconds: now_seconds + self.config.category_delay_seconds,
            ranges,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consumes the pending commit when its deadline has elapsed.
    ///
    /// Returns `None` while nothing is pending or the quiet period is still
    /// running.
    pub fn poll(&mut self, now_seconds: f64) -> Option<PerField<ValueRange>> {
        let deadline = self.pending.as_ref()?.deadline_seconds;
        if now_seconds < deadline {
            return None;
        }
        self.pending.take().map(|commit| commit.ranges)
    }
}
