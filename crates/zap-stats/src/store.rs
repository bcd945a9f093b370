//! Latest-value metric store.

use std::collections::HashMap;

use crate::{Metric, StatUpdate};

/// Value returned for a metric that has never been observed.
pub const MISSING: &str = "n/a";

/// Latest value per metric. Last write wins, no history is kept.
///
/// Reads never insert: looking up an absent metric returns [`MISSING`] and
/// leaves the store untouched.
#[derive(Debug, Clone, Default)]
pub struct MetricStore {
    values: HashMap<Metric, String>,
}

impl MetricStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the value of `metric`.
    pub fn set(&mut self, metric: Metric, value: impl Into<String>) {
        self.values.insert(metric, value.into());
    }

    /// Merge a classified update.
    pub fn apply(&mut self, update: StatUpdate) {
        self.set(update.metric, update.value);
    }

    /// Latest value of `metric`, or [`MISSING`].
    pub fn get(&self, metric: Metric) -> &str {
        self.values.get(&metric).map_or(MISSING, String::as_str)
    }

    /// Latest value of `metric`. `None` if never observed.
    pub fn try_get(&self, metric: Metric) -> Option<&str> {
        self.values.get(&metric).map(String::as_str)
    }

    /// Number of metrics observed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observed metrics and their values, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &str)> {
        self.values.iter().map(|(metric, value)| (*metric, value.as_str()))
    }
}
