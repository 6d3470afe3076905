use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartPolicy {
    #[serde(default)]
    pub policy: String,
    #[serde(default)]
    pub max: u64,
}

/// Instance bounds for a clustered container.
///
/// Every sub-field falls back to zero when absent from the document. A zero
/// `initial` is only a placeholder: decoding a container with `cluster: true`
/// raises it to [`ClusterInstanceCount::MIN_INITIAL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterInstanceCount {
    pub initial: u64,
    pub max: u64,                // 0 == unlimited
    pub threshold_healthy: u64,
    pub threshold_degraded: u64, // 0 == no degraded state
}

impl ClusterInstanceCount {
    pub const MIN_INITIAL: u64 = 1;

    /// Raise a zero `initial` to the minimum. Returns true if anything changed.
    pub fn fill_initial(&mut self) -> bool {
        if self.initial == 0 {
            self.initial = Self::MIN_INITIAL;
            return true;
        }
        false
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == 0
    }

    pub fn has_degraded_state(&self) -> bool {
        self.threshold_degraded != 0
    }
}
