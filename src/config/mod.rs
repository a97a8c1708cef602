// ==========================================
// Siparis Converter - job configuration
// ==========================================
// Responsibility: per-job tunables, passed explicitly into each
// pipeline stage (no process-wide state)
// ==========================================

use serde::{Deserialize, Serialize};

/// Minimum similarity ratio for a fuzzy code match to be accepted.
///
/// Groups whose best candidate scores below this are dropped silently.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Upper bound on concurrently loading supplier sheets.
pub const DEFAULT_MAX_PARALLEL_LOADS: usize = 4;

// ==========================================
// JobConfig - per-conversion-job settings
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Fuzzy match acceptance threshold (ratio in [0, 1]).
    pub fuzzy_threshold: f64,
    /// Bounded worker pool size for supplier sheet loading.
    pub max_parallel_loads: usize,
    /// Run month (1-12) used to name the dynamic month columns.
    /// None resolves to the current local month at projection time.
    pub run_month: Option<u32>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_parallel_loads: DEFAULT_MAX_PARALLEL_LOADS,
            run_month: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = JobConfig::default();
        assert_eq!(cfg.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
        assert_eq!(cfg.max_parallel_loads, 4);
        assert!(cfg.run_month.is_none());
    }
}
