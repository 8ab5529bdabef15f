use serde::{Deserialize, Serialize};

use crate::partition::DEFAULT_MIN_TASK_COST;

/// Operator attributes, as handed over by the host framework.
///
/// `metric` is required. It is validated by [`crate::CDist::new`], not here,
/// so a config can be decoded before it is known to be usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CdistConfig {
    /// Metric identifier. Only `"sqeuclidean"` is supported.
    pub metric: String,
    /// Minimum estimated cost, in cell-cost units, of one parallel task.
    #[serde(default = "default_min_task_cost")]
    pub min_task_cost: u64,
}

fn default_min_task_cost() -> u64 {
    DEFAULT_MIN_TASK_COST
}

impl CdistConfig {
    pub fn new(metric: impl Into<String>) -> Self {
        CdistConfig {
            metric: metric.into(),
            min_task_cost: DEFAULT_MIN_TASK_COST,
        }
    }

    pub fn with_min_task_cost(mut self, min_task_cost: u64) -> Self {
        self.min_task_cost = min_task_cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = CdistConfig::new("sqeuclidean");
        assert_eq!(c.metric, "sqeuclidean");
        assert_eq!(c.min_task_cost, DEFAULT_MIN_TASK_COST);
        assert_eq!(c.with_min_task_cost(0).min_task_cost, 0);
    }

    #[test]
    fn test_from_json() {
        let c: CdistConfig = serde_json::from_str(r#"{"metric": "sqeuclidean"}"#).unwrap();
        assert_eq!(c, CdistConfig::new("sqeuclidean"));

        let c: CdistConfig =
            serde_json::from_str(r#"{"metric": "sqeuclidean", "min_task_cost": 128}"#).unwrap();
        assert_eq!(c.min_task_cost, 128);
    }

    #[test]
    fn test_metric_is_required() {
        assert!(serde_json::from_str::<CdistConfig>(r#"{"min_task_cost": 1}"#).is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<CdistConfig>(r#"{"metric": "sqeuclidean", "p": 2}"#).is_err());
    }

    #[test]
    fn test_unsupported_metric_still_decodes() {
        let c: CdistConfig = serde_json::from_str(r#"{"metric": "manhattan"}"#).unwrap();
        assert_eq!(c.metric, "manhattan");
    }
}
