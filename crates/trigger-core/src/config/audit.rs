//! Audit run configuration.

use serde::{Deserialize, Serialize};

/// Settings for an audited collection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Largest value the `add` gate admits.
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    /// Whether positional reads are recorded in the audit trail.
    #[serde(default = "default_true")]
    pub record_reads: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            max_value: default_max_value(),
            record_reads: default_true(),
        }
    }
}

fn default_max_value() -> i64 {
    100
}

fn default_true() -> bool {
    true
}
