//! Doctor-facing reporting shapes.

use serde::{Deserialize, Serialize};

/// One display-only compliance metric, e.g. label "Today", value "91%".
///
/// Values stay as percentage strings end to end; the client never computes
/// compliance itself, it only renders what the backend reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub label: String,
    pub value: String,
}

/// One row of the doctor's patient roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    /// Daily compliance, percentage string.
    pub daily: String,
    /// Weekly compliance, percentage string.
    pub weekly: String,
    /// Monthly compliance, percentage string.
    pub monthly: String,
}
