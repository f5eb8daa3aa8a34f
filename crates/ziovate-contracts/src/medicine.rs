//! Medicines, dose actions, and the drug-tracker schedule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Adherence status of one medicine for the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicineStatus {
    Taken,
    Missed,
    Pending,
}

/// The recordable subset of `MedicineStatus`: what a user can mark a dose as.
///
/// `Pending` is the absence of an action, so it is not representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicineAction {
    Taken,
    Missed,
}

impl MedicineAction {
    /// The status a dose ends up in after this action is recorded.
    pub fn status(&self) -> MedicineStatus {
        match self {
            MedicineAction::Taken => MedicineStatus::Taken,
            MedicineAction::Missed => MedicineStatus::Missed,
        }
    }

    /// The lowercase wire/display name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicineAction::Taken => "taken",
            MedicineAction::Missed => "missed",
        }
    }
}

impl fmt::Display for MedicineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One prescribed medicine with its daily schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    /// Free-text dosage, e.g. "500 mg".
    pub dosage: String,
    /// Free-text schedule, e.g. "8:00 AM".
    pub schedule: String,
    pub status: MedicineStatus,
}

/// Which half of the day a tracker row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerPeriod {
    Day,
    Night,
}

/// One row of the patient drug tracker.
///
/// Rows with `actionable = false` are informational (reminders, notes) and
/// render without taken/missed controls; the tracker refuses to record
/// actions against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerRow {
    pub id: String,
    /// Display time, e.g. "8 am".
    pub time: String,
    pub period: TrackerPeriod,
    /// Medicine name as shown on the card.
    pub medicine: String,
    /// Free-text instruction, e.g. "After breakfast".
    pub instruction: String,
    /// Unit count as shown on the card, e.g. "1 tablet".
    pub units: String,
    /// Whether taken/missed controls render for this row.
    pub actionable: bool,
}
