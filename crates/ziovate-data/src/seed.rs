//! The seed data set.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. Every process start sees exactly this data; nothing here
//! is ever persisted or mutated.

use ziovate_contracts::{
    ComplianceReport, Medicine, MedicineStatus, PatientSummary, TrackerPeriod, TrackerRow,
};

// ── Patient medicines ─────────────────────────────────────────────────────────

/// Today's prescribed medicines, all still pending.
pub fn today_medicines() -> Vec<Medicine> {
    vec![
        Medicine {
            id: "m1".to_string(),
            name: "Metformin".to_string(),
            dosage: "500 mg".to_string(),
            schedule: "8:00 AM".to_string(),
            status: MedicineStatus::Pending,
        },
        Medicine {
            id: "m2".to_string(),
            name: "Atorvastatin".to_string(),
            dosage: "10 mg".to_string(),
            schedule: "10:00 PM".to_string(),
            status: MedicineStatus::Pending,
        },
    ]
}

// ── Drug tracker schedule ─────────────────────────────────────────────────────

/// The drug-tracker rows for the current day, day rows before night rows.
///
/// The hydration reminder is informational only (`actionable: false`) — the
/// tracker renders it without taken/missed controls and refuses to record
/// actions against it.
pub fn tracker_rows() -> Vec<TrackerRow> {
    vec![
        TrackerRow {
            id: "m1".to_string(),
            time: "8 am".to_string(),
            period: TrackerPeriod::Day,
            medicine: "Metformin".to_string(),
            instruction: "After breakfast".to_string(),
            units: "1 tablet".to_string(),
            actionable: true,
        },
        TrackerRow {
            id: "m3".to_string(),
            time: "1 pm".to_string(),
            period: TrackerPeriod::Day,
            medicine: "Vitamin D".to_string(),
            instruction: "With lunch".to_string(),
            units: "1 capsule".to_string(),
            actionable: true,
        },
        TrackerRow {
            id: "r1".to_string(),
            time: "6 pm".to_string(),
            period: TrackerPeriod::Night,
            medicine: "Hydration reminder".to_string(),
            instruction: "Drink a full glass of water".to_string(),
            units: "💧".to_string(),
            actionable: false,
        },
        TrackerRow {
            id: "m2".to_string(),
            time: "9 pm".to_string(),
            period: TrackerPeriod::Night,
            medicine: "Atorvastatin".to_string(),
            instruction: "Before sleep".to_string(),
            units: "1 tablet".to_string(),
            actionable: true,
        },
    ]
}

// ── Doctor dashboard ──────────────────────────────────────────────────────────

/// The four compliance overview metrics shown on the doctor dashboard.
pub fn doctor_compliance_reports() -> Vec<ComplianceReport> {
    vec![
        report("Today", "91%"),
        report("This Week", "86%"),
        report("This Month", "82%"),
        report("Group Avg", "84%"),
    ]
}

/// The doctor's patient roster with daily/weekly/monthly compliance figures.
pub fn doctor_patients() -> Vec<PatientSummary> {
    vec![
        patient("p-101", "Aarav Shah", "100%", "94%", "89%"),
        patient("p-102", "Nina Patel", "80%", "84%", "82%"),
        patient("p-103", "Riya Desai", "95%", "91%", "90%"),
    ]
}

// ── Credentials ───────────────────────────────────────────────────────────────

/// The one email/password pair the in-memory fake backend accepts.
pub fn stub_credentials() -> (&'static str, &'static str) {
    ("demo@ziovate.example", "demo-pass")
}

fn report(label: &str, value: &str) -> ComplianceReport {
    ComplianceReport {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn patient(id: &str, name: &str, daily: &str, weekly: &str, monthly: &str) -> PatientSummary {
    PatientSummary {
        id: id.to_string(),
        name: name.to_string(),
        daily: daily.to_string(),
        weekly: weekly.to_string(),
        monthly: monthly.to_string(),
    }
}
