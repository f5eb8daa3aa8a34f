//! Role dispatch and the per-role dashboard view models.
//!
//! View models carry everything a renderer needs and nothing it doesn't.
//! Actual drawing (mobile screens, the demo CLI) stays outside this crate;
//! what lives here is the data each dashboard shows and the gating rules
//! for what may be shown.

use ziovate_api::ApiClient;
use ziovate_contracts::{
    ApiResult, ComplianceReport, MedicineAction, PatientSummary, TrackerPeriod, TrackerRow,
    UserRole,
};
use ziovate_data::seed;

/// Which dashboard a logged-in user sees.
///
/// One variant per role, selected by exhaustive match — adding a role will
/// not compile until it is mapped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    DrugTracker,
    Doctor,
    Admin,
}

impl Dashboard {
    /// The dashboard mapped to `role`. Total: every role renders exactly one.
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Patient => Dashboard::DrugTracker,
            UserRole::Doctor => Dashboard::Doctor,
            UserRole::Admin => Dashboard::Admin,
        }
    }
}

// ── Patient: drug tracker ─────────────────────────────────────────────────────

/// The patient drug tracker: schedule rows split into day and night sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DrugTrackerView {
    /// Date line shown above the schedule, e.g. "Today, 17th Sep".
    pub header: String,
    pub day: Vec<TrackerRow>,
    pub night: Vec<TrackerRow>,
}

impl DrugTrackerView {
    /// Build the view from the seed schedule.
    pub fn from_seed() -> Self {
        Self::from_rows("Today, 17th Sep", seed::tracker_rows())
    }

    /// Build the view from arbitrary rows, preserving order within each period.
    pub fn from_rows(header: impl Into<String>, rows: Vec<TrackerRow>) -> Self {
        let (day, night) = rows
            .into_iter()
            .partition(|row| row.period == TrackerPeriod::Day);
        Self {
            header: header.into(),
            day,
            night,
        }
    }

    /// The taken/missed controls to render for `row`.
    ///
    /// Informational rows (`actionable: false`) get none; actionable rows
    /// get both, always in taken-then-missed order.
    pub fn controls(row: &TrackerRow) -> &'static [MedicineAction] {
        if row.actionable {
            &[MedicineAction::Taken, MedicineAction::Missed]
        } else {
            &[]
        }
    }
}

// ── Doctor: compliance overview + roster ──────────────────────────────────────

/// The doctor dashboard: compliance metric cards, the patient roster, and
/// the not-yet-wired report filters.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorDashboardView {
    pub metrics: Vec<ComplianceReport>,
    pub roster: Vec<PatientSummary>,
    pub report_filters: Vec<&'static str>,
}

impl DoctorDashboardView {
    /// Fetch both listings through the seam and assemble the view.
    pub async fn load(client: &impl ApiClient) -> ApiResult<Self> {
        let metrics = client.fetch_compliance_reports().await?.data;
        let roster = client.fetch_doctor_patients().await?.data;
        Ok(Self {
            metrics,
            roster,
            report_filters: vec![
                "Individual / Group",
                "Day-wise / Weekly / Monthly",
                "Export hooks can be added later",
            ],
        })
    }

    /// The compact compliance line shown under a roster entry.
    pub fn roster_line(patient: &PatientSummary) -> String {
        format!(
            "D: {} | W: {} | M: {}",
            patient.daily, patient.weekly, patient.monthly
        )
    }
}

// ── Admin: control panel ──────────────────────────────────────────────────────

/// The admin dashboard: static control-panel items and the backend resource
/// groups that are named but not yet implemented.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboardView {
    pub panel_items: Vec<&'static str>,
    pub backend_groups: Vec<&'static str>,
}

impl Default for AdminDashboardView {
    fn default() -> Self {
        Self {
            panel_items: vec![
                "Manage doctors, patients and system-wide settings",
                "Monitor missed-dose escalation events",
                "Configure notification templates (in-app + WhatsApp)",
            ],
            backend_groups: vec!["/auth/*", "/patients/*", "/doctors/*", "/reports/*"],
        }
    }
}

impl AdminDashboardView {
    pub fn new() -> Self {
        Self::default()
    }
}
