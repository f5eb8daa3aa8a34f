//! # ziovate-data
//!
//! Simulated backend data for the ziovate adherence client.
//!
//! Acts as a stand-in for the real patient/doctor databases until the
//! backend exists. All data is hardcoded and fictional.

pub mod seed;

pub use seed::{
    doctor_compliance_reports, doctor_patients, stub_credentials, today_medicines, tracker_rows,
};

#[cfg(test)]
mod tests {
    use super::*;
    use ziovate_contracts::{MedicineStatus, TrackerPeriod};

    #[test]
    fn seed_medicines_start_pending() {
        let medicines = today_medicines();
        assert_eq!(medicines.len(), 2);
        assert!(medicines.iter().all(|m| m.status == MedicineStatus::Pending));
    }

    #[test]
    fn tracker_rows_cover_both_periods() {
        let rows = tracker_rows();
        assert!(rows.iter().any(|r| r.period == TrackerPeriod::Day));
        assert!(rows.iter().any(|r| r.period == TrackerPeriod::Night));
        // Exactly one informational row without controls.
        assert_eq!(rows.iter().filter(|r| !r.actionable).count(), 1);
    }

    #[test]
    fn tracker_ids_are_unique() {
        let rows = tracker_rows();
        let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn doctor_dashboard_seed_shape() {
        assert_eq!(doctor_compliance_reports().len(), 4);
        assert_eq!(doctor_patients().len(), 3);
    }
}
