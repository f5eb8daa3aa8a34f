//! # ziovate-contracts
//!
//! Shared domain types for the ziovate medication-adherence client.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and the error taxonomy.

pub mod error;
pub mod medicine;
pub mod payload;
pub mod report;
pub mod role;

pub use error::{ApiError, ApiResult};
pub use medicine::{Medicine, MedicineAction, MedicineStatus, TrackerPeriod, TrackerRow};
pub use payload::{Ack, Listing, PrescriptionUpload, RegisterPatientPayload};
pub use report::{ComplianceReport, PatientSummary};
pub use role::{Session, UserRole};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // ── UserRole ─────────────────────────────────────────────────────────────

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(UserRole::from_str("patient").unwrap(), UserRole::Patient);
        assert_eq!(UserRole::from_str("Doctor").unwrap(), UserRole::Doctor);
        assert_eq!(UserRole::from_str("  ADMIN ").unwrap(), UserRole::Admin);
    }

    #[test]
    fn role_rejects_unknown_values() {
        let err = UserRole::from_str("pharmacist").unwrap_err();
        match err {
            ApiError::Validation { field, message } => {
                assert_eq!(field, "role");
                assert!(message.contains("pharmacist"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn role_display_matches_wire_form() {
        // The serde rename and Display must agree, or logs and payloads drift.
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    // ── MedicineAction ───────────────────────────────────────────────────────

    #[test]
    fn action_maps_to_matching_status() {
        assert_eq!(MedicineAction::Taken.status(), MedicineStatus::Taken);
        assert_eq!(MedicineAction::Missed.status(), MedicineStatus::Missed);
    }

    // ── Session ──────────────────────────────────────────────────────────────

    #[test]
    fn sessions_get_unique_ids() {
        let a = Session::start("Aarav", UserRole::Doctor);
        let b = Session::start("Aarav", UserRole::Doctor);
        assert_ne!(a.id, b.id);
        assert_eq!(a.role, UserRole::Doctor);
    }

    // ── RegisterPatientPayload ───────────────────────────────────────────────

    #[test]
    fn payload_set_and_get() {
        let mut payload = RegisterPatientPayload::default();
        payload.set("name", "Nina Patel").set("email", "nina@example.com");

        assert_eq!(payload.get("name"), Some("Nina Patel"));
        assert_eq!(payload.get("phone"), None);
    }

    // ── ApiError display and classification ──────────────────────────────────

    #[test]
    fn error_validation_display() {
        let err = ApiError::Validation {
            field: "email".to_string(),
            message: "must not be empty".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn error_not_found_display() {
        let err = ApiError::NotFound {
            entity: "medicine".to_string(),
            id: "m-99".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("medicine"));
        assert!(msg.contains("m-99"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn only_unreachable_and_timeout_are_transient() {
        assert!(ApiError::Unreachable { reason: "dns".into() }.is_transient());
        assert!(ApiError::Timeout { elapsed_ms: 3000 }.is_transient());

        assert!(!ApiError::Auth { reason: "bad password".into() }.is_transient());
        assert!(!ApiError::Conflict { reason: "already recorded".into() }.is_transient());
        assert!(!ApiError::NotFound { entity: "medicine".into(), id: "m1".into() }.is_transient());
        assert!(!ApiError::Validation { field: "name".into(), message: "empty".into() }
            .is_transient());
    }
}
