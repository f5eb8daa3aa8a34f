//! In-memory implementation of `ApiClient` honoring the real contract.
//!
//! `InMemoryApiClient` is the test double for the future networked client.
//! Where `StubApiClient` succeeds unconditionally, this one enforces the
//! behavior the trait documents: credentials are checked, registration
//! payloads are validated, uploads are bounded, unknown medicine ids are
//! rejected, and dose actions are recorded idempotently per dose slot.
//!
//! State lives in a `Vec`/map behind a `Mutex`, making the client safe to
//! share across tasks. `fail_next()` arms injected transient failures so
//! retry behavior can be tested without a network.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use ziovate_contracts::{
    Ack, ApiError, ApiResult, ComplianceReport, Listing, MedicineAction, PatientSummary,
    PrescriptionUpload, RegisterPatientPayload,
};
use ziovate_data::seed;

use crate::traits::ApiClient;

/// Largest prescription file the backend accepts.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Content types accepted for prescription uploads.
pub const ACCEPTED_UPLOAD_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// One recorded adherence event for a dose slot.
#[derive(Debug, Clone, PartialEq)]
pub struct AdherenceEvent {
    /// Receipt id returned to the caller. Stable across idempotent repeats.
    pub receipt: Uuid,
    pub medicine_id: String,
    pub action: MedicineAction,
    pub recorded_at: DateTime<Utc>,
}

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryApiClient`.
struct InMemoryState {
    /// One event per dose slot, keyed by medicine id.
    events: BTreeMap<String, AdherenceEvent>,

    /// Emails of patients registered so far, for uniqueness checks.
    registered_emails: Vec<String>,

    /// Number of injected `Unreachable` failures still pending.
    fail_next: u32,
}

// ── Public client ─────────────────────────────────────────────────────────────

/// An in-memory `ApiClient` with real contract semantics.
pub struct InMemoryApiClient {
    email: String,
    password: String,
    known_medicines: Vec<String>,
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryApiClient {
    /// Create a client seeded with the stub credentials and the medicine ids
    /// present in the seed data (today's medicines plus actionable tracker rows).
    pub fn new() -> Self {
        let (email, password) = seed::stub_credentials();

        let mut known_medicines: Vec<String> = seed::today_medicines()
            .into_iter()
            .map(|m| m.id)
            .collect();
        for row in seed::tracker_rows() {
            if row.actionable && !known_medicines.contains(&row.id) {
                known_medicines.push(row.id);
            }
        }

        Self {
            email: email.to_string(),
            password: password.to_string(),
            known_medicines,
            state: Arc::new(Mutex::new(InMemoryState {
                events: BTreeMap::new(),
                registered_emails: Vec::new(),
                fail_next: 0,
            })),
        }
    }

    /// Arm `n` injected `Unreachable` failures. Each subsequent call consumes
    /// one before doing any work, regardless of operation.
    pub fn fail_next(&self, n: u32) {
        self.state.lock().expect("client state lock poisoned").fail_next = n;
    }

    /// The event currently recorded for `medicine_id`, if any.
    pub fn recorded(&self, medicine_id: &str) -> Option<AdherenceEvent> {
        self.state
            .lock()
            .expect("client state lock poisoned")
            .events
            .get(medicine_id)
            .cloned()
    }

    /// Total number of dose slots with a recorded event.
    pub fn event_count(&self) -> usize {
        self.state
            .lock()
            .expect("client state lock poisoned")
            .events
            .len()
    }

    /// Consume one injected failure if armed.
    fn take_injected_failure(&self) -> ApiResult<()> {
        let mut state = self.state.lock().expect("client state lock poisoned");
        if state.fail_next > 0 {
            state.fail_next -= 1;
            return Err(ApiError::Unreachable {
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiClient for InMemoryApiClient {
    async fn login(&self, email: &str, password: &str) -> ApiResult<Ack> {
        self.take_injected_failure()?;

        if email.trim().is_empty() {
            return Err(ApiError::Validation {
                field: "email".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if password.is_empty() {
            return Err(ApiError::Validation {
                field: "password".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if email != self.email || password != self.password {
            return Err(ApiError::Auth {
                reason: "unknown email or wrong password".to_string(),
            });
        }

        info!(email, "login accepted");
        Ok(Ack::ok())
    }

    async fn register_patient(&self, payload: &RegisterPatientPayload) -> ApiResult<Ack> {
        self.take_injected_failure()?;

        for field in RegisterPatientPayload::REQUIRED_FIELDS {
            match payload.get(field) {
                None => {
                    return Err(ApiError::Validation {
                        field: field.to_string(),
                        message: "required field is missing".to_string(),
                    })
                }
                Some(value) if value.trim().is_empty() => {
                    return Err(ApiError::Validation {
                        field: field.to_string(),
                        message: "must not be empty".to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        // Minimal shape check; a real backend does full address validation.
        let email = payload.get("email").unwrap_or_default();
        if !email.contains('@') {
            return Err(ApiError::Validation {
                field: "email".to_string(),
                message: "not a valid email address".to_string(),
            });
        }

        let mut state = self.state.lock().expect("client state lock poisoned");
        if state.registered_emails.iter().any(|e| e == email) {
            return Err(ApiError::Conflict {
                reason: format!("patient with email '{}' already registered", email),
            });
        }
        state.registered_emails.push(email.to_string());

        info!(email, "patient registered");
        Ok(Ack::ok())
    }

    async fn upload_prescription(&self, upload: &PrescriptionUpload) -> ApiResult<Ack> {
        self.take_injected_failure()?;

        if upload.bytes.is_empty() {
            return Err(ApiError::Upload {
                reason: "file is empty".to_string(),
            });
        }
        if upload.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::Upload {
                reason: format!(
                    "file is {} bytes, limit is {}",
                    upload.bytes.len(),
                    MAX_UPLOAD_BYTES
                ),
            });
        }
        if !ACCEPTED_UPLOAD_TYPES.contains(&upload.content_type.as_str()) {
            return Err(ApiError::Upload {
                reason: format!("unsupported content type '{}'", upload.content_type),
            });
        }

        info!(file_name = %upload.file_name, size = upload.bytes.len(), "prescription accepted");
        Ok(Ack::ok())
    }

    /// Record one action per dose slot, idempotently.
    ///
    /// Repeating the SAME action returns the original receipt and changes
    /// nothing — never a double-count, never a surfaced `Conflict`. The
    /// OPPOSITE action overwrites the recorded status (last write wins), so
    /// a mis-tap can be corrected.
    async fn send_medicine_action(
        &self,
        action: MedicineAction,
        medicine_id: &str,
    ) -> ApiResult<Ack> {
        self.take_injected_failure()?;

        if !self.known_medicines.iter().any(|id| id == medicine_id) {
            return Err(ApiError::NotFound {
                entity: "medicine".to_string(),
                id: medicine_id.to_string(),
            });
        }

        let mut state = self.state.lock().expect("client state lock poisoned");
        match state.events.get_mut(medicine_id) {
            Some(existing) if existing.action == action => {
                debug!(medicine_id, %action, "duplicate action, returning original receipt");
            }
            Some(existing) => {
                info!(
                    medicine_id,
                    from = %existing.action,
                    to = %action,
                    "overwriting recorded action"
                );
                existing.action = action;
                existing.recorded_at = Utc::now();
            }
            None => {
                state.events.insert(
                    medicine_id.to_string(),
                    AdherenceEvent {
                        receipt: Uuid::new_v4(),
                        medicine_id: medicine_id.to_string(),
                        action,
                        recorded_at: Utc::now(),
                    },
                );
                debug!(medicine_id, %action, "action recorded");
            }
        }

        Ok(Ack::ok())
    }

    async fn fetch_doctor_patients(&self) -> ApiResult<Listing<PatientSummary>> {
        self.take_injected_failure()?;
        Ok(Listing::of(seed::doctor_patients()))
    }

    async fn fetch_compliance_reports(&self) -> ApiResult<Listing<ComplianceReport>> {
        self.take_injected_failure()?;
        Ok(Listing::of(seed::doctor_compliance_reports()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> RegisterPatientPayload {
        let mut payload = RegisterPatientPayload::default();
        payload
            .set("name", "Nina Patel")
            .set("email", "nina@example.com")
            .set("phone", "+91 98000 00000");
        payload
    }

    // ── login ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn login_rejects_wrong_credentials() {
        let client = InMemoryApiClient::new();
        let err = client.login("nina@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, ApiError::Auth { .. }));
    }

    #[tokio::test]
    async fn login_accepts_seed_credentials() {
        let client = InMemoryApiClient::new();
        let (email, password) = seed::stub_credentials();
        assert!(client.login(email, password).await.unwrap().success);
    }

    #[tokio::test]
    async fn login_rejects_empty_fields_before_auth() {
        let client = InMemoryApiClient::new();
        let err = client.login("", "pw").await.unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "email"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    // ── register_patient ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn register_names_the_first_missing_field() {
        let client = InMemoryApiClient::new();
        let mut payload = valid_payload();
        payload.0.remove("phone");

        let err = client.register_patient(&payload).await.unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "phone"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn register_rejects_blank_values() {
        let client = InMemoryApiClient::new();
        let mut payload = valid_payload();
        payload.set("name", "   ");

        let err = client.register_patient(&payload).await.unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "name"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn register_rejects_malformed_email() {
        let client = InMemoryApiClient::new();
        let mut payload = valid_payload();
        payload.set("email", "not-an-email");

        let err = client.register_patient(&payload).await.unwrap_err();
        match err {
            ApiError::Validation { field, .. } => assert_eq!(field, "email"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn register_twice_with_same_email_conflicts() {
        let client = InMemoryApiClient::new();
        assert!(client.register_patient(&valid_payload()).await.unwrap().success);

        let err = client.register_patient(&valid_payload()).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    // ── upload_prescription ──────────────────────────────────────────────────

    #[tokio::test]
    async fn upload_rejects_empty_oversized_and_wrong_type() {
        let client = InMemoryApiClient::new();

        let empty = PrescriptionUpload {
            file_name: "rx.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![],
        };
        assert!(matches!(
            client.upload_prescription(&empty).await.unwrap_err(),
            ApiError::Upload { .. }
        ));

        let oversized = PrescriptionUpload {
            file_name: "rx.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; MAX_UPLOAD_BYTES + 1],
        };
        assert!(matches!(
            client.upload_prescription(&oversized).await.unwrap_err(),
            ApiError::Upload { .. }
        ));

        let wrong_type = PrescriptionUpload {
            file_name: "rx.gif".to_string(),
            content_type: "image/gif".to_string(),
            bytes: vec![1, 2, 3],
        };
        assert!(matches!(
            client.upload_prescription(&wrong_type).await.unwrap_err(),
            ApiError::Upload { .. }
        ));
    }

    #[tokio::test]
    async fn upload_accepts_a_small_pdf() {
        let client = InMemoryApiClient::new();
        let upload = PrescriptionUpload {
            file_name: "rx.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0u8; 1024],
        };
        assert!(client.upload_prescription(&upload).await.unwrap().success);
    }

    // ── send_medicine_action ─────────────────────────────────────────────────

    #[tokio::test]
    async fn unknown_medicine_id_is_not_found() {
        let client = InMemoryApiClient::new();
        let err = client
            .send_medicine_action(MedicineAction::Taken, "m-999")
            .await
            .unwrap_err();
        match err {
            ApiError::NotFound { entity, id } => {
                assert_eq!(entity, "medicine");
                assert_eq!(id, "m-999");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_same_action_keeps_one_event_and_receipt() {
        let client = InMemoryApiClient::new();

        client.send_medicine_action(MedicineAction::Taken, "m1").await.unwrap();
        let first = client.recorded("m1").unwrap();

        // Same action again: idempotent, no double-count.
        client.send_medicine_action(MedicineAction::Taken, "m1").await.unwrap();
        let second = client.recorded("m1").unwrap();

        assert_eq!(client.event_count(), 1);
        assert_eq!(first.receipt, second.receipt);
        assert_eq!(first.recorded_at, second.recorded_at);
    }

    #[tokio::test]
    async fn opposite_action_overwrites_the_slot() {
        let client = InMemoryApiClient::new();

        client.send_medicine_action(MedicineAction::Taken, "m1").await.unwrap();
        client.send_medicine_action(MedicineAction::Missed, "m1").await.unwrap();

        let event = client.recorded("m1").unwrap();
        assert_eq!(event.action, MedicineAction::Missed);
        assert_eq!(client.event_count(), 1);
    }

    // ── failure injection ────────────────────────────────────────────────────

    #[tokio::test]
    async fn injected_failures_are_consumed_in_order() {
        let client = InMemoryApiClient::new();
        client.fail_next(2);

        assert!(matches!(
            client.fetch_doctor_patients().await.unwrap_err(),
            ApiError::Unreachable { .. }
        ));
        assert!(matches!(
            client.fetch_doctor_patients().await.unwrap_err(),
            ApiError::Unreachable { .. }
        ));
        assert!(client.fetch_doctor_patients().await.unwrap().success);
    }
}
