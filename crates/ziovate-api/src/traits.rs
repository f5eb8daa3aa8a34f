//! The API client trait: the single seam between the UI and its backend.
//!
//! Every UI action that would reach a server goes through `ApiClient`.
//! Call sites depend only on this trait, so swapping the current stub for a
//! networked implementation later changes no caller.
//!
//! The intended backend resource groups behind this surface are `/auth/*`,
//! `/patients/*`, `/doctors/*`, and `/reports/*`.

use async_trait::async_trait;

use ziovate_contracts::{
    Ack, ApiResult, ComplianceReport, Listing, MedicineAction, PatientSummary,
    PrescriptionUpload, RegisterPatientPayload,
};

/// The boundary between UI actions and the (future) backend.
///
/// All operations are asynchronous and must be safe to retry: a networked
/// implementation distinguishes transient failures (`Unreachable`, `Timeout`,
/// retried automatically by [`CallPolicy`](crate::CallPolicy)) from permanent
/// ones (surfaced to the user), and completes or fails within a bounded time.
/// Dropping a returned future cancels the call.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Authenticate with email and password.
    ///
    /// A real implementation fails with `ApiError::Auth` on bad credentials
    /// and `ApiError::Unreachable` when the backend cannot be contacted.
    async fn login(&self, email: &str, password: &str) -> ApiResult<Ack>;

    /// Register a new patient from an open key→value payload.
    ///
    /// A real implementation validates
    /// [`RegisterPatientPayload::REQUIRED_FIELDS`] and reports
    /// `ApiError::Validation` naming the first missing or invalid field.
    async fn register_patient(&self, payload: &RegisterPatientPayload) -> ApiResult<Ack>;

    /// Upload a prescription file.
    ///
    /// A real implementation rejects oversized or wrongly-typed files with
    /// `ApiError::Upload`.
    async fn upload_prescription(&self, upload: &PrescriptionUpload) -> ApiResult<Ack>;

    /// Record a taken/missed action for one dose slot.
    ///
    /// A real implementation reports `ApiError::NotFound` for unknown
    /// medicine ids and must be idempotent: recording the same action twice
    /// for the same dose slot must not double-count.
    async fn send_medicine_action(
        &self,
        action: MedicineAction,
        medicine_id: &str,
    ) -> ApiResult<Ack>;

    /// List the doctor's patient roster.
    async fn fetch_doctor_patients(&self) -> ApiResult<Listing<PatientSummary>>;

    /// List the compliance overview metrics.
    async fn fetch_compliance_reports(&self) -> ApiResult<Listing<ComplianceReport>>;
}
