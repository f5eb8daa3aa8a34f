//! The placeholder client: every call succeeds without I/O.
//!
//! `StubApiClient` is the faithful port of the pre-backend placeholder the
//! app ships with today. It validates nothing, contacts nothing, and resolves
//! immediately. Listings are served from the seed data so the dashboards have
//! content to render.

use async_trait::async_trait;
use tracing::debug;

use ziovate_contracts::{
    Ack, ApiResult, ComplianceReport, Listing, MedicineAction, PatientSummary,
    PrescriptionUpload, RegisterPatientPayload,
};
use ziovate_data::seed;

use crate::traits::ApiClient;

/// An `ApiClient` whose every method returns a canned success response.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubApiClient;

impl StubApiClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ApiClient for StubApiClient {
    /// Accepts any credentials, including empty ones.
    async fn login(&self, email: &str, _password: &str) -> ApiResult<Ack> {
        debug!(email, "stub login, unconditional success");
        Ok(Ack::ok())
    }

    async fn register_patient(&self, payload: &RegisterPatientPayload) -> ApiResult<Ack> {
        debug!(fields = payload.0.len(), "stub register_patient, unconditional success");
        Ok(Ack::ok())
    }

    async fn upload_prescription(&self, upload: &PrescriptionUpload) -> ApiResult<Ack> {
        debug!(
            file_name = %upload.file_name,
            size = upload.bytes.len(),
            "stub upload_prescription, unconditional success"
        );
        Ok(Ack::ok())
    }

    /// Succeeds for ANY medicine id.
    ///
    /// Known gap, kept on purpose until the backend exists: there is no id
    /// validation and no idempotency guard here. The intended contract lives
    /// on the trait and is exercised by `InMemoryApiClient`.
    async fn send_medicine_action(
        &self,
        action: MedicineAction,
        medicine_id: &str,
    ) -> ApiResult<Ack> {
        debug!(%action, medicine_id, "stub send_medicine_action, unconditional success");
        Ok(Ack::ok())
    }

    async fn fetch_doctor_patients(&self) -> ApiResult<Listing<PatientSummary>> {
        debug!("stub fetch_doctor_patients, serving seed roster");
        Ok(Listing::of(seed::doctor_patients()))
    }

    async fn fetch_compliance_reports(&self) -> ApiResult<Listing<ComplianceReport>> {
        debug!("stub fetch_compliance_reports, serving seed metrics");
        Ok(Listing::of(seed::doctor_compliance_reports()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_succeeds_for_any_credentials() {
        let client = StubApiClient::new();
        assert!(client.login("", "").await.unwrap().success);
        assert!(client.login("a@x.com", "pw1").await.unwrap().success);
    }

    /// Pins the current (possibly unintended) stub behavior: actions succeed
    /// for ids that exist nowhere in the seed data.
    #[tokio::test]
    async fn medicine_action_succeeds_for_unknown_ids() {
        let client = StubApiClient::new();
        let ack = client
            .send_medicine_action(MedicineAction::Taken, "no-such-id")
            .await
            .unwrap();
        assert!(ack.success);

        let ack = client
            .send_medicine_action(MedicineAction::Missed, "no-such-id")
            .await
            .unwrap();
        assert!(ack.success);
    }

    #[tokio::test]
    async fn listings_come_from_the_seed_set() {
        let client = StubApiClient::new();

        let roster = client.fetch_doctor_patients().await.unwrap();
        assert!(roster.success);
        assert_eq!(roster.data, seed::doctor_patients());

        let metrics = client.fetch_compliance_reports().await.unwrap();
        assert!(metrics.success);
        assert_eq!(metrics.data.len(), 4);
        assert_eq!(metrics.data[0].label, "Today");
        assert_eq!(metrics.data[0].value, "91%");
    }
}
