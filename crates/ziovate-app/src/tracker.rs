//! The drug-tracker action controller.
//!
//! Owns the schedule rows plus a local status map. Statuses update
//! optimistically: once the seam reports success for a dose action, the row
//! flips locally without waiting for a re-fetch (the seed data itself is
//! never mutated). A failed call leaves the local status untouched.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use ziovate_api::ApiClient;
use ziovate_contracts::{ApiError, ApiResult, MedicineAction, MedicineStatus, TrackerPeriod, TrackerRow};
use ziovate_data::seed;

/// Drives taken/missed actions for the patient's tracker rows.
pub struct DrugTracker<C: ApiClient> {
    client: Arc<C>,
    rows: Vec<TrackerRow>,
    statuses: HashMap<String, MedicineStatus>,
}

impl<C: ApiClient> DrugTracker<C> {
    /// A tracker over the seed schedule, everything pending.
    pub fn new(client: Arc<C>) -> Self {
        Self::with_rows(client, seed::tracker_rows())
    }

    pub fn with_rows(client: Arc<C>, rows: Vec<TrackerRow>) -> Self {
        let statuses = rows
            .iter()
            .filter(|row| row.actionable)
            .map(|row| (row.id.clone(), MedicineStatus::Pending))
            .collect();
        Self {
            client,
            rows,
            statuses,
        }
    }

    pub fn rows(&self) -> &[TrackerRow] {
        &self.rows
    }

    /// Local status of one dose slot. Non-actionable rows have no status.
    pub fn status_of(&self, medicine_id: &str) -> Option<MedicineStatus> {
        self.statuses.get(medicine_id).copied()
    }

    /// Mark one dose slot as taken or missed.
    ///
    /// Refuses unknown ids and informational rows before touching the seam,
    /// so a stray tap on a reminder row can never produce a backend call.
    pub async fn mark(&mut self, medicine_id: &str, action: MedicineAction) -> ApiResult<()> {
        let row = self
            .rows
            .iter()
            .find(|row| row.id == medicine_id)
            .ok_or_else(|| ApiError::NotFound {
                entity: "tracker row".to_string(),
                id: medicine_id.to_string(),
            })?;

        if !row.actionable {
            return Err(ApiError::Validation {
                field: "medicine_id".to_string(),
                message: format!("row '{}' has no taken/missed controls", medicine_id),
            });
        }

        self.client.send_medicine_action(action, medicine_id).await?;

        // Optimistic local transition; the seed rows stay as-is.
        self.statuses
            .insert(medicine_id.to_string(), action.status());
        debug!(medicine_id, %action, "dose slot updated locally");
        Ok(())
    }

    /// Mark every actionable row of `period` with `action` ("Taken All" /
    /// "Skip All"). Returns how many rows were marked. Stops at the first
    /// seam failure, leaving already-marked rows marked.
    pub async fn mark_all(
        &mut self,
        period: TrackerPeriod,
        action: MedicineAction,
    ) -> ApiResult<usize> {
        let ids: Vec<String> = self
            .rows
            .iter()
            .filter(|row| row.period == period && row.actionable)
            .map(|row| row.id.clone())
            .collect();

        let mut marked = 0;
        for id in ids {
            self.mark(&id, action).await?;
            marked += 1;
        }
        Ok(marked)
    }
}
