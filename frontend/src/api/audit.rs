use serde::de::DeserializeOwned;
use talentrack_core::{AbsenceRequest, ApprovalRecord, ListEnvelope, VacationBalance};

use super::{client::ApiClient, types::ApiError};

impl ApiClient {
    async fn auditor_list<T>(&self, resource: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/auditor/ausencias/{}/",
            self.resolved_base_url().await,
            resource
        );
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        self.map_json_response::<ListEnvelope<T>>(response)
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn audit_list_requests(&self) -> Result<Vec<AbsenceRequest>, ApiError> {
        self.auditor_list("solicitudes").await
    }

    pub async fn audit_list_approvals(&self) -> Result<Vec<ApprovalRecord>, ApiError> {
        self.auditor_list("aprobaciones").await
    }

    pub async fn audit_list_vacation_balances(&self) -> Result<Vec<VacationBalance>, ApiError> {
        self.auditor_list("saldos-vacaciones").await
    }
}
