use serde_json::Value;
use talentrack_core::{AbsenceRequest, AbsenceType, ListEnvelope, NewAbsenceRequest};

use super::{client::ApiClient, types::ApiError};

impl ApiClient {
    pub async fn list_my_absences(&self) -> Result<Vec<AbsenceRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/empleado/ausencias/", base_url)))
            })
            .await?;
        self.map_json_response::<ListEnvelope<AbsenceRequest>>(response)
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn list_absence_types(&self) -> Result<Vec<AbsenceType>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .get(format!("{}/empleado/tipos-ausencia/", base_url)))
            })
            .await?;
        self.map_json_response::<ListEnvelope<AbsenceType>>(response)
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn create_absence(&self, payload: &NewAbsenceRequest) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .post(format!("{}/empleado/ausencias/", base_url))
                    .json(payload))
            })
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_absence(
        &self,
        id: i64,
        payload: &NewAbsenceRequest,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .put(format!("{}/empleado/ausencias/{}/", base_url, id))
                    .json(payload))
            })
            .await?;
        self.map_json_response(response).await
    }

    pub async fn cancel_absence(&self, id: i64) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_with_refresh(|| {
                Ok(self
                    .http_client()
                    .patch(format!("{}/empleado/ausencias/{}/cancelar/", base_url, id)))
            })
            .await?;
        self.map_json_response(response).await
    }
}
