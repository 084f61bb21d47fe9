use talentrack_core::{
    AbsenceRequest, ApprovalRecord, Decision, DecisionResponse, ListEnvelope, ReviewerRole,
};

use super::{client::ApiClient, types::ApiError};

fn reviewer_url(base_url: &str, role: ReviewerRole, rest: &str) -> String {
    format!("{}/{}/ausencias/{}", base_url, role.path_segment(), rest)
}

impl ApiClient {
    /// Pending requests waiting on `role`.
    pub async fn list_review_queue(
        &self,
        role: ReviewerRole,
    ) -> Result<Vec<AbsenceRequest>, ApiError> {
        let url = reviewer_url(&self.resolved_base_url().await, role, "solicitudes/");
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        self.map_json_response::<ListEnvelope<AbsenceRequest>>(response)
            .await
            .map(ListEnvelope::into_items)
    }

    pub async fn get_review_request(
        &self,
        role: ReviewerRole,
        id: i64,
    ) -> Result<AbsenceRequest, ApiError> {
        let url = reviewer_url(
            &self.resolved_base_url().await,
            role,
            &format!("solicitudes/{}/", id),
        );
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        self.map_json_response(response).await
    }

    /// Submits one decision. Never retried beyond the token refresh: a
    /// conflict or validation failure comes back as the server's `detail`.
    pub async fn decide_request(
        &self,
        role: ReviewerRole,
        id: i64,
        decision: &Decision,
    ) -> Result<DecisionResponse, ApiError> {
        decision.validate_for(role)?;
        let encoding = role
            .action_encoding()
            .ok_or_else(|| ApiError::from(talentrack_core::DecisionError::NotAllowed))?;
        let body = decision.to_body(encoding);
        let url = reviewer_url(
            &self.resolved_base_url().await,
            role,
            &format!("solicitudes/{}/decidir/", id),
        );
        log::debug!("deciding request {} as {}", id, role.path_segment());
        let response = self
            .send_with_refresh(|| Ok(self.http_client().patch(&url).json(&body)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_decision_history(
        &self,
        role: ReviewerRole,
    ) -> Result<Vec<ApprovalRecord>, ApiError> {
        let url = reviewer_url(&self.resolved_base_url().await, role, "aprobaciones/");
        let response = self
            .send_with_refresh(|| Ok(self.http_client().get(&url)))
            .await?;
        self.map_json_response::<ListEnvelope<ApprovalRecord>>(response)
            .await
            .map(ListEnvelope::into_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviewer_urls_follow_role() {
        assert_eq!(
            reviewer_url("http://h/api", ReviewerRole::Manager, "solicitudes/4/decidir/"),
            "http://h/api/manager/ausencias/solicitudes/4/decidir/"
        );
        assert_eq!(
            reviewer_url("http://h/api", ReviewerRole::HumanResources, "aprobaciones/"),
            "http://h/api/rrhh/ausencias/aprobaciones/"
        );
    }
}
