use std::rc::Rc;
use talentrack_core::{
    AbsenceRequest, ApprovalRecord, Decision, DecisionOutcome, ReviewerRole,
};

use crate::api::{ApiClient, ApiError};

/// API access for one reviewer role; every call goes to that role's
/// endpoints.
#[derive(Clone)]
pub struct ReviewsRepository {
    client: Rc<ApiClient>,
    role: ReviewerRole,
}

impl ReviewsRepository {
    pub fn new(api: ApiClient, role: ReviewerRole) -> Self {
        Self {
            client: Rc::new(api),
            role,
        }
    }

    pub fn role(&self) -> ReviewerRole {
        self.role
    }

    pub async fn queue(&self) -> Result<Vec<AbsenceRequest>, ApiError> {
        self.client.list_review_queue(self.role).await
    }

    pub async fn request(&self, id: i64) -> Result<AbsenceRequest, ApiError> {
        self.client.get_review_request(self.role, id).await
    }

    pub async fn decide(&self, id: i64, decision: &Decision) -> Result<DecisionOutcome, ApiError> {
        self.client
            .decide_request(self.role, id, decision)
            .await
            .map(|response| DecisionOutcome::from_response(id, &response))
    }

    pub async fn history(&self) -> Result<Vec<ApprovalRecord>, ApiError> {
        self.client.list_decision_history(self.role).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;
    use talentrack_core::DecisionAction;

    #[tokio::test]
    async fn decide_maps_response_to_outcome() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/api/rrhh/ausencias/solicitudes/7/decidir/")
                    .json_body(json!({ "accion": "aprobar", "comentario": null }));
                then.status(200).json_body(json!({
                    "ok": true,
                    "solicitud_id": 7,
                    "estado": 2,
                    "estado_label": "aprobado"
                }));
            })
            .await;

        let repo = ReviewsRepository::new(
            ApiClient::new_with_base_url(server.url("/api")),
            ReviewerRole::HumanResources,
        );
        let outcome = repo
            .decide(7, &Decision::new(DecisionAction::Approve, None))
            .await
            .unwrap();
        assert_eq!(outcome.request_id, 7);
        assert_eq!(outcome.message(), "Solicitud aprobado.");
    }
}
