use std::rc::Rc;
use talentrack_core::{AbsenceRequest, ApprovalRecord, VacationBalance};

use crate::api::{ApiClient, ApiError};

#[derive(Clone)]
pub struct AuditRepository {
    client: Rc<ApiClient>,
}

impl AuditRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn requests(&self) -> Result<Vec<AbsenceRequest>, ApiError> {
        self.client.audit_list_requests().await
    }

    pub async fn approvals(&self) -> Result<Vec<ApprovalRecord>, ApiError> {
        self.client.audit_list_approvals().await
    }

    pub async fn vacation_balances(&self) -> Result<Vec<VacationBalance>, ApiError> {
        self.client.audit_list_vacation_balances().await
    }
}
