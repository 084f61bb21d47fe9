use std::rc::Rc;
use talentrack_core::{AbsenceRequest, AbsenceType, NewAbsenceRequest};

use crate::api::{ApiClient, ApiError};

#[derive(Clone)]
pub struct AbsencesRepository {
    client: Rc<ApiClient>,
}

impl AbsencesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_mine(&self) -> Result<Vec<AbsenceRequest>, ApiError> {
        self.client.list_my_absences().await
    }

    pub async fn list_types(&self) -> Result<Vec<AbsenceType>, ApiError> {
        self.client.list_absence_types().await
    }

    pub async fn create(&self, payload: &NewAbsenceRequest) -> Result<(), ApiError> {
        self.client.create_absence(payload).await.map(|_| ())
    }

    pub async fn update(&self, id: i64, payload: &NewAbsenceRequest) -> Result<(), ApiError> {
        self.client.update_absence(id, payload).await.map(|_| ())
    }

    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.client.cancel_absence(id).await.map(|_| ())
    }
}
