use contracts::domain::a003_prescription::aggregate::{Prescription, PrescriptionDto};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, resource_url, PRESCRIPTIONS_PATH};
use crate::shared::http;

pub async fn fetch_prescriptions() -> Result<Vec<Prescription>, ApiError> {
    http::get_json(&api_url(PRESCRIPTIONS_PATH)).await
}

pub async fn create_prescription(dto: &PrescriptionDto) -> Result<(), ApiError> {
    http::post_json(&api_url(PRESCRIPTIONS_PATH), dto).await
}

pub async fn delete_prescription(id: &RecordId) -> Result<(), ApiError> {
    http::delete(&resource_url(PRESCRIPTIONS_PATH, &id.as_string())).await
}
