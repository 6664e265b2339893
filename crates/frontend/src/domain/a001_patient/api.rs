use contracts::domain::a001_patient::aggregate::{Patient, PatientDto};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, resource_url, PATIENTS_PATH};
use crate::shared::http;

/// Fetch all patients
pub async fn fetch_patients() -> Result<Vec<Patient>, ApiError> {
    http::get_json(&api_url(PATIENTS_PATH)).await
}

pub async fn create_patient(dto: &PatientDto) -> Result<(), ApiError> {
    http::post_json(&api_url(PATIENTS_PATH), dto).await
}

pub async fn update_patient(id: &RecordId, dto: &PatientDto) -> Result<(), ApiError> {
    http::put_json(&resource_url(PATIENTS_PATH, &id.as_string()), dto).await
}

pub async fn delete_patient(id: &RecordId) -> Result<(), ApiError> {
    http::delete(&resource_url(PATIENTS_PATH, &id.as_string())).await
}
