use contracts::domain::a002_appointment::aggregate::{
    Appointment, AppointmentDto, AppointmentStatus, AppointmentStatusPatch,
};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{api_url, resource_url, APPOINTMENTS_PATH};
use crate::shared::http;

/// Fetch all appointments
pub async fn fetch_appointments() -> Result<Vec<Appointment>, ApiError> {
    http::get_json(&api_url(APPOINTMENTS_PATH)).await
}

pub async fn create_appointment(dto: &AppointmentDto) -> Result<(), ApiError> {
    http::post_json(&api_url(APPOINTMENTS_PATH), dto).await
}

/// Change only the status of an appointment
pub async fn update_status(id: &RecordId, estado: AppointmentStatus) -> Result<(), ApiError> {
    http::patch_json(
        &resource_url(APPOINTMENTS_PATH, &id.as_string()),
        &AppointmentStatusPatch { estado },
    )
    .await
}

pub async fn delete_appointment(id: &RecordId) -> Result<(), ApiError> {
    http::delete(&resource_url(APPOINTMENTS_PATH, &id.as_string())).await
}
