use crate::domain::common::RecordId;
use crate::shared::validation::{FieldRule, FieldValues, Pattern};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pendiente,
    Confirmado,
    Cancelado,
    Completado,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pendiente,
        AppointmentStatus::Confirmado,
        AppointmentStatus::Cancelado,
        AppointmentStatus::Completado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "pendiente",
            AppointmentStatus::Confirmado => "confirmado",
            AppointmentStatus::Cancelado => "cancelado",
            AppointmentStatus::Completado => "completado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "Pendiente",
            AppointmentStatus::Confirmado => "Confirmado",
            AppointmentStatus::Cancelado => "Cancelado",
            AppointmentStatus::Completado => "Completado",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Turno: запись пациента на приём
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub paciente: String,
    /// `YYYY-MM-DD`
    pub fecha: String,
    /// `HH:MM`
    pub hora: String,
    #[serde(default)]
    pub motivo: String,
    #[serde(default)]
    pub estado: AppointmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub paciente: String,
    pub fecha: String,
    pub hora: String,
    pub motivo: String,
    pub estado: AppointmentStatus,
}

impl AppointmentDto {
    pub fn normalized(&self) -> Self {
        Self {
            paciente: self.paciente.trim().to_string(),
            fecha: self.fecha.trim().to_string(),
            hora: self.hora.trim().to_string(),
            motivo: self.motivo.trim().to_string(),
            estado: self.estado,
        }
    }
}

/// Body of the PATCH status update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppointmentStatusPatch {
    pub estado: AppointmentStatus,
}

impl FieldValues for AppointmentDto {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "paciente" => Some(self.paciente.as_str()),
            "fecha" => Some(self.fecha.as_str()),
            "hora" => Some(self.hora.as_str()),
            "motivo" => Some(self.motivo.as_str()),
            _ => None,
        }
    }
}

pub const APPOINTMENT_RULES: &[FieldRule] = &[
    FieldRule::required("paciente", "Paciente").with_pattern(Pattern::PersonName),
    FieldRule::required("fecha", "Fecha").with_pattern(Pattern::IsoDate),
    FieldRule::required("hora", "Hora").with_pattern(Pattern::Time24),
    FieldRule::required("motivo", "Motivo"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = r#"{"id":7,"paciente":"Ana Pérez","fecha":"2024-06-03","hora":"10:30","estado":"confirmado"}"#;
        let a: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(a.estado, AppointmentStatus::Confirmado);
        assert_eq!(a.motivo, "");

        let patch = AppointmentStatusPatch {
            estado: AppointmentStatus::Cancelado,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"estado":"cancelado"}"#
        );
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let json = r#"{"_id":"a1","paciente":"Ana","fecha":"2024-06-03","hora":"10:30"}"#;
        let a: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(a.estado, AppointmentStatus::Pendiente);
        assert_eq!(AppointmentStatus::parse("completado"), Some(AppointmentStatus::Completado));
        assert_eq!(AppointmentStatus::parse("otro"), None);
    }
}
