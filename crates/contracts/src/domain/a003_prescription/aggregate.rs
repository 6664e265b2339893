use crate::domain::common::RecordId;
use crate::shared::validation::{FieldRule, FieldValues, Pattern};
use serde::{Deserialize, Serialize};

/// Receta médica
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub paciente: String,
    pub medicamento: String,
    #[serde(default)]
    pub dosis: String,
    #[serde(default)]
    pub indicaciones: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub fecha: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionDto {
    pub paciente: String,
    pub medicamento: String,
    pub dosis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicaciones: Option<String>,
    pub fecha: String,
}

impl PrescriptionDto {
    pub fn normalized(&self) -> Self {
        Self {
            paciente: self.paciente.trim().to_string(),
            medicamento: self.medicamento.trim().to_string(),
            dosis: self.dosis.trim().to_string(),
            indicaciones: self
                .indicaciones
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            fecha: self.fecha.trim().to_string(),
        }
    }
}

impl FieldValues for PrescriptionDto {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "paciente" => Some(self.paciente.as_str()),
            "medicamento" => Some(self.medicamento.as_str()),
            "dosis" => Some(self.dosis.as_str()),
            "fecha" => Some(self.fecha.as_str()),
            "indicaciones" => self.indicaciones.as_deref(),
            _ => None,
        }
    }
}

pub const PRESCRIPTION_RULES: &[FieldRule] = &[
    FieldRule::required("paciente", "Paciente").with_pattern(Pattern::PersonName),
    FieldRule::required("medicamento", "Medicamento"),
    FieldRule::required("dosis", "Dosis"),
    FieldRule::required("fecha", "Fecha").with_pattern(Pattern::IsoDate),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate;

    #[test]
    fn test_rules() {
        let dto = PrescriptionDto {
            paciente: "Ana Pérez".into(),
            medicamento: "Amoxicilina 500mg".into(),
            fecha: "2024-13-01".into(),
            ..Default::default()
        };
        let errors = validate(&dto, PRESCRIPTION_RULES);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Dosis es obligatorio");
        assert_eq!(errors[1].field, "fecha");
    }
}
