use crate::domain::common::RecordId;
use crate::shared::validation::{FieldRule, FieldValues, Pattern};
use serde::{Deserialize, Serialize};

/// Пациент, как его отдаёт бэкенд
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub obra_social: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre.trim(), self.apellido.trim())
            .trim()
            .to_string()
    }
}

/// Form payload for create (POST) and update (PUT)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    #[serde(skip)]
    pub id: Option<RecordId>,
    pub nombre: String,
    pub apellido: String,
    pub dni: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obra_social: Option<String>,
}

impl From<&Patient> for PatientDto {
    fn from(p: &Patient) -> Self {
        Self {
            id: Some(p.id.clone()),
            nombre: p.nombre.clone(),
            apellido: p.apellido.clone(),
            dni: p.dni.clone(),
            telefono: p.telefono.clone(),
            email: p.email.clone(),
            fecha_nacimiento: p.fecha_nacimiento.clone(),
            obra_social: p.obra_social.clone(),
        }
    }
}

impl PatientDto {
    /// Trim every field and turn empty optional fields into `None`
    pub fn normalized(&self) -> Self {
        fn opt(v: &Option<String>) -> Option<String> {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }
        Self {
            id: self.id.clone(),
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            dni: self.dni.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            email: opt(&self.email),
            fecha_nacimiento: opt(&self.fecha_nacimiento),
            obra_social: opt(&self.obra_social),
        }
    }
}

impl FieldValues for PatientDto {
    fn field_value(&self, field: &str) -> Option<&str> {
        match field {
            "nombre" => Some(self.nombre.as_str()),
            "apellido" => Some(self.apellido.as_str()),
            "dni" => Some(self.dni.as_str()),
            "telefono" => Some(self.telefono.as_str()),
            "email" => self.email.as_deref(),
            "fechaNacimiento" => self.fecha_nacimiento.as_deref(),
            "obraSocial" => self.obra_social.as_deref(),
            _ => None,
        }
    }
}

/// Field priority for the validation modal
pub const PATIENT_RULES: &[FieldRule] = &[
    FieldRule::required("nombre", "Nombre").with_pattern(Pattern::PersonName),
    FieldRule::required("apellido", "Apellido").with_pattern(Pattern::PersonName),
    FieldRule::required("dni", "DNI").with_pattern(Pattern::Digits { min: 7, max: 8 }),
    FieldRule::required("telefono", "Teléfono").with_pattern(Pattern::Phone),
    FieldRule::optional("email", "Email").with_pattern(Pattern::Email),
    FieldRule::optional("fechaNacimiento", "Fecha de nacimiento").with_pattern(Pattern::IsoDate),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::validate;

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{"_id":"p1","nombre":"Ana","apellido":"Pérez","dni":"30111222","fechaNacimiento":"1990-05-01"}"#;
        let p: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, RecordId::Text("p1".into()));
        assert_eq!(p.full_name(), "Ana Pérez");
        assert_eq!(p.telefono, "");
        assert_eq!(p.fecha_nacimiento.as_deref(), Some("1990-05-01"));
    }

    #[test]
    fn test_dto_serialization_skips_id_and_empty_optionals() {
        let dto = PatientDto {
            id: Some(RecordId::Number(3)),
            nombre: " Ana ".into(),
            apellido: "Pérez".into(),
            dni: "30111222".into(),
            telefono: "11 4555 1234".into(),
            email: Some("  ".into()),
            ..Default::default()
        }
        .normalized();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert!(json.get("id").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_rules_report_in_priority_order() {
        let dto = PatientDto {
            dni: "abc".into(),
            email: Some("mal".into()),
            ..Default::default()
        };
        let fields: Vec<_> = validate(&dto, PATIENT_RULES)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["nombre", "apellido", "dni", "telefono", "email"]);
    }
}
