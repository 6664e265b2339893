//! Errors returned by the clinic REST API client

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (backend unreachable, CORS, ...)
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the best-effort text extracted from the body
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error("No se pudo preparar la solicitud: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: extract_error_message(status, body),
        }
    }
}

/// Extract a human readable message from an error response body.
///
/// Lookup order: JSON `errors` array, JSON `message`, JSON `error`, a bare
/// JSON string, then the raw body as plain text, then `HTTP <status>`.
/// A JSON body without any of those fields yields `HTTP <status>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    let fallback = || format!("HTTP {}", status);

    if body.is_empty() {
        return fallback();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => message_from_json(&json).unwrap_or_else(fallback),
        Err(_) => body.to_string(),
    }
}

fn message_from_json(json: &Value) -> Option<String> {
    if let Value::String(s) = json {
        return non_empty(s);
    }

    if let Some(errors) = json.get("errors").and_then(Value::as_array) {
        let lines: Vec<String> = errors.iter().filter_map(error_item_text).collect();
        if !lines.is_empty() {
            return Some(lines.join("\n"));
        }
    }

    ["message", "error"]
        .iter()
        .filter_map(|key| json.get(*key))
        .find_map(|v| v.as_str().and_then(non_empty))
}

fn error_item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => non_empty(s),
        Value::Object(_) => ["msg", "message"]
            .iter()
            .filter_map(|key| item.get(*key))
            .find_map(|v| v.as_str().and_then(non_empty)),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_array_wins() {
        let body = r#"{"errors":[{"msg":"DNI duplicado"},"Fecha inválida"],"message":"x"}"#;
        assert_eq!(
            extract_error_message(400, body),
            "DNI duplicado\nFecha inválida"
        );
    }

    #[test]
    fn test_message_then_error_field() {
        assert_eq!(
            extract_error_message(409, r#"{"message":"Turno ocupado"}"#),
            "Turno ocupado"
        );
        assert_eq!(
            extract_error_message(500, r#"{"error":"Falla interna"}"#),
            "Falla interna"
        );
        assert_eq!(
            extract_error_message(400, r#"{"errors":[],"error":"Sin datos"}"#),
            "Sin datos"
        );
    }

    #[test]
    fn test_plain_text_and_generic_fallback() {
        assert_eq!(extract_error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_error_message(404, "   "), "HTTP 404");
        assert_eq!(extract_error_message(400, r#"{"ok":false}"#), "HTTP 400");
    }

    #[test]
    fn test_display_uses_extracted_message() {
        let err = ApiError::from_response(422, r#"{"message":"Paciente inexistente"}"#);
        assert_eq!(err.to_string(), "Paciente inexistente");
        assert_eq!(
            ApiError::Network("timeout".into()).to_string(),
            "No se pudo conectar con el servidor: timeout"
        );
    }
}
