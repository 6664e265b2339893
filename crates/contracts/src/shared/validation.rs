//! Validation rules for form fields
//!
//! Every form declares a static list of [`FieldRule`]s. The list order is the
//! field priority: [`validate`] reports failures in exactly that order.

use chrono::{NaiveDate, NaiveTime};

/// Format constraint applied to a non-empty field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Only ASCII digits, length within `min..=max`
    Digits { min: usize, max: usize },
    /// 8-15 digits, allowing spaces, `+`, `-` and parentheses
    Phone,
    /// `local@domain.tld`
    Email,
    /// `YYYY-MM-DD`, must be a real calendar date
    IsoDate,
    /// `HH:MM`, 24h clock
    Time24,
    /// Letters, spaces, apostrophes and hyphens
    PersonName,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match *self {
            Pattern::Digits { min, max } => {
                let len = value.chars().count();
                len >= min && len <= max && value.chars().all(|c| c.is_ascii_digit())
            }
            Pattern::Phone => {
                let allowed = value
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
                let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
                allowed && (8..=15).contains(&digits)
            }
            Pattern::Email => is_email(value),
            Pattern::IsoDate => {
                value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
            }
            Pattern::Time24 => {
                value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
            }
            Pattern::PersonName => {
                value.chars().any(char::is_alphabetic)
                    && value
                        .chars()
                        .all(|c| c.is_alphabetic() || matches!(c, ' ' | '\'' | '-'))
            }
        }
    }

    fn describe(&self) -> String {
        match *self {
            Pattern::Digits { min, max } if min == max => format!("debe tener {} dígitos", min),
            Pattern::Digits { min, max } => format!("debe tener entre {} y {} dígitos", min, max),
            Pattern::Phone => "debe tener entre 8 y 15 dígitos".to_string(),
            Pattern::Email => "no es un correo electrónico válido".to_string(),
            Pattern::IsoDate => "debe ser una fecha válida (AAAA-MM-DD)".to_string(),
            Pattern::Time24 => "debe ser una hora válida (HH:MM)".to_string(),
            Pattern::PersonName => "solo puede contener letras".to_string(),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| !l.is_empty())
        && labels.last().map(|tld| tld.len() >= 2).unwrap_or(false)
}

/// Validation rule for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub pattern: Option<Pattern>,
}

impl FieldRule {
    pub const fn required(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            required: true,
            pattern: None,
        }
    }

    pub const fn optional(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            required: false,
            pattern: None,
        }
    }

    pub const fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Check a value against the rule. Empty optional fields always pass.
    pub fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(format!("{} es obligatorio", self.label));
            }
            return Ok(());
        }
        match self.pattern {
            Some(pattern) if !pattern.matches(value) => {
                Err(format!("{} {}", self.label, pattern.describe()))
            }
            _ => Ok(()),
        }
    }
}

/// A form whose fields can be looked up by name
pub trait FieldValues {
    fn field_value(&self, field: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validate a form, one error per failing field, in rule order.
pub fn validate<T: FieldValues>(form: &T, rules: &[FieldRule]) -> Vec<FieldError> {
    rules
        .iter()
        .filter_map(|rule| {
            let value = form.field_value(rule.field).unwrap_or("");
            rule.check(value).err().map(|message| FieldError {
                field: rule.field,
                message,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Form(HashMap<&'static str, &'static str>);

    impl FieldValues for Form {
        fn field_value(&self, field: &str) -> Option<&str> {
            self.0.get(field).copied()
        }
    }

    const RULES: &[FieldRule] = &[
        FieldRule::required("nombre", "Nombre").with_pattern(Pattern::PersonName),
        FieldRule::required("dni", "DNI").with_pattern(Pattern::Digits { min: 7, max: 8 }),
        FieldRule::optional("email", "Email").with_pattern(Pattern::Email),
    ];

    #[test]
    fn test_errors_follow_rule_order() {
        let form = Form(HashMap::from([("email", "nope"), ("dni", "12")]));
        let errors = validate(&form, RULES);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["nombre", "dni", "email"]);
        assert_eq!(errors[0].message, "Nombre es obligatorio");
        assert_eq!(errors[1].message, "DNI debe tener entre 7 y 8 dígitos");
    }

    #[test]
    fn test_valid_form_and_empty_optional() {
        let form = Form(HashMap::from([("nombre", "María José"), ("dni", "30123456")]));
        assert!(validate(&form, RULES).is_empty());
    }

    #[test]
    fn test_patterns() {
        assert!(Pattern::Email.matches("dr@fachero.com.ar"));
        assert!(!Pattern::Email.matches("dr@fachero"));
        assert!(!Pattern::Email.matches("dr @fachero.com"));
        assert!(Pattern::Phone.matches("+54 (11) 4555-1234"));
        assert!(!Pattern::Phone.matches("1234"));
        assert!(!Pattern::Phone.matches("11-4555-abcd"));
        assert!(Pattern::IsoDate.matches("2024-02-29"));
        assert!(!Pattern::IsoDate.matches("2023-02-29"));
        assert!(!Pattern::IsoDate.matches("2024-2-9"));
        assert!(Pattern::Time24.matches("09:30"));
        assert!(!Pattern::Time24.matches("24:00"));
        assert!(Pattern::PersonName.matches("O'Higgins-Peña"));
        assert!(!Pattern::PersonName.matches("R2D2"));
    }
}
