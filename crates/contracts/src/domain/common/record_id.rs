use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор записи, назначенный бэкендом.
///
/// The backend is free to hand out numeric or string ids; both are kept as-is
/// and only ever used to build resource URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numeric_and_text_ids() {
        let n: RecordId = serde_json::from_str("42").unwrap();
        let s: RecordId = serde_json::from_str("\"65a1f0c2\"").unwrap();
        assert_eq!(n, RecordId::Number(42));
        assert_eq!(s, RecordId::Text("65a1f0c2".into()));
        assert_eq!(n.as_string(), "42");
        assert_eq!(s.as_string(), "65a1f0c2");
    }
}
