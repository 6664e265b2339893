/// Date helpers for list screens
///
/// The backend speaks ISO (`YYYY-MM-DD`); screens show `DD/MM/YYYY`.
use chrono::NaiveDate;

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"; anything else is returned as-is
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Today's date in ISO format, used to prefill forms
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
