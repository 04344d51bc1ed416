//! Date parsing helpers
//!
//! Query-string dates are parsed at the API handler layer; the scheduling
//! engine only ever sees typed `NaiveDate` values.

use chrono::NaiveDate;

use super::{AppError, AppResult};

/// Parse a YYYY-MM-DD date string
pub fn parse_date(field: &str, date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(field, format!("invalid date: {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date("from", "2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("from", "03/01/2025").is_err());
    }
}
