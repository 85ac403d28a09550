//! Request types for the stamp reporting API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Path parameters shared by the daily report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPath {
    /// The employee to report on.
    pub employee_id: u32,
    /// The reporting day (`YYYY-MM-DD`).
    pub day: NaiveDate,
}

/// Query parameters of the respites endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RespitesQuery {
    /// Longest gap, in minutes, still counted as a respite.
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub max_minutes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respites_query_defaults_to_none() {
        let query: RespitesQuery = serde_json::from_str("{}").unwrap();
        assert!(query.max_minutes.is_none());
    }

    #[test]
    fn test_day_path_deserialization() {
        let path: DayPath =
            serde_json::from_str(r#"{"employee_id": 2, "day": "2016-02-29"}"#).unwrap();
        assert_eq!(path.employee_id, 2);
        assert_eq!(path.day, NaiveDate::from_ymd_opt(2016, 2, 29).unwrap());
    }
}
