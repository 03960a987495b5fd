//! Time and timestamp helpers.

use chrono::NaiveDateTime;

/// Zone-less timestamp used for hire dates and assignment issue dates.
pub type Timestamp = NaiveDateTime;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_as_iso_without_zone() {
        let ts: Timestamp = "2021-03-01T09:30:00".parse().unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2021-03-01T09:30:00\"");
    }

    #[test]
    fn should_reject_date_without_time() {
        assert!("2021-03-01".parse::<Timestamp>().is_err());
    }
}
