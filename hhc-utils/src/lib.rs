//! Shared utility functions for household survey chart crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    /// Date format used by the survey CSV: "YYYY-MM-DD"
    pub const SURVEY_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(SURVEY_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    /// Leading and trailing whitespace is ignored.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), SURVEY_DATE_FORMAT)?)
    }

    /// Midnight at the start of `date`.
    pub fn midnight(date: &NaiveDate) -> NaiveDateTime {
        date.and_time(chrono::NaiveTime::MIN)
    }

    /// Seconds since the Unix epoch for midnight of `date`.
    pub fn epoch_seconds(date: &NaiveDate) -> i64 {
        midnight(date).and_utc().timestamp()
    }

    /// Inverse of [`epoch_seconds`] for arbitrary instants.
    /// Returns `None` when the value is outside chrono's representable range.
    pub fn from_epoch_seconds(secs: i64) -> Option<NaiveDateTime> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
    }

    /// The first calendar date whose midnight is at or after `instant`.
    pub fn ceil_to_date(instant: &NaiveDateTime) -> NaiveDate {
        let date = instant.date();
        if instant.time() == chrono::NaiveTime::MIN {
            date
        } else {
            date.succ_opt().unwrap_or(date)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2016, 7, 16).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2016-07-16");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_trims_whitespace() {
            let parsed = parse_date(" 2016-07-28 ").unwrap();
            assert_eq!(parsed, NaiveDate::from_ymd_opt(2016, 7, 28).unwrap());
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("07/16/2016").is_err());
            assert!(parse_date("20160716").is_err());
            assert!(parse_date("").is_err());
            assert!(parse_date("2016-02-30").is_err());
        }

        #[test]
        fn test_epoch_round_trip_is_midnight() {
            let date = NaiveDate::from_ymd_opt(2016, 7, 16).unwrap();
            let secs = epoch_seconds(&date);
            assert_eq!(from_epoch_seconds(secs).unwrap(), midnight(&date));
            assert_eq!(epoch_seconds(&date.succ_opt().unwrap()) - secs, 86_400);
        }

        #[test]
        fn test_ceil_to_date() {
            let date = NaiveDate::from_ymd_opt(2016, 7, 16).unwrap();
            assert_eq!(ceil_to_date(&midnight(&date)), date);
            let noon = date.and_hms_opt(12, 0, 0).unwrap();
            assert_eq!(ceil_to_date(&noon), date.succ_opt().unwrap());
        }
    }
}
