// src/services/unlock_gate.rs
//
// Unlock Gate - date-based availability
//
// RULES:
// - Day granularity: any time of day on or after the release day unlocks
// - Fail-closed: an unparsable release date keeps the record locked
// - Pure: `now` is always supplied by the caller

use chrono::NaiveDateTime;
use log::debug;

use crate::domain::media::MediaRecord;

/// True when the record's release day is on or before `now`'s day
pub fn is_unlocked(record: &MediaRecord, now: NaiveDateTime) -> bool {
    match record.release_date() {
        Some(release) => release <= now.date(),
        None => {
            debug!(
                "Release date '{}' of '{}' is unparsable; treating as locked",
                record.date, record.id
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn record(date: &str) -> MediaRecord {
        MediaRecord::new("day", date, "https://example.com/v")
    }

    #[test]
    fn test_locked_before_release_day() {
        assert!(!is_unlocked(&record("2025-01-01"), at(2024, 12, 31, 23, 59)));
    }

    #[test]
    fn test_unlocked_from_first_minute_of_release_day() {
        assert!(is_unlocked(&record("2025-01-01"), at(2025, 1, 1, 0, 0)));
        assert!(is_unlocked(&record("2025-01-01"), at(2025, 1, 1, 23, 59)));
    }

    #[test]
    fn test_unlocked_after_release_day() {
        assert!(is_unlocked(&record("2025-01-01"), at(2025, 6, 1, 12, 0)));
    }

    #[test]
    fn test_timestamp_date_uses_its_calendar_day() {
        // Later in the day than `now`, still unlocked at day granularity
        let record = record("2025-01-01T18:00:00Z");
        assert!(is_unlocked(&record, at(2025, 1, 1, 8, 0)));
    }

    #[test]
    fn test_malformed_date_fails_closed() {
        for date in ["", "tomorrow", "2025-13-01", "01/02/2025"] {
            assert!(
                !is_unlocked(&record(date), at(2100, 1, 1, 0, 0)),
                "date {:?} should stay locked",
                date
            );
        }
    }

    #[test]
    fn test_matches_date_comparison_for_a_range_of_days() {
        let release = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
        let record = record("2025-02-15");
        let mut day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        while day < NaiveDate::from_ymd_opt(2025, 4, 1).unwrap() {
            let now = day.and_hms_opt(12, 0, 0).unwrap();
            assert_eq!(is_unlocked(&record, now), release <= day);
            day = day.succ_opt().unwrap();
        }
    }
}
