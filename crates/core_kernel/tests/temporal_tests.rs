//! Unit tests for the temporal module
//!
//! Tests cover DateRange construction and the resolution of every
//! RelativeRange variant against fixed "today" values.

use chrono::{Datelike, NaiveDate};
use core_kernel::temporal::{DateRange, RelativeRange, TemporalError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod date_range {
    use super::*;

    #[test]
    fn test_new_accepts_single_day() {
        let range = DateRange::new(date(2024, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(range.days(), 0);
        assert!(range.contains(date(2024, 6, 15)));
    }

    #[test]
    fn test_new_fails_when_start_after_end() {
        let result = DateRange::new(date(2024, 12, 31), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidRange { .. })));
    }

    #[test]
    fn test_from_bounds_without_bounds_is_none() {
        assert_eq!(DateRange::from_bounds(None, None).unwrap(), None);
    }

    #[test]
    fn test_from_bounds_open_end() {
        let range = DateRange::from_bounds(Some(date(2024, 3, 1)), None)
            .unwrap()
            .unwrap();
        assert!(!range.contains(date(2024, 2, 29)));
        assert!(range.contains(date(2024, 3, 1)));
        assert!(range.contains(date(2099, 1, 1)));
    }

    #[test]
    fn test_from_bounds_open_start() {
        let range = DateRange::from_bounds(None, Some(date(2024, 3, 1)))
            .unwrap()
            .unwrap();
        assert!(range.contains(date(1990, 1, 1)));
        assert!(!range.contains(date(2024, 3, 2)));
    }

    #[test]
    fn test_from_bounds_rejects_inverted() {
        let result = DateRange::from_bounds(Some(date(2024, 3, 2)), Some(date(2024, 3, 1)));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message_names_both_dates() {
        let err = DateRange::new(date(2024, 3, 2), date(2024, 3, 1)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2024-03-02"));
        assert!(message.contains("2024-03-01"));
    }
}

mod relative_range {
    use super::*;

    #[test]
    fn test_trailing_windows_end_today() {
        let today = date(2024, 5, 20);
        assert_eq!(
            RelativeRange::OneWeekBeforeToNow.resolve(today),
            DateRange { start: date(2024, 5, 14), end: today }
        );
        assert_eq!(
            RelativeRange::TwoWeeksBeforeToNow.resolve(today),
            DateRange { start: date(2024, 5, 7), end: today }
        );
        assert_eq!(
            RelativeRange::Last30DaysToNow.resolve(today),
            DateRange { start: date(2024, 4, 21), end: today }
        );
        assert_eq!(RelativeRange::Last60DaysToNow.resolve(today).start, date(2024, 3, 22));
        assert_eq!(RelativeRange::Last90DaysToNow.resolve(today).start, date(2024, 2, 21));
    }

    #[test]
    fn test_trailing_windows_span_exactly_n_days() {
        let today = date(2024, 3, 15);
        for (variant, n) in [
            (RelativeRange::OneWeekBeforeToNow, 7),
            (RelativeRange::TwoWeeksBeforeToNow, 14),
            (RelativeRange::Last30DaysToNow, 30),
            (RelativeRange::Last60DaysToNow, 60),
            (RelativeRange::Last90DaysToNow, 90),
        ] {
            let range = variant.resolve(today);
            let oldest = today - chrono::Days::new(n - 1);
            let too_old = today - chrono::Days::new(n);
            assert!(range.contains(oldest), "{variant:?} should include {oldest}");
            assert!(!range.contains(too_old), "{variant:?} should exclude {too_old}");
        }
    }

    #[test]
    fn test_last_calendar_month() {
        let range = RelativeRange::Last1CalendarMonth.resolve(date(2024, 3, 10));
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_last_two_calendar_months() {
        let range = RelativeRange::Last2CalendarMonths.resolve(date(2024, 3, 31));
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_last_three_calendar_months_excludes_current_month() {
        let today = date(2024, 2, 1);
        let range = RelativeRange::Last3CalendarMonths.resolve(today);
        assert_eq!(range.start, date(2023, 11, 1));
        assert_eq!(range.end, date(2024, 1, 31));
        assert!(!range.contains(today));
    }

    #[test]
    fn test_serde_uses_front_end_keys() {
        let json = serde_json::to_string(&RelativeRange::Last30DaysToNow).unwrap();
        assert_eq!(json, "\"last30DaysToNow\"");

        let parsed: RelativeRange = serde_json::from_str("\"last1CalendarMonth\"").unwrap();
        assert_eq!(parsed, RelativeRange::Last1CalendarMonth);

        let parsed: RelativeRange = serde_json::from_str("\"oneWeekBeforeToNow\"").unwrap();
        assert_eq!(parsed, RelativeRange::OneWeekBeforeToNow);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let parsed: Result<RelativeRange, _> = serde_json::from_str("\"lastDecade\"");
        assert!(parsed.is_err());
    }
}

proptest! {
    #[test]
    fn prop_resolved_windows_are_well_formed(days in 0i64..20_000) {
        let today = date(1990, 1, 1) + chrono::Duration::days(days);
        for variant in RelativeRange::ALL {
            let range = variant.resolve(today);
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= today);
        }
    }

    #[test]
    fn prop_calendar_windows_start_on_first_of_month(days in 0i64..20_000) {
        let today = date(1990, 1, 1) + chrono::Duration::days(days);
        for variant in [
            RelativeRange::Last1CalendarMonth,
            RelativeRange::Last2CalendarMonths,
            RelativeRange::Last3CalendarMonths,
        ] {
            let range = variant.resolve(today);
            prop_assert_eq!(range.start.day(), 1);
            prop_assert_ne!(range.end.month(), today.month());
        }
    }
}
