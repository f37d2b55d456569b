//! Unit tests for display-date parsing
//!
//! Covers the contract the collection layer relies on: masked input in
//! day/month/year order, calendar validation, and partial-input masking.

use chrono::NaiveDate;
use core_kernel::dates::{
    format_display_date, mask_partial_date, parse_display_date, DateParseError,
};

mod parsing {
    use super::*;

    #[test]
    fn test_parses_fully_slashed_input() {
        assert_eq!(
            parse_display_date("15/06/1988").unwrap(),
            NaiveDate::from_ymd_opt(1988, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_parses_digits_only_input() {
        assert_eq!(
            parse_display_date("15061988").unwrap(),
            NaiveDate::from_ymd_opt(1988, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_rejects_month_thirteen() {
        assert_eq!(
            parse_display_date("01/13/2020").unwrap_err(),
            DateParseError::InvalidDate {
                day: 1,
                month: 13,
                year: 2020
            }
        );
    }

    #[test]
    fn test_rejects_day_zero() {
        assert!(matches!(
            parse_display_date("00/06/2020"),
            Err(DateParseError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_rejects_thirty_day_month_overflow() {
        assert!(parse_display_date("31/04/2020").is_err());
        assert!(parse_display_date("30/04/2020").is_ok());
    }

    #[test]
    fn test_partial_input_is_incomplete_not_invalid() {
        assert!(matches!(
            parse_display_date("15/06/88"),
            Err(DateParseError::Incomplete(_))
        ));
    }
}

mod masking {
    use super::*;

    #[test]
    fn test_mask_builds_up_with_keystrokes() {
        assert_eq!(mask_partial_date("1"), "1");
        assert_eq!(mask_partial_date("15"), "15");
        assert_eq!(mask_partial_date("150"), "15/0");
        assert_eq!(mask_partial_date("1506"), "15/06");
        assert_eq!(mask_partial_date("150619"), "15/06/19");
        assert_eq!(mask_partial_date("15061988"), "15/06/1988");
    }

    #[test]
    fn test_mask_is_idempotent_on_masked_input() {
        let masked = mask_partial_date("15061988");
        assert_eq!(mask_partial_date(&masked), masked);
    }

    #[test]
    fn test_mask_truncates_excess_digits() {
        assert_eq!(mask_partial_date("150619881234"), "15/06/1988");
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_format_pads_single_digits() {
        let date = NaiveDate::from_ymd_opt(2001, 1, 9).unwrap();
        assert_eq!(format_display_date(date), "09/01/2001");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for input in ["29/02/2024", "01/01/1950", "31/12/2099"] {
            let date = parse_display_date(input).unwrap();
            assert_eq!(format_display_date(date), input);
        }
    }
}
