//! Calendar date handling
//!
//! Dates enter the model as ISO `YYYY-MM-DD` strings or `chrono::NaiveDate`
//! values and are reduced to a whole number of days since the J2000 calendar
//! day.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::constants::J2000_DATE;
use crate::{Result, SolError};

/// Format accepted by [`parse_date`]
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date
///
/// The year must be exactly four digits, 0001 to 9999. The offending string
/// is carried in [`SolError::InvalidDate`]; no fallback date is ever
/// substituted here.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = || SolError::InvalidDate(input.to_string());

    let four_digit_year = input.len() > 4
        && input.as_bytes()[..4].iter().all(u8::is_ascii_digit)
        && input.as_bytes()[4] == b'-';
    if !four_digit_year {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The J2000 reference date (2000-01-01)
pub fn epoch() -> NaiveDate {
    J2000_DATE
}

/// Whole days elapsed from J2000 to `date`, negative before the epoch
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(J2000_DATE).num_days()
}

/// The calendar date `days` days after J2000
pub fn date_from_epoch(days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|offset| J2000_DATE.checked_add_signed(offset))
        .ok_or_else(|| SolError::InvalidDate(format!("J2000{:+} days", days)))
}

/// Outcome of resolving a user-supplied date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    /// The input was present but invalid, so `today` was used instead
    pub fell_back: bool,
}

/// Resolve optional user input to a date, using `today` when it is absent,
/// blank or invalid
pub fn resolve_date(input: Option<&str>, today: NaiveDate) -> ResolvedDate {
    let text = match input.map(str::trim) {
        None | Some("") => {
            return ResolvedDate {
                date: today,
                fell_back: false,
            }
        }
        Some(text) => text,
    };

    match parse_date(text) {
        Ok(date) => ResolvedDate {
            date,
            fell_back: false,
        },
        Err(e) => {
            log::warn!("{}; using {} instead", e, today);
            ResolvedDate {
                date: today,
                fell_back: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_days_since_epoch() {
        assert_eq!(days_since_epoch(epoch()), 0);
        assert_eq!(days_since_epoch(parse_date("2000-01-02").unwrap()), 1);
        assert_eq!(days_since_epoch(parse_date("1999-12-31").unwrap()), -1);
        // 2000 is a leap year
        assert_eq!(days_since_epoch(parse_date("2001-01-01").unwrap()), 366);
        assert_eq!(days_since_epoch(parse_date("0001-01-01").unwrap()), -730_119);
        assert_eq!(days_since_epoch(parse_date("9999-12-31").unwrap()), 2_921_939);
    }

    #[test]
    fn test_days_since_epoch_far_past() {
        let date = NaiveDate::from_ymd_opt(-5000, 1, 1).unwrap();
        assert_eq!(days_since_epoch(date), -2_556_697);

        let date = NaiveDate::from_ymd_opt(-4801, 3, 1).unwrap();
        assert_eq!(date_from_epoch(days_since_epoch(date)).unwrap(), date);
    }

    #[test]
    fn test_date_from_epoch_round_trip() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let offset: i64 = rng.gen_range(-2_000_000..2_000_000);
            let date = date_from_epoch(offset).unwrap();
            assert_eq!(days_since_epoch(date), offset);
        }
    }

    #[test]
    fn test_date_from_epoch_out_of_range() {
        assert!(matches!(
            date_from_epoch(i64::MAX),
            Err(SolError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 15));
        assert_eq!(parse_date("0001-01-01").unwrap().year(), 1);
    }

    #[test]
    fn test_parse_invalid_date() {
        for input in [
            "",
            "15/03/2024",
            "2024-02-30",
            "yesterday",
            "-5000-01-01",
            "+12000-01-01",
            "12000-01-01",
            "0000-01-01",
            "24-03-15",
        ] {
            match parse_date(input) {
                Err(SolError::InvalidDate(s)) => assert_eq!(s, input),
                other => panic!("expected InvalidDate for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_resolve_date() {
        let today = parse_date("2026-10-16").unwrap();

        let missing = resolve_date(None, today);
        assert_eq!(missing.date, today);
        assert!(!missing.fell_back);

        let blank = resolve_date(Some("  \n"), today);
        assert_eq!(blank.date, today);
        assert!(!blank.fell_back);

        let given = resolve_date(Some("2024-03-15\n"), today);
        assert_eq!(given.date, parse_date("2024-03-15").unwrap());
        assert!(!given.fell_back);

        let invalid = resolve_date(Some("2024/03/15"), today);
        assert_eq!(invalid.date, today);
        assert!(invalid.fell_back);
    }
}
