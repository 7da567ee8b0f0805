use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SpendError};

/// Number of days in the given month, e.g. 29 for February 2024.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(SpendError::InvalidMonth(month));
    }
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| SpendError::InvalidConfig(format!("year {year} is out of range")))
}

pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SpendError::InvalidConfig(format!("no such date: {year:04}-{month:02}-{day:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_2024() {
        let expected = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(days_in_month(2024, i as u32 + 1).unwrap(), *want, "month {}", i + 1);
        }
    }

    #[test]
    fn test_non_leap_february() {
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(days_in_month(2024, 13), Err(SpendError::InvalidMonth(13))));
        assert!(matches!(days_in_month(2024, 0), Err(SpendError::InvalidMonth(0))));
    }

    #[test]
    fn test_date_formats_iso() {
        let d = date(2024, 2, 1).unwrap();
        assert_eq!(d.format("%Y-%m-%d").to_string(), "2024-02-01");
        assert!(date(2024, 2, 30).is_err());
    }
}
