//! Holiday rules.
//!
//! Sundays and the 2nd and 4th Saturday of each month are holidays.
//! Derived on the fly from the date, never stored.

use chrono::{Datelike, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayKind {
    Sunday,
    SecondSaturday,
    FourthSaturday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub kind: HolidayKind,
    pub name: &'static str,
}

/// Classify a date as a holiday, or `None` for a working day.
///
/// The Nth Saturday counts from the first Saturday on or after the 1st of the
/// month; only the 2nd and 4th classify. A month with 5 Saturdays has no
/// "5th Saturday" holiday.
pub fn classify_holiday(date: NaiveDate) -> Option<Holiday> {
    match date.weekday() {
        Weekday::Sun => Some(Holiday {
            kind: HolidayKind::Sunday,
            name: "Sunday",
        }),
        Weekday::Sat => match saturday_ordinal(date) {
            2 => Some(Holiday {
                kind: HolidayKind::SecondSaturday,
                name: "2nd Saturday",
            }),
            4 => Some(Holiday {
                kind: HolidayKind::FourthSaturday,
                name: "4th Saturday",
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Which Saturday of its month `date` is (1-based). Only valid for Saturdays.
fn saturday_ordinal(date: NaiveDate) -> u32 {
    let first_weekday = date.with_day(1).unwrap().weekday();
    let first_saturday =
        1 + (Weekday::Sat.num_days_from_monday() + 7 - first_weekday.num_days_from_monday()) % 7;
    (date.day() - first_saturday) / 7 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekdays_are_never_holidays() {
        // Mon Mar 3 .. Fri Mar 7 2025, and Mon Jul 7 .. Fri Jul 11 2025
        for d in 3..=7 {
            assert_eq!(classify_holiday(date(2025, 3, d)), None);
        }
        for d in 7..=11 {
            assert_eq!(classify_holiday(date(2025, 7, d)), None);
        }
    }

    #[test]
    fn test_every_sunday_is_a_holiday() {
        for (y, m, d) in [(2025, 3, 2), (2025, 6, 29), (2024, 2, 25), (2026, 1, 4)] {
            let holiday = classify_holiday(date(y, m, d)).unwrap();
            assert_eq!(holiday.kind, HolidayKind::Sunday);
        }
    }

    #[test]
    fn test_five_saturday_month_classifies_only_second_and_fourth() {
        // March 2025 has Saturdays on the 1st, 8th, 15th, 22nd and 29th
        assert_eq!(classify_holiday(date(2025, 3, 1)), None);
        assert_eq!(
            classify_holiday(date(2025, 3, 8)).unwrap().kind,
            HolidayKind::SecondSaturday
        );
        assert_eq!(classify_holiday(date(2025, 3, 15)), None);
        assert_eq!(
            classify_holiday(date(2025, 3, 22)).unwrap().kind,
            HolidayKind::FourthSaturday
        );
        assert_eq!(classify_holiday(date(2025, 3, 29)), None);
    }

    #[test]
    fn test_saturday_ordinals_when_month_starts_midweek() {
        // July 2025 starts on a Tuesday; first Saturday is the 5th
        assert_eq!(classify_holiday(date(2025, 7, 5)), None);
        assert_eq!(
            classify_holiday(date(2025, 7, 12)).unwrap().kind,
            HolidayKind::SecondSaturday
        );
        assert_eq!(
            classify_holiday(date(2025, 7, 26)).unwrap().kind,
            HolidayKind::FourthSaturday
        );
    }
}
