//! Upcoming birthday scheduling.
//!
//! A birthday qualifies when its next occurrence is at most `days` days away.
//! Occurrences on a weekend are congratulated on the following Monday; the
//! shift only affects the reported date and the ordering, never qualification.

use crate::domain::{ValidationError, BIRTHDAY_FORMAT};
use crate::models::Contact;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Stored contact name
    pub name: String,

    /// The birth date itself
    pub birthday: NaiveDate,

    /// Next calendar occurrence, on or after today
    pub occurrence: NaiveDate,

    /// Occurrence moved off the weekend
    pub congratulation_date: NaiveDate,

    /// Days from today to the occurrence
    pub days_until: i64,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT),
            self.congratulation_date.format("%A")
        )
    }
}

/// The birthday's occurrence in `year`.
///
/// February 29 falls back to February 28 outside leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// This year's occurrence, or next year's if it has already passed.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Collect contacts whose next birthday is `0..=days` days after `today`.
///
/// Sorted by congratulation date; contacts sharing a date keep their input order.
///
/// # Errors
///
/// Returns `ValidationError::NegativeRange` if `days` is negative.
pub fn upcoming_birthdays<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    today: NaiveDate,
    days: i64,
) -> Result<Vec<UpcomingBirthday>, ValidationError> {
    if days < 0 {
        return Err(ValidationError::NegativeRange(days));
    }

    let mut upcoming: Vec<UpcomingBirthday> = contacts
        .into_iter()
        .filter_map(|contact| {
            let birthday = contact.birthday()?.date();
            let occurrence = next_occurrence(birthday, today)?;
            let days_until = (occurrence - today).num_days();

            if !(0..=days).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: contact.name().to_string(),
                birthday,
                occurrence,
                congratulation_date: congratulation_date(occurrence),
                days_until,
            })
        })
        .collect();

    // Stable sort keeps insertion order for equal dates.
    upcoming.sort_by_key(|entry| entry.congratulation_date);

    tracing::debug!(days, count = upcoming.len(), "Upcoming birthdays computed");
    Ok(upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_occurrence_this_year_and_next() {
        let today = date(2024, 6, 15);
        assert_eq!(
            next_occurrence(date(1990, 6, 15), today),
            Some(date(2024, 6, 15))
        );
        assert_eq!(
            next_occurrence(date(1990, 6, 20), today),
            Some(date(2024, 6, 20))
        );
        assert_eq!(
            next_occurrence(date(1990, 6, 14), today),
            Some(date(2025, 6, 14))
        );
    }

    #[test]
    fn test_leap_day_falls_back_to_feb_28() {
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2023), Some(date(2023, 2, 28)));
        assert_eq!(occurrence_in_year(date(2000, 2, 29), 2024), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_congratulation_date_weekend_shift() {
        // 2024-06-15 is a Saturday
        assert_eq!(congratulation_date(date(2024, 6, 15)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 16)), date(2024, 6, 17));
        assert_eq!(congratulation_date(date(2024, 6, 14)), date(2024, 6, 14));
        assert_eq!(congratulation_date(date(2024, 6, 17)), date(2024, 6, 17));
    }

    #[test]
    fn test_upcoming_rejects_negative_days() {
        let contacts: Vec<Contact> = Vec::new();
        assert_eq!(
            upcoming_birthdays(&contacts, date(2024, 1, 1), -1),
            Err(ValidationError::NegativeRange(-1))
        );
    }

    #[test]
    fn test_display_uses_congratulation_date() {
        let entry = UpcomingBirthday {
            name: "Ann".to_string(),
            birthday: date(1990, 1, 1),
            occurrence: date(2022, 1, 1),
            congratulation_date: date(2022, 1, 3),
            days_until: 5,
        };
        assert_eq!(entry.to_string(), "Ann: 03.01.2022 (Monday)");
    }
}
