//! Signed day difference between a date string and today.

use crate::error::{AssistError, Result};
use chrono::{Local, NaiveDate};

/// Expected input format for [`days_from`] and [`days_from_today`].
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Compute the signed number of days from `date` to `today`.
///
/// Positive when the given date lies in the past, negative when it lies in the
/// future, zero when it equals `today`.
///
/// # Errors
/// Returns [`AssistError::DateFormat`] when the string does not match
/// `YYYY-MM-DD` or names an impossible calendar date. The error carries the
/// offending input.
pub fn days_from(date: &str, today: NaiveDate) -> Result<i64> {
    let given = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| AssistError::DateFormat(date.to_string()))?;
    Ok((today - given).num_days())
}

/// Compute the signed number of days from `date` to the current local date.
///
/// Clock-reading wrapper around [`days_from`].
///
/// # Errors
/// Same as [`days_from`].
pub fn days_from_today(date: &str) -> Result<i64> {
    days_from(date, Local::now().date_naive())
}
