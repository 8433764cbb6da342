//! Upcoming-birthday filtering with weekend-shift adjustment.
//!
//! Scans a list of user records for birthdays falling within the next 7 days
//! (today inclusive) and computes the congratulation date for each, moving
//! weekend birthdays forward to the following Monday.
//!
//! Records are error-tolerant: a malformed or missing birthday skips that
//! record with a `tracing` warning and processing continues. The function as a
//! whole never fails — it always returns a list, possibly partial or empty.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Input format for birthday strings.
const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";
/// Length of the lookahead window in days; day 0 is today.
const WINDOW_DAYS: i64 = 7;
/// Name substituted when a record carries none.
const UNKNOWN_NAME: &str = "Unknown";

/// A user record as it arrives from the outside world.
///
/// Both fields are optional because upstream data is messy: a missing name
/// falls back to "Unknown", a missing or malformed birthday skips the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Raw birthday string, nominally `YYYY.MM.DD`. Kept unparsed so a bad
    /// value in one record cannot fail deserialization of the whole list.
    #[serde(default)]
    pub birthday: Option<String>,
}

impl UserRecord {
    /// The record's name, or "Unknown" when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// A scheduled congratulation for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CongratulationEntry {
    pub name: String,
    /// The date to congratulate on — the birthday itself, or the following
    /// Monday when the birthday lands on a weekend.
    #[serde(serialize_with = "dotted_date::serialize")]
    pub congratulation_date: NaiveDate,
}

impl CongratulationEntry {
    /// The congratulation date rendered in the `YYYY.MM.DD` wire format.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

/// Serde adapter rendering a `NaiveDate` as `YYYY.MM.DD`.
mod dotted_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(super::BIRTHDAY_FORMAT).to_string())
    }
}

/// Find users whose birthday falls within `[today, today + 6]` and compute
/// their congratulation dates.
///
/// Weekend birthdays are shifted to the following Monday. Output preserves the
/// relative order of qualifying input records.
///
/// Per-record failures (missing birthday, wrong format, impossible calendar
/// date, Feb-29 in a year without one) emit a warning and exclude the record;
/// they never propagate to the caller.
pub fn find_upcoming_birthdays(today: NaiveDate, users: &[UserRecord]) -> Vec<CongratulationEntry> {
    let mut upcoming = Vec::new();

    for user in users {
        let name = user.display_name();

        let Some(raw) = user.birthday.as_deref() else {
            warn!("Skipping user '{name}': missing birthday field");
            continue;
        };

        let birthday = match NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                warn!("Skipping user '{name}': invalid birthday '{raw}': {e}");
                continue;
            }
        };

        // Map the birthday into the current year. Fails only for Feb-29
        // birthdays when the current year is not a leap year; policy is to
        // skip rather than remap to Feb 28 or Mar 1.
        let Some(mut birthday_this_year) = birthday.with_year(today.year()) else {
            warn!(
                "Skipping user '{name}': birthday '{raw}' does not exist in {}",
                today.year()
            );
            continue;
        };

        // Already passed this year — the upcoming one is next year's.
        if birthday_this_year < today {
            match birthday_this_year.with_year(today.year() + 1) {
                Some(next_year) => birthday_this_year = next_year,
                None => {
                    // Feb 29 in a leap year, already behind us; next year has
                    // no Feb 29. Same skip policy as the mapping above.
                    warn!(
                        "Skipping user '{name}': birthday '{raw}' does not exist in {}",
                        today.year() + 1
                    );
                    continue;
                }
            }
        }

        let days_until = (birthday_this_year - today).num_days();
        if !(0..WINDOW_DAYS).contains(&days_until) {
            continue;
        }

        let mut congratulation_date = birthday_this_year;
        let weekday = congratulation_date.weekday().num_days_from_monday();
        if weekday > 4 {
            // Saturday (5) or Sunday (6) — move to the following Monday.
            congratulation_date += Duration::days(7 - i64::from(weekday));
        }

        upcoming.push(CongratulationEntry {
            name: name.to_string(),
            congratulation_date,
        });
    }

    upcoming
}

/// Find upcoming birthdays relative to the current local date.
///
/// Clock-reading wrapper around [`find_upcoming_birthdays`].
pub fn upcoming_birthdays(users: &[UserRecord]) -> Vec<CongratulationEntry> {
    find_upcoming_birthdays(Local::now().date_naive(), users)
}
