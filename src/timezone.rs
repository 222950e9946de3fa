//! Resolves the current date through a canonical timezone name.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the UTC offset currently in effect for a canonical timezone name,
/// e.g. "Europe/Moscow".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the name is not a canonical
/// timezone.
pub fn local_offset(canonical_timezone: &str) -> Result<UtcOffset, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The current calendar date in the given timezone.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the name is not a canonical
/// timezone.
pub fn today_in(canonical_timezone: &str) -> Result<Date, Error> {
    let offset = local_offset(canonical_timezone)?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).date())
}
